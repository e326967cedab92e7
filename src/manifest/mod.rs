//! Review manifest generation.
//!
//! Snapshots the files under a subdirectory of a local checkout into a CSV
//! with the commit they were listed at, their size and a browsable link, plus
//! an empty "Read Status" column for reviewers to fill in by hand.

pub mod files;
pub mod git;
pub mod writer;

use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::ManifestConfig;
use crate::{Error, Result};

pub use files::enumerate_files;
pub use git::get_current_commit;
pub use writer::{write_manifest, MANIFEST_HEADERS};

/// Inputs for one manifest run
#[derive(Debug, Clone)]
pub struct ManifestRequest {
    pub repo_path: PathBuf,
    pub subdirectory: PathBuf,
    pub owner: String,
    pub branch: String,
    pub output: PathBuf,
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct ManifestReport {
    pub output: PathBuf,
    pub commit_sha: String,
    pub file_count: usize,
}

/// Name of the repository, taken from the last component of its path
pub fn repository_name(repo_path: &Path) -> Result<String> {
    let name = match repo_path.file_name() {
        Some(name) => name.to_os_string(),
        None => repo_path
            .canonicalize()?
            .file_name()
            .map(|n| n.to_os_string())
            .ok_or_else(|| {
                Error::Validation(format!(
                    "Cannot derive a repository name from {}",
                    repo_path.display()
                ))
            })?,
    };

    Ok(name.to_string_lossy().into_owned())
}

/// Base of the browsable file links, e.g. `github.com/acme/proj/blob/main`
pub fn url_stem(owner: &str, repo_name: &str, branch: &str) -> String {
    format!("github.com/{owner}/{repo_name}/blob/{branch}")
}

/// Resolve the commit, list the files and write the CSV.
///
/// Fails with [`Error::Git`] before touching the output when the commit
/// cannot be resolved.
pub fn generate_manifest(
    config: &ManifestConfig,
    request: &ManifestRequest,
) -> Result<ManifestReport> {
    let commit_sha = get_current_commit(&config.git_program, &request.repo_path)
        .ok_or_else(|| Error::Git("Unable to determine current git commit SHA.".to_string()))?;

    let repo_name = repository_name(&request.repo_path)?;
    let stem = url_stem(&request.owner, &repo_name, &request.branch);

    let file_paths = enumerate_files(&request.repo_path, &request.subdirectory);
    info!(
        "Found {} files under {} at {}",
        file_paths.len(),
        request.repo_path.join(&request.subdirectory).display(),
        commit_sha
    );

    let file_count = write_manifest(
        &stem,
        &request.repo_path,
        &file_paths,
        &commit_sha,
        &request.output,
    )?;

    Ok(ManifestReport {
        output: request.output.clone(),
        commit_sha,
        file_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_name() {
        assert_eq!(repository_name(Path::new("/work/proj")).unwrap(), "proj");
        assert_eq!(repository_name(Path::new("/work/proj/")).unwrap(), "proj");
        assert_eq!(repository_name(Path::new("proj")).unwrap(), "proj");
    }

    #[test]
    fn test_repository_name_of_current_dir() {
        let dir = tempfile::tempdir().unwrap();
        let expected = dir
            .path()
            .canonicalize()
            .unwrap()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned();

        assert_eq!(repository_name(&dir.path().join(".")).unwrap(), expected);
    }

    #[test]
    fn test_url_stem() {
        assert_eq!(
            url_stem("acme", "proj", "main"),
            "github.com/acme/proj/blob/main"
        );
    }
}
