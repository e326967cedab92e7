use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// Version-control metadata directory at the top of the checkout
const GIT_DIR: &str = ".git";

fn is_git_metadata(entry: &DirEntry, git_dir: &Path) -> bool {
    entry.path() == git_dir
}

/// List every file under `repo_path/subdirectory`, relative to `repo_path`.
///
/// Order follows the directory walk and is not sorted. Entries that cannot be
/// read (including a missing root) are skipped with a warning.
pub fn enumerate_files(repo_path: &Path, subdirectory: &Path) -> Vec<PathBuf> {
    let root = repo_path.join(subdirectory);
    let git_dir = repo_path.join(GIT_DIR);

    WalkDir::new(&root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_git_metadata(entry, &git_dir))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                None
            }
        })
        // Symlinks are not followed while walking, but links to files are listed
        .filter(|entry| entry.file_type().is_file() || entry.path().is_file())
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(repo_path)
                .ok()
                .map(Path::to_path_buf)
        })
        .collect()
}

/// Render a relative path with `/` separators, as used in URLs and the CSV
pub fn display_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
