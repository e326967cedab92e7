use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};

/// Resolve the commit checked out at `repo_path` by running
/// `<git_program> rev-parse HEAD` inside it.
///
/// Returns `None` when the program cannot be started or exits non-zero,
/// e.g. when the path is not a repository.
pub fn get_current_commit(git_program: &str, repo_path: &Path) -> Option<String> {
    let output = match Command::new(git_program)
        .args(["rev-parse", "HEAD"])
        .current_dir(repo_path)
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            warn!("Failed to run {} in {}: {}", git_program, repo_path.display(), e);
            return None;
        }
    };

    if !output.status.success() {
        warn!(
            "{} rev-parse HEAD failed in {} ({}): {}",
            git_program,
            repo_path.display(),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return None;
    }

    let sha = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if sha.is_empty() {
        return None;
    }

    debug!("Resolved HEAD of {} to {}", repo_path.display(), sha);
    Some(sha)
}
