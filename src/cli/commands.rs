use std::io::Write;

use crate::config::ManifestConfig;
use crate::manifest::{generate_manifest, ManifestRequest};
use crate::Result;

/// Generate a review manifest and report the outcome to `out`
pub fn manifest<W: Write>(
    config: &ManifestConfig,
    request: &ManifestRequest,
    out: &mut W,
) -> Result<()> {
    match generate_manifest(config, request) {
        Ok(report) => {
            writeln!(out, "CSV file generated at {}", report.output.display())?;
            writeln!(out, "  Commit: {}", report.commit_sha)?;
            writeln!(out, "  Files: {}", report.file_count)?;
            Ok(())
        }
        Err(e) => {
            writeln!(out, "Error: {e}")?;
            Err(e)
        }
    }
}
