use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::manifest::files::display_path;

/// Column headers, written even when there are no rows
pub const MANIFEST_HEADERS: [&str; 7] = [
    "File Name",
    "File Path",
    "Commit SHA",
    "File Size (Bytes)",
    "Github Link",
    "Status Last Updated",
    "Read Status",
];

/// One manifest line; field order matches [`MANIFEST_HEADERS`]
#[derive(Debug, Serialize)]
struct ManifestRow<'a> {
    file_name: &'a str,
    file_path: &'a str,
    commit_sha: &'a str,
    file_size: u64,
    github_link: &'a str,
    status_last_updated: &'a str,
    read_status: &'a str,
}

/// Write the manifest for `file_paths` to `output_path`, returning the
/// number of data rows.
///
/// Each path is relative to `repo_path`; its size is read from disk and its
/// link is `{url_stem}/{path}`. A missing file aborts the write.
pub fn write_manifest(
    url_stem: &str,
    repo_path: &Path,
    file_paths: &[PathBuf],
    commit_sha: &str,
    output_path: &Path,
) -> Result<usize> {
    let today = Local::now().date_naive();
    let file = File::create(output_path)?;
    write_manifest_to(file, url_stem, repo_path, file_paths, commit_sha, today)
}

/// Write manifest rows to any sink with a fixed status date
pub fn write_manifest_to<W: io::Write>(
    sink: W,
    url_stem: &str,
    repo_path: &Path,
    file_paths: &[PathBuf],
    commit_sha: &str,
    status_date: NaiveDate,
) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(sink);
    writer.write_record(MANIFEST_HEADERS)?;

    let status_last_updated = status_date.format("%Y-%m-%d").to_string();

    for file_path in file_paths {
        let file_size = std::fs::metadata(repo_path.join(file_path))?.len();
        let relative = display_path(file_path);
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let github_link = format!("{url_stem}/{relative}");

        writer.serialize(ManifestRow {
            file_name: &file_name,
            file_path: &relative,
            commit_sha,
            file_size,
            github_link: &github_link,
            status_last_updated: &status_last_updated,
            read_status: "",
        })?;
    }

    writer.flush()?;
    Ok(file_paths.len())
}
