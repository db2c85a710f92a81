// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use url::Url;

use crate::error::OutputError;

/// Directory (relative to the output root) holding episode detail pages
pub const EPISODES_DIR: &str = "episodes";

const STAGING_PREFIX: &str = ".podhome-staging-";

/// Hex digits of the id digest appended to page names
const ID_DIGEST_LEN: usize = 10;

/// File name of the detail page for an episode id.
///
/// The readable stem is sanitized, so the digest of the unmodified id
/// keeps distinct ids on distinct files.
pub fn episode_page_filename(id: &str) -> String {
    let stem = sanitize_filename::sanitize(id);
    let stem = if stem.is_empty() { "episode" } else { stem.as_str() };
    let digest = format!("{:x}", Sha256::digest(id.as_bytes()));
    format!("{stem}-{}.html", &digest[..ID_DIGEST_LEN])
}

/// Link from the home page to an episode detail page, percent-encoded
pub fn episode_href(id: &str) -> String {
    // Any base works; only the encoded relative path is kept
    let mut url = Url::parse("http://localhost/").expect("valid base URL");
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.push(EPISODES_DIR).push(&episode_page_filename(id));
    }
    url.path().trim_start_matches('/').to_string()
}

/// Create a directory and its parents
pub fn ensure_dir(path: &Path) -> Result<(), OutputError> {
    std::fs::create_dir_all(path).map_err(|e| OutputError::CreateDirectoryFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

pub fn write_file(path: &Path, contents: &str) -> Result<(), OutputError> {
    std::fs::write(path, contents).map_err(|e| OutputError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// SHA-256 of rendered content, prefixed with the algorithm name
pub fn content_hash(contents: &str) -> String {
    format!("sha256:{:x}", Sha256::digest(contents.as_bytes()))
}

/// Write a set of generated files into `output_dir`.
///
/// Everything is first written to a staging directory inside
/// `output_dir`; only when all writes succeed are the files renamed into
/// place, in the given order. Detail pages from earlier builds that are
/// not part of `files` are removed afterwards. Returns the number of
/// stale pages removed.
pub fn publish(output_dir: &Path, files: &[(PathBuf, String)]) -> Result<usize, OutputError> {
    let mut seen = HashSet::new();
    for (relative_path, _) in files {
        if !seen.insert(relative_path) {
            return Err(OutputError::DuplicatePage {
                path: relative_path.clone(),
            });
        }
    }

    ensure_dir(output_dir)?;
    let staging = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempdir_in(output_dir)
        .map_err(|e| OutputError::CreateDirectoryFailed {
            path: output_dir.to_path_buf(),
            source: e,
        })?;

    for (relative_path, contents) in files {
        let staged = staging.path().join(relative_path);
        if let Some(parent) = staged.parent() {
            ensure_dir(parent)?;
        }
        write_file(&staged, contents)?;
    }

    for (relative_path, _) in files {
        let target = output_dir.join(relative_path);
        if let Some(parent) = target.parent() {
            ensure_dir(parent)?;
        }
        std::fs::rename(staging.path().join(relative_path), &target).map_err(|e| {
            OutputError::PublishFailed {
                path: target.clone(),
                source: e,
            }
        })?;
    }

    let keep: HashSet<PathBuf> = files.iter().map(|(path, _)| output_dir.join(path)).collect();
    remove_stale_pages(&output_dir.join(EPISODES_DIR), &keep)
}

/// Remove `.html` files in `dir` that are not in `keep`
fn remove_stale_pages(dir: &Path, keep: &HashSet<PathBuf>) -> Result<usize, OutputError> {
    if !dir.is_dir() {
        return Ok(0);
    }

    let entries = std::fs::read_dir(dir).map_err(|e| OutputError::ReadDirectoryFailed {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut removed = 0;
    for entry in entries {
        let path = entry
            .map_err(|e| OutputError::ReadDirectoryFailed {
                path: dir.to_path_buf(),
                source: e,
            })?
            .path();

        let is_page = path.is_file() && path.extension().is_some_and(|ext| ext == "html");
        if is_page && !keep.contains(&path) {
            std::fs::remove_file(&path).map_err(|e| OutputError::RemoveFailed {
                path: path.clone(),
                source: e,
            })?;
            removed += 1;
        }
    }

    Ok(removed)
}
