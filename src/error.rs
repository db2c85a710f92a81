// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when fetching episodes from the API
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to fetch episodes from {url}: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Response from {url} is not a list of episodes: {source}")]
    InvalidBody {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur when formatting display values
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    #[error("Failed to parse date '{date_str}': {reason}")]
    InvalidDate { date_str: String, reason: String },
}

/// Errors that can occur while turning raw records into display episodes
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Episode '{episode}' is missing field '{field}'")]
    MissingField { episode: String, field: &'static str },

    #[error("Episode '{episode}' has invalid duration '{value}'")]
    InvalidDuration { episode: String, value: String },

    #[error("Format error: {0}")]
    Format(#[from] FormatError),
}

/// Errors that can occur when writing the generated site
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read directory {path}: {source}")]
    ReadDirectoryFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to move {path} into place: {source}")]
    PublishFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove stale page {path}: {source}")]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Two episodes map to the same page {path}")]
    DuplicatePage { path: PathBuf },

    #[error("Failed to serialize page props: {0}")]
    SerializeFailed(#[from] serde_json::Error),
}

/// Top-level errors for a page build
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Normalize error: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}
