// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use serde::Deserialize;

/// A single episode record as returned by the episode API.
///
/// Every field is optional here so that normalization can name the
/// missing field instead of failing with a generic JSON error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEpisode {
    pub id: Option<RawId>,
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub members: Option<Members>,
    pub published_at: Option<String>,
    pub description: Option<String>,
    pub file: Option<RawFile>,
}

/// The audio file attached to a record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFile {
    pub url: Option<String>,
    pub duration: Option<RawDuration>,
}

/// Record identifiers are usually slugs but numeric ids are accepted too
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawId::Text(s) => f.write_str(s),
            RawId::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Episode members, either preformatted or as a list of names
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Members {
    Text(String),
    List(Vec<String>),
}

impl Members {
    /// Members as a single display string
    pub fn display(&self) -> String {
        match self {
            Members::Text(s) => s.clone(),
            Members::List(names) => names.join(", "),
        }
    }
}

/// Duration in seconds, sent either as a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawDuration {
    Number(serde_json::Number),
    Text(String),
}

impl RawDuration {
    /// Whole seconds, or None if the value is not a non-negative number.
    /// Fractional seconds are truncated.
    pub fn seconds(&self) -> Option<u64> {
        match self {
            RawDuration::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(whole_seconds)),
            RawDuration::Text(s) => {
                let s = s.trim();
                s.parse::<u64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(whole_seconds))
            }
        }
    }
}

impl fmt::Display for RawDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawDuration::Number(n) => write!(f, "{n}"),
            RawDuration::Text(s) => f.write_str(s),
        }
    }
}

fn whole_seconds(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0).then(|| value.trunc() as u64)
}
