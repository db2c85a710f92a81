// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::Serialize;

use crate::api::RawEpisode;
use crate::error::NormalizeError;

use super::format::{format_date, format_duration};

/// A display-ready episode.
///
/// Only built by [`normalize`], so `duration_as_string` always matches
/// `duration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    id: String,
    title: String,
    thumbnail: String,
    members: String,
    published_at: String,
    duration: u64,
    duration_as_string: String,
    url: String,
    description: String,
}

impl Episode {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }

    pub fn members(&self) -> &str {
        &self.members
    }

    /// Publication date as formatted for display
    pub fn published_at(&self) -> &str {
        &self.published_at
    }

    /// Duration in seconds
    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn duration_as_string(&self) -> &str {
        &self.duration_as_string
    }

    /// Audio file URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Description as sent by the API (HTML)
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Turn a raw API record into a display episode
pub fn normalize(raw: RawEpisode) -> Result<Episode, NormalizeError> {
    let id = match raw.id {
        Some(id) => id.to_string(),
        None => {
            return Err(NormalizeError::MissingField {
                episode: raw.title.unwrap_or_else(|| "Untitled Episode".to_string()),
                field: "id",
            });
        }
    };

    let title = require(raw.title, &id, "title")?;
    let thumbnail = require(raw.thumbnail, &id, "thumbnail")?;
    let members = require(raw.members, &id, "members")?.display();
    let published_at = require(raw.published_at, &id, "published_at")?;
    let description = require(raw.description, &id, "description")?;

    let file = require(raw.file, &id, "file")?;
    let url = require(file.url, &id, "file.url")?;
    let raw_duration = require(file.duration, &id, "file.duration")?;
    let duration = raw_duration
        .seconds()
        .ok_or_else(|| NormalizeError::InvalidDuration {
            episode: id.clone(),
            value: raw_duration.to_string(),
        })?;

    Ok(Episode {
        published_at: format_date(&published_at)?,
        duration_as_string: format_duration(duration),
        duration,
        id,
        title,
        thumbnail,
        members,
        url,
        description,
    })
}

/// Normalize a batch, failing on the first bad record
pub fn normalize_all(raws: Vec<RawEpisode>) -> Result<Vec<Episode>, NormalizeError> {
    raws.into_iter().map(normalize).collect()
}

fn require<T>(value: Option<T>, episode: &str, field: &'static str) -> Result<T, NormalizeError> {
    value.ok_or_else(|| NormalizeError::MissingField {
        episode: episode.to_string(),
        field,
    })
}
