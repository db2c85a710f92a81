// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared fixtures for unit tests.

use crate::api::RawEpisode;
use crate::episode::{Episode, normalize};

/// A complete raw record published 2021-03-11, 3661 seconds long
pub fn raw_episode(id: &str) -> RawEpisode {
    serde_json::from_value(raw_episode_json(id)).unwrap()
}

/// The JSON form of [`raw_episode`], as the API would send it
pub fn raw_episode_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": format!("Episode {id}"),
        "thumbnail": format!("https://example.com/{id}.jpg"),
        "members": "Diego Fernandes, João Pedro",
        "published_at": "2021-03-11T20:30:00.000Z",
        "description": format!("<p>About {id}</p>"),
        "file": {
            "url": format!("https://example.com/{id}.m4a"),
            "type": "audio/x-m4a",
            "duration": 3661
        }
    })
}

/// A normalized episode built from [`raw_episode`]
pub fn episode(id: &str) -> Episode {
    normalize(raw_episode(id)).unwrap()
}
