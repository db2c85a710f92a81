// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::Serialize;

use crate::episode::{Episode, Partition};
use crate::error::OutputError;

/// File name of the serialized props in the output directory
pub const PROPS_FILENAME: &str = "props.json";

/// Regeneration interval declared for the home page (8 hours)
pub const REVALIDATE_SECONDS: u64 = 60 * 60 * 8;

/// Input data of the home page, as written next to the rendered HTML
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeProps {
    pub latest_episodes: Vec<Episode>,
    pub all_episodes: Vec<Episode>,
    /// Seconds after which the page should be regenerated
    pub revalidate: u64,
}

impl HomeProps {
    pub fn new(episodes: Partition<Episode>, revalidate: u64) -> Self {
        Self {
            latest_episodes: episodes.latest,
            all_episodes: episodes.remaining,
            revalidate,
        }
    }

    /// All episodes in API order
    pub fn episodes(&self) -> impl Iterator<Item = &Episode> {
        self.latest_episodes.iter().chain(self.all_episodes.iter())
    }

    /// Page props as pretty JSON
    pub fn to_json(&self) -> Result<String, OutputError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::episode::partition;
    use crate::test_helpers::episode;

    fn make_props() -> HomeProps {
        let episodes = vec![episode("a"), episode("b"), episode("c")];
        HomeProps::new(partition(episodes), REVALIDATE_SECONDS)
    }

    #[test]
    fn revalidate_is_eight_hours() {
        assert_eq!(REVALIDATE_SECONDS, 28800);
    }

    #[test]
    fn new_moves_partition_into_props() {
        let props = make_props();

        assert_eq!(props.latest_episodes.len(), 2);
        assert_eq!(props.all_episodes.len(), 1);
        let ids: Vec<_> = props.episodes().map(Episode::id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn to_json_uses_camel_case_keys() {
        let content = make_props().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(value["revalidate"], 28800);
        assert_eq!(value["latestEpisodes"][0]["id"], "a");
        assert_eq!(value["allEpisodes"][0]["id"], "c");
        assert_eq!(value["allEpisodes"][0]["durationAsString"], "01:01:01");
    }
}
