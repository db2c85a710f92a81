// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use crate::api::{EpisodeQuery, episodes_url, fetch_episodes};
use crate::episode::{normalize_all, partition};
use crate::error::BuildError;
use crate::http::HttpClient;
use crate::page::{
    EPISODES_DIR, HomeProps, PROPS_FILENAME, REVALIDATE_SECONDS, content_hash,
    episode_page_filename, publish, render_episode, render_home,
};
use crate::progress::{BuildEvent, SharedProgressReporter};

const INDEX_FILENAME: &str = "index.html";

/// Options for a page build
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Base URL of the episode API
    pub api_url: String,
    /// Listing parameters sent to the API
    pub query: EpisodeQuery,
    /// Regeneration interval in seconds, recorded in the page props
    pub revalidate: u64,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3333".to_string(),
            query: EpisodeQuery::default(),
            revalidate: REVALIDATE_SECONDS,
        }
    }
}

/// Result of a page build
#[derive(Debug, Clone)]
pub struct BuildResult {
    /// Number of episodes in the highlighted section
    pub latest: usize,
    /// Number of episodes in the table
    pub remaining: usize,
    /// Number of HTML files written (home page included)
    pub pages_written: usize,
    /// Detail pages from earlier builds that were removed
    pub stale_removed: usize,
    /// Content hash of the home page
    pub index_hash: String,
}

/// Build the home page and episode pages into `output_dir`.
///
/// Runs the whole pipeline in order:
/// 1. Fetches the latest episodes from the API
/// 2. Normalizes and partitions them
/// 3. Renders every page in memory
/// 4. Publishes the pages and `props.json`, home page last
/// 5. Removes detail pages of episodes no longer listed
///
/// Nothing is written unless fetching and normalizing succeed, and files
/// only replace the previous build once all of them were written.
pub async fn build_page<C: HttpClient>(
    client: &C,
    output_dir: &Path,
    options: &BuildOptions,
    reporter: SharedProgressReporter,
) -> Result<BuildResult, BuildError> {
    let url = episodes_url(&options.api_url, &options.query)?;

    reporter.report(BuildEvent::FetchingEpisodes {
        url: url.to_string(),
    });

    let raw_episodes = fetch_episodes(client, &url).await?;

    reporter.report(BuildEvent::EpisodesFetched {
        count: raw_episodes.len(),
    });

    let episodes = normalize_all(raw_episodes)?;
    let props = HomeProps::new(partition(episodes), options.revalidate);

    let mut files: Vec<(PathBuf, String)> = props
        .episodes()
        .map(|episode| {
            (
                Path::new(EPISODES_DIR).join(episode_page_filename(episode.id())),
                render_episode(episode).into_string(),
            )
        })
        .collect();
    files.push((PathBuf::from(PROPS_FILENAME), props.to_json()?));
    files.push((
        PathBuf::from(INDEX_FILENAME),
        render_home(&props).into_string(),
    ));

    let stale_removed = publish(output_dir, &files)?;

    let pages: Vec<_> = files
        .iter()
        .filter(|(path, _)| path.extension().is_some_and(|ext| ext == "html"))
        .collect();

    let mut index_hash = String::new();
    for (relative_path, html) in &pages {
        let hash = content_hash(html);
        if relative_path.as_path() == Path::new(INDEX_FILENAME) {
            index_hash = hash.clone();
        }

        reporter.report(BuildEvent::PageWritten {
            path: relative_path.clone(),
            content_hash: hash,
        });
    }

    if stale_removed > 0 {
        reporter.report(BuildEvent::StalePagesRemoved {
            count: stale_removed,
        });
    }

    let result = BuildResult {
        latest: props.latest_episodes.len(),
        remaining: props.all_episodes.len(),
        pages_written: pages.len(),
        stale_removed,
        index_hash,
    };

    reporter.report(BuildEvent::BuildCompleted {
        latest_count: result.latest,
        remaining_count: result.remaining,
        pages_written: result.pages_written,
    });

    Ok(result)
}
