pub mod api;
pub mod build;
pub mod episode;
pub mod error;
pub mod http;
pub mod page;
pub mod progress;

#[cfg(test)]
mod test_helpers;

// Re-export main types for convenience
pub use api::{EpisodeQuery, RawEpisode, SortOrder, episodes_url, fetch_episodes};
pub use build::{BuildOptions, BuildResult, build_page};
pub use episode::{
    Episode, Partition, format_date, format_duration, normalize, normalize_all, partition,
};
pub use error::{BuildError, FetchError, FormatError, NormalizeError, OutputError};
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use page::{HomeProps, REVALIDATE_SECONDS, render_episode, render_home};
pub use progress::{BuildEvent, NoopReporter, ProgressReporter, SharedProgressReporter};
