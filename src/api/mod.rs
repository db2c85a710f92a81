mod fetch;
mod record;

pub use fetch::{EpisodeQuery, SortOrder, episodes_url, fetch_episodes, parse_episodes};
pub use record::{Members, RawDuration, RawEpisode, RawFile, RawId};
