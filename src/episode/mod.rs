mod format;
mod normalize;
mod partition;

pub use format::{format_date, format_duration, parse_iso8601};
pub use normalize::{Episode, normalize, normalize_all};
pub use partition::{LATEST_COUNT, Partition, partition};
