// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use std::sync::Arc;

/// Events emitted while building the site
#[derive(Debug, Clone)]
pub enum BuildEvent {
    /// Episode list is being requested from the API
    FetchingEpisodes { url: String },

    /// Episode list arrived and was decoded
    EpisodesFetched { count: usize },

    /// A page was rendered and written
    PageWritten {
        path: PathBuf,
        /// SHA-256 of the written HTML
        content_hash: String,
    },

    /// Detail pages left over from earlier builds were removed
    StalePagesRemoved { count: usize },

    /// Build finished successfully
    BuildCompleted {
        latest_count: usize,
        remaining_count: usize,
        pages_written: usize,
    },
}

/// Trait for reporting progress events during a build.
///
/// Implementations can use this to display spinners, log messages,
/// or collect statistics.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress event
    fn report(&self, event: BuildEvent);
}

/// A shared reference to a progress reporter
pub type SharedProgressReporter = Arc<dyn ProgressReporter>;

/// A no-op progress reporter that silently ignores all events.
/// Useful for tests or quiet mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&self, _event: BuildEvent) {}
}

impl NoopReporter {
    /// Create a new NoopReporter wrapped in an Arc
    pub fn shared() -> SharedProgressReporter {
        Arc::new(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingReporter {
        events: Mutex<Vec<BuildEvent>>,
    }

    impl ProgressReporter for RecordingReporter {
        fn report(&self, event: BuildEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn noop_reporter_handles_all_events() {
        let reporter = NoopReporter::shared();

        reporter.report(BuildEvent::FetchingEpisodes {
            url: "http://localhost:3333/episodes".to_string(),
        });
        reporter.report(BuildEvent::EpisodesFetched { count: 12 });
        reporter.report(BuildEvent::PageWritten {
            path: PathBuf::from("index.html"),
            content_hash: "sha256:abc123".to_string(),
        });
        reporter.report(BuildEvent::StalePagesRemoved { count: 2 });
        reporter.report(BuildEvent::BuildCompleted {
            latest_count: 2,
            remaining_count: 10,
            pages_written: 13,
        });
    }

    #[test]
    fn shared_reporter_forwards_events() {
        let recorder = Arc::new(RecordingReporter::default());
        let reporter: SharedProgressReporter = recorder.clone();

        reporter.report(BuildEvent::EpisodesFetched { count: 3 });

        let events = recorder.events.lock().unwrap();
        assert!(matches!(
            events.as_slice(),
            [BuildEvent::EpisodesFetched { count: 3 }]
        ));
    }
}
