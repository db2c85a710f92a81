// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};

use podhome::{
    BuildEvent, BuildOptions, EpisodeQuery, NoopReporter, ProgressReporter, REVALIDATE_SECONDS,
    ReqwestClient, SharedProgressReporter, build_page,
};

// Emoji with fallback for terminals without Unicode support
static MICROPHONE: Emoji<'_, '_> = Emoji("🎙️  ", "");
static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "[~] ");
static HEADPHONES: Emoji<'_, '_> = Emoji("🎧 ", "[i] ");
static PAGE: Emoji<'_, '_> = Emoji("📄 ", "[+] ");
static BROOM: Emoji<'_, '_> = Emoji("🧹 ", "[-] ");
static PARTY: Emoji<'_, '_> = Emoji("🎉 ", "[*] ");
static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "");

/// Generate a static podcast home page from an episode API
#[derive(Parser, Debug)]
#[command(name = "podhome")]
#[command(about = "Generate a static podcast home page from an episode API")]
#[command(version)]
struct Args {
    /// Base URL of the episode API (e.g. http://localhost:3333)
    api_url: String,

    /// Output directory for the generated site
    output_dir: PathBuf,

    /// Number of most recent episodes to list
    #[arg(short, long, default_value = "12")]
    limit: usize,

    /// HTTP request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Regeneration interval in seconds recorded in props.json
    #[arg(long, default_value_t = REVALIDATE_SECONDS)]
    revalidate: u64,

    /// Quiet mode - suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

/// Progress reporter using an indicatif spinner for terminal output
struct SpinnerReporter {
    spinner: ProgressBar,
}

impl SpinnerReporter {
    fn new() -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.enable_steady_tick(Duration::from_millis(100));

        Self { spinner }
    }
}

impl ProgressReporter for SpinnerReporter {
    fn report(&self, event: BuildEvent) {
        match event {
            BuildEvent::FetchingEpisodes { url } => {
                self.spinner
                    .set_message(format!("{SEARCH}Fetching episodes: {}", url.cyan()));
            }

            BuildEvent::EpisodesFetched { count } => {
                self.spinner.set_message(format!(
                    "{HEADPHONES}{} episodes received",
                    count.to_string().cyan()
                ));
            }

            BuildEvent::PageWritten { path, content_hash } => {
                self.spinner.println(format!(
                    "  {PAGE}{} {}",
                    path.display().to_string().green(),
                    content_hash.dimmed()
                ));
            }

            BuildEvent::StalePagesRemoved { count } => {
                self.spinner.println(format!(
                    "  {BROOM}Removed {} stale episode pages",
                    count.to_string().yellow()
                ));
            }

            BuildEvent::BuildCompleted {
                latest_count,
                remaining_count,
                pages_written,
            } => {
                self.spinner.finish_and_clear();
                println!(
                    "\n{PARTY}{} {} latest, {} in table, {} pages written",
                    "Build complete:".bold().green(),
                    latest_count.to_string().green().bold(),
                    remaining_count.to_string().yellow(),
                    pages_written.to_string().cyan()
                );
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if !args.quiet {
        println!(
            "\n{}{} {}\n",
            MICROPHONE,
            "podhome".bold().magenta(),
            "- Podcast Home Page Generator".dimmed()
        );
    }

    let client = match args.timeout {
        Some(secs) => ReqwestClient::with_timeout(Duration::from_secs(secs))
            .context("Failed to create HTTP client")?,
        None => ReqwestClient::new(),
    };

    let options = BuildOptions {
        api_url: args.api_url,
        query: EpisodeQuery {
            limit: args.limit,
            ..Default::default()
        },
        revalidate: args.revalidate,
    };

    let reporter: SharedProgressReporter = if args.quiet {
        NoopReporter::shared()
    } else {
        Arc::new(SpinnerReporter::new())
    };

    build_page(&client, &args.output_dir, &options, reporter)
        .await
        .context("Failed to build page")?;

    if !args.quiet {
        println!(
            "\n{FOLDER}Output: {}\n",
            args.output_dir.display().to_string().cyan()
        );
    }

    Ok(())
}
