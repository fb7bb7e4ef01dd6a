//! CLI argument definitions for ourtaiko.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ourtaiko")]
#[command(about = "Taiko rating viewer", version)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, env = "OURTAIKO_CONFIG", default_value = "ourtaiko.toml")]
    pub config: PathBuf,

    /// Songs database URL (overrides config)
    #[arg(long, env = "OURTAIKO_SONGS_URL")]
    pub songs_url: Option<String>,

    /// Read the songs database from a local file instead of the network
    #[arg(long, value_name = "FILE", conflicts_with = "songs_url")]
    pub songs_file: Option<PathBuf>,

    /// Preferences file (default: user config directory)
    #[arg(long, value_name = "FILE")]
    pub prefs: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the page at a path (/, /report, /songs)
    Show {
        /// Page path
        #[arg(default_value = "/")]
        path: String,
        /// Title filter for the songs page
        #[arg(short, long)]
        query: Option<String>,
        /// User scores JSON for the report page
        #[arg(long, value_name = "FILE")]
        scores: Option<PathBuf>,
        /// Song stats JSON for the report page
        #[arg(long, value_name = "FILE")]
        stats: Option<PathBuf>,
    },
    /// List songs by rating constant
    Songs {
        /// Fuzzy title filter
        #[arg(short, long)]
        query: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a score report
    Report {
        /// User scores JSON
        #[arg(long, value_name = "FILE")]
        scores: PathBuf,
        /// Song stats JSON
        #[arg(long, value_name = "FILE")]
        stats: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or set the interface language
    Lang {
        /// Locale to switch to (zh, en)
        locale: Option<String>,
    },
    /// Hide the current announcements until the next update
    Dismiss,
    /// Merge CN server titles into a local songs database
    SyncCn {
        /// Songs database file to update in place
        #[arg(long, default_value = "public/songs.json")]
        songs: PathBuf,
        /// CN song list API URL
        #[arg(long, env = "TAIKO_API_URL")]
        api_url: Option<String>,
        /// CN song list API token
        #[arg(long, env = "TAIKO_API_TOKEN", hide_env_values = true)]
        api_token: Option<String>,
    },
}
