//! Common CLI utility functions shared across commands.

use anyhow::{Context, Result};
use ourtaiko::{AppState, ColorMode, FileSource, HttpSource, Preferences, ViewerConfig};
use tracing::{debug, info, warn};

use crate::cli::Args;

/// Load the config file, falling back to defaults when it is absent or invalid.
/// Command-line overrides are applied on top.
pub fn load_config(args: &Args) -> ViewerConfig {
    let mut config = if args.config.exists() {
        match ViewerConfig::load(&args.config) {
            Ok(c) => {
                info!("Loaded config from {:?}", args.config);
                c
            }
            Err(e) => {
                warn!("Failed to load config: {}, using defaults", e);
                ViewerConfig::default()
            }
        }
    } else {
        debug!("No config at {:?}, using defaults", args.config);
        ViewerConfig::default()
    };

    if let Some(url) = &args.songs_url {
        config.songs_url = url.clone();
        config.songs_file = None;
    }
    if let Some(file) = &args.songs_file {
        config.songs_file = Some(file.clone());
    }
    if let Some(prefs) = &args.prefs {
        config.preferences = Some(prefs.clone());
    }
    config
}

/// Open the preferences file named by the config, or the default location.
pub fn open_preferences(config: &ViewerConfig) -> Preferences {
    match config.preferences.clone().or_else(Preferences::default_path) {
        Some(path) => Preferences::load_or_default(path),
        None => {
            warn!("No config directory available, preferences will not be saved");
            Preferences::in_memory()
        }
    }
}

/// Build application state without loading songs.
pub fn build_state(config: &ViewerConfig) -> Result<AppState> {
    AppState::new(open_preferences(config)).context("Failed to initialize application state")
}

/// Load the songs database into `state` from the configured source.
pub async fn load_songs(config: &ViewerConfig, state: &mut AppState) -> Result<()> {
    let count = match &config.songs_file {
        Some(path) => state.load_songs(&FileSource::new(path)).await.len(),
        None => {
            let source = HttpSource::new(config.songs_url.clone())
                .context("Failed to create HTTP client")?;
            state.load_songs(&source).await.len()
        }
    };
    debug!("Songs database has {} entries", count);
    Ok(())
}

pub fn color_mode(args: &Args) -> ColorMode {
    if args.no_color {
        ColorMode::Plain
    } else {
        ColorMode::Colored
    }
}
