//! Songs list command.

use anyhow::{Context, Result};
use ourtaiko::Route;
use ourtaiko::view::{render_nav, render_songs, song_rows};

use crate::cli::Args;
use crate::cli_utils;

pub async fn run(args: &Args, query: Option<&str>, json: bool) -> Result<()> {
    let config = cli_utils::load_config(args);
    let mut state = cli_utils::build_state(&config)?;
    cli_utils::load_songs(&config, &mut state).await?;

    if json {
        let rows = song_rows(&state, query);
        let output = serde_json::to_string_pretty(&rows).context("Failed to serialize JSON")?;
        println!("{}", output);
        return Ok(());
    }

    let color = cli_utils::color_mode(args);
    print!("{}", render_nav(Route::Songs, &state, color));
    print!("{}", render_songs(&state, query, color));
    Ok(())
}
