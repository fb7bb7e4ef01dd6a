//! Score report command.

use std::path::Path;

use anyhow::{Context, Result};
use ourtaiko::view::{render_nav, render_report, report_rows, stats_rows};
use ourtaiko::{Route, load_song_stats, load_user_scores};

use crate::cli::Args;
use crate::cli_utils;

pub async fn run(args: &Args, scores: &Path, stats: Option<&Path>, json: bool) -> Result<()> {
    let scores = load_user_scores(scores)
        .with_context(|| format!("Failed to read scores from {}", scores.display()))?;
    let stats = match stats {
        Some(path) => load_song_stats(path)
            .with_context(|| format!("Failed to read stats from {}", path.display()))?,
        None => Vec::new(),
    };

    let config = cli_utils::load_config(args);
    let mut state = cli_utils::build_state(&config)?;
    cli_utils::load_songs(&config, &mut state).await?;

    if json {
        let body = serde_json::json!({
            "scores": report_rows(&state, &scores),
            "stats": stats_rows(&stats),
        });
        let output = serde_json::to_string_pretty(&body).context("Failed to serialize JSON")?;
        println!("{}", output);
        return Ok(());
    }

    let color = cli_utils::color_mode(args);
    print!("{}", render_nav(Route::Report, &state, color));
    print!("{}", render_report(&state, &scores, &stats, color));
    Ok(())
}
