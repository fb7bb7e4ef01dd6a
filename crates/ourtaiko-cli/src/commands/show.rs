//! Render a page by path, the way the site's router would.

use std::path::Path;

use anyhow::{Context, Result, bail};
use ourtaiko::{PageContext, Route, load_song_stats, load_user_scores, render_route};

use crate::cli::Args;
use crate::cli_utils;

pub async fn run(
    args: &Args,
    path: &str,
    query: Option<String>,
    scores: Option<&Path>,
    stats: Option<&Path>,
) -> Result<()> {
    let config = cli_utils::load_config(args);
    let mut state = cli_utils::build_state(&config)?;

    let Some(route) = state.router.resolve(path) else {
        let known: Vec<&str> = state.router.routes().iter().map(|r| r.path()).collect();
        bail!("No page at {} (known: {})", path, known.join(", "));
    };

    if route != Route::Guide {
        cli_utils::load_songs(&config, &mut state).await?;
    }

    let mut ctx = PageContext {
        color: cli_utils::color_mode(args),
        query,
        ..Default::default()
    };
    if let Some(path) = scores {
        ctx.scores = load_user_scores(path)
            .with_context(|| format!("Failed to read scores from {}", path.display()))?;
    }
    if let Some(path) = stats {
        ctx.stats = load_song_stats(path)
            .with_context(|| format!("Failed to read stats from {}", path.display()))?;
    }

    print!("{}", render_route(route, &state, &ctx));
    Ok(())
}
