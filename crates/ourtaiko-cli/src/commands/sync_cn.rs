//! Merge CN server titles into a songs database file.

use std::path::Path;

use anyhow::{Context, Result, bail};
use ourtaiko::song::{parse_songs_data, save_songs_data};
use ourtaiko::{CnClient, CnConfig, apply_cn_titles};
use tracing::info;

use crate::cli::Args;
use crate::cli_utils;

pub async fn run(
    args: &Args,
    songs: &Path,
    api_url: Option<&str>,
    api_token: Option<&str>,
) -> Result<()> {
    let config = cli_utils::load_config(args);
    let state = cli_utils::build_state(&config)?;

    if !songs.exists() {
        bail!("{} does not exist", songs.display());
    }

    let cn_config = CnConfig {
        api_url: api_url.map(str::to_string).or(config.cn.api_url.clone()),
        api_token: api_token.map(str::to_string).or(config.cn.api_token.clone()),
    };
    let client = CnClient::from_config(&cn_config)?;

    eprintln!("Fetching CN song list...");
    let cn_songs = client
        .fetch_songs()
        .await
        .context("Failed to fetch CN song list")?;
    info!("CN server lists {} songs", cn_songs.len());

    eprintln!("Reading {}...", songs.display());
    let content = std::fs::read_to_string(songs)
        .with_context(|| format!("Failed to read {}", songs.display()))?;
    let mut db = parse_songs_data(&content)
        .with_context(|| format!("Failed to parse {}", songs.display()))?;

    let updated = apply_cn_titles(&mut db, &cn_songs);
    save_songs_data(songs, &db).with_context(|| format!("Failed to write {}", songs.display()))?;

    let count = updated.to_string();
    println!("{}", state.i18n.t_with("cn.updated", &[("count", count.as_str())]));
    Ok(())
}
