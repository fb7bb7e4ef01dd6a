mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG is set)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ourtaiko_cli=warn,ourtaiko=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match &args.command {
        Some(Command::Show {
            path,
            query,
            scores,
            stats,
        }) => {
            commands::show::run(
                &args,
                path,
                query.clone(),
                scores.as_deref(),
                stats.as_deref(),
            )
            .await
        }
        Some(Command::Songs { query, json }) => {
            commands::songs::run(&args, query.as_deref(), *json).await
        }
        Some(Command::Report {
            scores,
            stats,
            json,
        }) => commands::report::run(&args, scores, stats.as_deref(), *json).await,
        Some(Command::Lang { locale }) => commands::lang::run(&args, locale.as_deref()),
        Some(Command::Dismiss) => commands::dismiss::run(&args),
        Some(Command::SyncCn {
            songs,
            api_url,
            api_token,
        }) => commands::sync_cn::run(&args, songs, api_url.as_deref(), api_token.as_deref()).await,
        None => commands::show::run(&args, "/", None, None, None).await,
    }
}
