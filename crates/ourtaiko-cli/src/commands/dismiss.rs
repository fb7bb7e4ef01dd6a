//! Hide the current announcements.

use anyhow::{Context, Result};

use crate::cli::Args;
use crate::cli_utils;

pub fn run(args: &Args) -> Result<()> {
    let config = cli_utils::load_config(args);
    let mut state = cli_utils::build_state(&config)?;

    state
        .dismiss_announcements()
        .context("Failed to save preferences")?;
    println!("{}", state.i18n.t("guide.dismissed"));
    Ok(())
}
