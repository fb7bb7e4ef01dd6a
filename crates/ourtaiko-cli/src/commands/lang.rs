//! Show or switch the interface language.

use anyhow::{Context, Result};

use crate::cli::Args;
use crate::cli_utils;

pub fn run(args: &Args, locale: Option<&str>) -> Result<()> {
    let config = cli_utils::load_config(args);
    let mut state = cli_utils::build_state(&config)?;

    let Some(locale) = locale else {
        let name = state.i18n.t("lang.name");
        println!("{}", state.i18n.t_with("lang.current", &[("lang", name.as_str())]));
        let available: Vec<&str> = state.i18n.available_locales().collect();
        println!("({})", available.join(", "));
        return Ok(());
    };

    state
        .set_locale(locale)
        .with_context(|| format!("Failed to switch language to {}", locale))?;
    let name = state.i18n.t("lang.name");
    println!("{}", state.i18n.t_with("lang.changed", &[("lang", name.as_str())]));
    Ok(())
}
