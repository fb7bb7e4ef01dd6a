//! Terminal rendering of the three pages.
//!
//! Each page has a row builder (plain data, used by tests and JSON output)
//! and a `render_*` function producing the console text.

mod guide;
mod report;
mod songs;

pub use guide::*;
pub use report::*;
pub use songs::*;

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::app::AppState;
use crate::router::Route;
use crate::score::{SongStats, UserScore};

/// Whether rendered text carries ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Colored,
    Plain,
}

impl ColorMode {
    pub(crate) fn paint<F>(self, text: &str, style: F) -> String
    where
        F: FnOnce(&str) -> String,
    {
        match self {
            Self::Colored => style(text),
            Self::Plain => text.to_string(),
        }
    }
}

/// Inputs a page may need beyond the application state.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub color: ColorMode,
    /// Title filter for the songs page.
    pub query: Option<String>,
    /// User scores for the report page.
    pub scores: Vec<UserScore>,
    /// Precomputed stats for the report page.
    pub stats: Vec<SongStats>,
}

/// Render the page for `route`.
pub fn render_route(route: Route, state: &AppState, ctx: &PageContext) -> String {
    let mut output = render_nav(route, state, ctx.color);
    let body = match route {
        Route::Guide => render_guide(state, ctx.color),
        Route::Songs => render_songs(state, ctx.query.as_deref(), ctx.color),
        Route::Report => render_report(state, &ctx.scores, &ctx.stats, ctx.color),
    };
    output.push_str(&body);
    output
}

/// Navigation bar with the active page highlighted.
pub fn render_nav(active: Route, state: &AppState, color: ColorMode) -> String {
    let items: Vec<String> = state
        .router
        .routes()
        .iter()
        .map(|route| {
            let label = format!("{} {}", state.i18n.t(route.nav_key()), route.path());
            if *route == active {
                color.paint(&format!("[{}]", label), |t| t.bold().cyan().to_string())
            } else {
                color.paint(&label, |t| t.dimmed().to_string())
            }
        })
        .collect();

    let mut output = String::new();
    let _ = writeln!(output, "{}", items.join("  "));
    let _ = writeln!(output, "{}", color.paint(&"━".repeat(50), |t| t.dimmed().to_string()));
    output
}

pub(crate) fn heading(text: &str, color: ColorMode) -> String {
    color.paint(text, |t| t.bold().to_string())
}
