use std::fmt::Write as _;

use owo_colors::OwoColorize;
use serde::Serialize;

use super::{ColorMode, heading};
use crate::app::AppState;
use crate::difficulty::{Level, display_title};
use crate::song::{ChartKey, SongData};

/// One line of the songs page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongRow {
    pub key: String,
    pub title: String,
    pub level: Option<Level>,
    pub constant: f64,
    pub total_notes: u32,
    pub avg_density: f64,
    pub is_cn: bool,
}

impl SongRow {
    fn new(key: &str, chart_key: Option<ChartKey>, song: &SongData) -> Self {
        let level = chart_key.and_then(|k| k.level);
        let title = match level {
            Some(level) => display_title(song.display_title(), level),
            None => song.display_title().to_string(),
        };
        Self {
            key: key.to_string(),
            title,
            level,
            constant: song.constant,
            total_notes: song.total_notes,
            avg_density: song.avg_density,
            is_cn: song.is_cn,
        }
    }
}

/// Songs ordered by constant (or by match quality when `query` is set), with
/// duplicate catalog entries collapsed.
pub fn song_rows(state: &AppState, query: Option<&str>) -> Vec<SongRow> {
    let entries = match query {
        Some(query) if !query.trim().is_empty() => state.songs.search(query.trim()),
        _ => state.songs.sorted_by_constant(),
    };

    let keyed = entries
        .into_iter()
        .map(|(key, song)| (key, key.parse::<ChartKey>().ok(), song));

    state
        .duplicates
        .dedupe(keyed, |(_, chart_key, _)| chart_key.and_then(|k| k.chart()))
        .into_iter()
        .map(|(key, chart_key, song)| SongRow::new(key, chart_key, song))
        .collect()
}

pub fn render_songs(state: &AppState, query: Option<&str>, color: ColorMode) -> String {
    let i18n = &state.i18n;
    let mut output = String::new();
    let _ = writeln!(output, "{}", heading(&i18n.t("songs.title"), color));

    if state.songs.is_empty() {
        let _ = writeln!(output, "{}", i18n.t("songs.empty"));
        return output;
    }

    let rows = song_rows(state, query);
    if rows.is_empty() {
        let query = query.unwrap_or_default();
        let _ = writeln!(output, "{}", i18n.t_with("songs.noMatch", &[("query", query)]));
        return output;
    }

    let count = rows.len().to_string();
    let _ = writeln!(output, "{}", i18n.t_with("songs.count", &[("count", count.as_str())]));
    let _ = writeln!(
        output,
        "  {:>8}  {:>6}  {:>7}  {}",
        i18n.t("songs.columns.constant"),
        i18n.t("songs.columns.notes"),
        i18n.t("songs.columns.density"),
        i18n.t("songs.columns.title"),
    );
    for row in &rows {
        let badge = row
            .level
            .map(|level| format!(" {}", color.paint(level.badge(), |t| t.magenta().to_string())))
            .unwrap_or_default();
        let _ = writeln!(
            output,
            "  {:>8.1}  {:>6}  {:>7.2}  {}{}",
            row.constant, row.total_notes, row.avg_density, row.title, badge
        );
    }
    output
}
