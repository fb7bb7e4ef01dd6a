use std::cmp::Ordering;
use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::{ColorMode, heading};
use crate::app::AppState;
use crate::difficulty::display_title;
use crate::duplicate::ChartRef;
use crate::score::{SongStats, UserScore};

/// A user score joined with the songs database.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub chart: ChartRef,
    /// `None` when the chart is not in the database.
    pub title: Option<String>,
    pub constant: Option<f64>,
    pub score: u32,
    pub great: u32,
    pub good: u32,
    pub bad: u32,
    pub full_combo: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Join scores with the database. Duplicate charts keep their best score;
/// rows are ordered by constant, unknown songs last.
pub fn report_rows(state: &AppState, scores: &[UserScore]) -> Vec<ReportRow> {
    let mut best_first: Vec<&UserScore> = scores.iter().collect();
    best_first.sort_by(|a, b| b.score.cmp(&a.score));

    let mut rows: Vec<ReportRow> = state
        .duplicates
        .dedupe(best_first, |score| Some(score.chart()))
        .into_iter()
        .map(|score| {
            let song = state.songs.lookup(score.chart()).map(|(_, song)| song);
            ReportRow {
                chart: score.chart(),
                title: song.map(|s| display_title(s.display_title(), score.level)),
                constant: song.map(|s| s.constant),
                score: score.score,
                great: score.great,
                good: score.good,
                bad: score.bad,
                full_combo: score.is_full_combo(),
                updated_at: score.updated_at_utc(),
            }
        })
        .collect();

    rows.sort_by(|a, b| match (a.constant, b.constant) {
        (Some(x), Some(y)) => y.total_cmp(&x).then(b.score.cmp(&a.score)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.chart.cmp(&b.chart),
    });
    rows
}

/// Stats ordered by rating, highest first.
pub fn stats_rows(stats: &[SongStats]) -> Vec<&SongStats> {
    let mut rows: Vec<&SongStats> = stats.iter().collect();
    rows.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    rows
}

pub fn render_report(
    state: &AppState,
    scores: &[UserScore],
    stats: &[SongStats],
    color: ColorMode,
) -> String {
    let i18n = &state.i18n;
    let mut output = String::new();
    let _ = writeln!(output, "{}", heading(&i18n.t("report.title"), color));

    let rows = report_rows(state, scores);
    if rows.is_empty() && stats.is_empty() {
        let _ = writeln!(output, "{}", i18n.t("report.empty"));
        return output;
    }

    if !rows.is_empty() {
        let count = rows.len().to_string();
        let _ = writeln!(output, "{}", i18n.t_with("report.count", &[("count", count.as_str())]));
        let _ = writeln!(
            output,
            "  {:>8}  {:>8}  {:>14}  {}",
            i18n.t("report.columns.constant"),
            i18n.t("report.columns.score"),
            i18n.t("report.columns.judge"),
            i18n.t("report.columns.title"),
        );
        let unknown = i18n.t("report.unknownSong");
        for row in &rows {
            let constant = row
                .constant
                .map(|c| format!("{:.1}", c))
                .unwrap_or_else(|| "-".to_string());
            let judge = format!("{}/{}/{}", row.great, row.good, row.bad);
            // Pad before painting so escape codes don't count toward the width
            let score = format!("{:>8}", row.score);
            let score = if row.full_combo {
                color.paint(&score, |t| t.yellow().to_string())
            } else {
                score
            };
            let title = match &row.title {
                Some(title) => title.clone(),
                None => color.paint(
                    &format!("{} #{}", unknown, row.chart.id),
                    |t| t.dimmed().to_string(),
                ),
            };
            let _ = writeln!(
                output,
                "  {:>8}  {}  {:>14}  {} {}",
                constant,
                score,
                judge,
                title,
                color.paint(row.chart.level.badge(), |t| t.magenta().to_string())
            );
        }
    }

    if !stats.is_empty() {
        let _ = writeln!(output);
        let _ = writeln!(output, "{}", heading(&i18n.t("report.stats"), color));
        for stat in stats_rows(stats) {
            let _ = writeln!(
                output,
                "  {:>7.2}  {}  [{:.1} {:.1} {:.1} {:.1} {:.1} {:.1}]",
                stat.rating,
                stat.title,
                stat.daigouryoku,
                stat.stamina,
                stat.speed,
                stat.accuracy_power,
                stat.rhythm,
                stat.complex
            );
        }
    }

    output
}
