use std::fmt::Write as _;

use owo_colors::OwoColorize;

use super::{ColorMode, heading};
use crate::announcement::{Announcement, AnnouncementKind};
use crate::app::AppState;

/// Guide page: visible announcements followed by the introduction.
pub fn render_guide(state: &AppState, color: ColorMode) -> String {
    let i18n = &state.i18n;
    let mut output = String::new();

    let _ = writeln!(output, "{}", heading(&i18n.t("guide.title"), color));
    let _ = writeln!(output);

    if state.announcements_visible() {
        let _ = writeln!(output, "{}", heading(&i18n.t("guide.announcements"), color));
        for announcement in state.announcements.iter() {
            let _ = writeln!(output, "{}", format_announcement(announcement, color));
        }
        let _ = writeln!(output);
    }

    let _ = writeln!(output, "{}", i18n.t("guide.intro"));
    let _ = writeln!(output, "{}", i18n.t("guide.howto"));
    output
}

/// One announcement line: `[info] 2025-12-16  text`.
pub fn format_announcement(announcement: &Announcement, color: ColorMode) -> String {
    let tag = format!("[{}]", announcement.kind.as_str());
    let tag = match announcement.kind {
        AnnouncementKind::Info => color.paint(&tag, |t| t.cyan().to_string()),
        AnnouncementKind::Success => color.paint(&tag, |t| t.green().to_string()),
        AnnouncementKind::Warning => color.paint(&tag, |t| t.yellow().to_string()),
        AnnouncementKind::Error => color.paint(&tag, |t| t.red().to_string()),
    };
    format!(
        "  {} {}  {}",
        tag,
        announcement.date.format("%Y-%m-%d"),
        announcement.plain_text()
    )
}
