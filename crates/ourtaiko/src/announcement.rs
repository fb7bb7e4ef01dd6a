//! Site announcements.
//!
//! The list is fixed at build time and tagged with a version string. Callers
//! persist the version a user dismissed and show the list again once the
//! version changes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

pub const ANNOUNCEMENT_VERSION: &str = "announcement-v1-2025-12-17";

/// Severity tag of an announcement.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AnnouncementKind {
    Info,
    Success,
    Warning,
    Error,
}

impl AnnouncementKind {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: u32,
    /// Localized text, may contain inline HTML.
    pub text: String,
    #[serde(rename = "type")]
    pub kind: AnnouncementKind,
    pub date: NaiveDate,
}

impl Announcement {
    pub fn new(id: u32, text: impl Into<String>, kind: AnnouncementKind, date: NaiveDate) -> Self {
        Self {
            id,
            text: text.into(),
            kind,
            date,
        }
    }

    /// Text with HTML tags removed.
    pub fn plain_text(&self) -> String {
        strip_tags(&self.text)
    }
}

fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Owned, versioned announcement list.
#[derive(Debug, Clone)]
pub struct AnnouncementStore {
    version: String,
    announcements: Vec<Announcement>,
}

impl AnnouncementStore {
    pub fn new(version: impl Into<String>, announcements: Vec<Announcement>) -> Self {
        Self {
            version: version.into(),
            announcements,
        }
    }

    /// The announcements shipped with this build.
    pub fn builtin() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
        Self::new(
            ANNOUNCEMENT_VERSION,
            vec![
                Announcement::new(
                    1,
                    "建议使用新网址: <a href=\"https://rating.ourtaiko.org/\" target=\"_blank\">rating.ourtaiko.org</a>",
                    AnnouncementKind::Info,
                    date(2025, 12, 16),
                ),
                Announcement::new(
                    2,
                    "有网页功能上的建议或问题可以通过群聊<b>@</b>我反馈，或者在GitHub开issue免得我忘记",
                    AnnouncementKind::Info,
                    date(2025, 12, 17),
                ),
                Announcement::new(
                    299,
                    "域名 ourtaiko.org 免费提供, 有需要可以通过 GitHub 或者群聊联系我",
                    AnnouncementKind::Success,
                    date(2025, 12, 16),
                ),
                Announcement::new(300, "广告位招租", AnnouncementKind::Warning, date(2354, 1, 1)),
            ],
        )
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    pub fn iter(&self) -> impl Iterator<Item = &Announcement> {
        self.announcements.iter()
    }

    pub fn len(&self) -> usize {
        self.announcements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.announcements.is_empty()
    }

    /// Whether the list should be shown to a user who dismissed `dismissed_version`.
    pub fn should_show(&self, dismissed_version: Option<&str>) -> bool {
        !self.is_empty() && dismissed_version != Some(self.version.as_str())
    }
}
