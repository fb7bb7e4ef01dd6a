use serde::{Deserialize, Serialize};
use strum::{EnumString, FromRepr, IntoStaticStr};

/// Chart difficulty tier. `Ura` is the hidden fifth chart.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    EnumString,
    IntoStaticStr,
)]
#[repr(u8)]
#[serde(try_from = "u8", into = "u8")]
#[strum(ascii_case_insensitive)]
pub enum Level {
    #[strum(serialize = "easy")]
    Easy = 1,
    #[strum(serialize = "normal")]
    Normal = 2,
    #[strum(serialize = "hard")]
    Hard = 3,
    #[strum(serialize = "oni")]
    Oni = 4,
    #[strum(serialize = "ura")]
    Ura = 5,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Easy,
        Level::Normal,
        Level::Hard,
        Level::Oni,
        Level::Ura,
    ];

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Badge text shown next to a chart.
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Easy => "简单",
            Self::Normal => "普通",
            Self::Hard => "困难",
            Self::Oni => "鬼",
            Self::Ura => "裏",
        }
    }

    /// Suffix appended to a song title. Only ura charts are marked.
    pub fn title_suffix(&self) -> Option<&'static str> {
        match self {
            Self::Ura => Some("(裏)"),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or_else(|| format!("difficulty level out of range: {}", value))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level as u8
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Song title with the difficulty suffix applied, e.g. "Hater(裏)".
pub fn display_title(title: &str, level: Level) -> String {
    match level.title_suffix() {
        Some(suffix) => format!("{}{}", title, suffix),
        None => title.to_string(),
    }
}
