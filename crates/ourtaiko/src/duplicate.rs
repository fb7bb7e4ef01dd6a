//! Charts that appear twice in the catalog under different ids.
//!
//! The rating database lists some songs once per release. Presentation code
//! collapses each pair so a song is listed once per level.

use std::collections::HashSet;

use serde::Serialize;

use crate::difficulty::Level;

/// A chart in the catalog: song id plus difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ChartRef {
    pub id: u32,
    pub level: Level,
}

impl ChartRef {
    pub const fn new(id: u32, level: Level) -> Self {
        Self { id, level }
    }
}

/// Two catalog entries that are the same song at a level.
pub type DuplicateSongEntry = [ChartRef; 2];

const fn pair(a: u32, b: u32, level: Level) -> DuplicateSongEntry {
    [ChartRef::new(a, level), ChartRef::new(b, level)]
}

pub static DUPLICATE_SONGS: [DuplicateSongEntry; 14] = [
    pair(399, 400, Level::Oni),  // 圣墟 / Pico Pico Ruin
    pair(399, 400, Level::Ura),  // 圣墟 / Pico Pico Ruin
    pair(450, 1257, Level::Oni), // 浓红
    pair(141, 1258, Level::Oni), // Fly away
    pair(137, 1259, Level::Oni), // ファミレスウォーズ
    pair(750, 1260, Level::Oni), // CYBERgenicALICE
    pair(527, 1261, Level::Oni), // マリオネットピュア
    pair(323, 1262, Level::Oni), // Pheonix
    pair(939, 1263, Level::Oni), // 不如就这样继续下去
    pair(1146, 1264, Level::Oni), // Hater
    pair(1146, 1264, Level::Ura), // Hater
    pair(433, 1265, Level::Ura), // 天使梦
    pair(433, 1265, Level::Oni), // 天使梦
    pair(191, 1266, Level::Oni), // 我是合成器
];

/// Lookup over a duplicate table.
#[derive(Debug, Clone, Copy)]
pub struct DuplicateTable {
    entries: &'static [DuplicateSongEntry],
}

impl Default for DuplicateTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DuplicateTable {
    pub fn builtin() -> Self {
        Self {
            entries: &DUPLICATE_SONGS,
        }
    }

    /// The first member of the pair containing `chart`, or `chart` itself.
    pub fn canonical(&self, chart: ChartRef) -> ChartRef {
        self.entries
            .iter()
            .find(|[_, second]| *second == chart)
            .map(|[first, _]| *first)
            .unwrap_or(chart)
    }

    pub fn is_duplicate(&self, a: ChartRef, b: ChartRef) -> bool {
        a != b && self.canonical(a) == self.canonical(b)
    }

    /// Keep the first item for each canonical chart, preserving order. Items
    /// without a chart are always kept.
    pub fn dedupe<T, I, F>(&self, items: I, mut chart_of: F) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> Option<ChartRef>,
    {
        let mut seen = HashSet::new();
        items
            .into_iter()
            .filter(|item| match chart_of(item) {
                Some(chart) => seen.insert(self.canonical(chart)),
                None => true,
            })
            .collect()
    }
}
