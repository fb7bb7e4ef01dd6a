//! Song rating database.
//!
//! The database is a JSON object mapping a song key to its rating data. It is
//! loaded once, best-effort: a failed load yields an empty database.

use std::collections::BTreeMap;
use std::fs;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::difficulty::Level;
use crate::duplicate::ChartRef;
use crate::error::{Error, Result};

/// Rating data for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongData {
    pub title: String,
    pub constant: f64,
    pub total_notes: u32,
    pub composite: f64,
    pub avg_density: f64,
    pub inst_density: f64,
    pub separation: f64,
    pub bpm_change: f64,
    pub hs_change: f64,
    /// Title on the CN server, filled in by [`crate::cn::apply_cn_titles`].
    #[serde(rename = "title_cn", default, skip_serializing_if = "Option::is_none")]
    pub title_cn: Option<String>,
    #[serde(rename = "is_cn", default)]
    pub is_cn: bool,
}

impl SongData {
    /// Title to display: the CN title when the song exists on the CN server.
    pub fn display_title(&self) -> &str {
        match &self.title_cn {
            Some(title) if self.is_cn && !title.is_empty() => title,
            _ => &self.title,
        }
    }
}

/// Key of a database entry: `"<id>"` or `"<id>-<level>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartKey {
    pub id: u32,
    pub level: Option<Level>,
}

impl ChartKey {
    pub fn chart(&self) -> Option<ChartRef> {
        self.level.map(|level| ChartRef::new(self.id, level))
    }
}

impl FromStr for ChartKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidChartKey(s.to_string());
        let (id, level) = match s.split_once('-') {
            Some((id, level)) => {
                let level = level.trim().parse::<u8>().map_err(|_| invalid())?;
                (id, Some(Level::from_u8(level).ok_or_else(invalid)?))
            }
            None => (s, None),
        };
        let id = id.trim().parse::<u32>().map_err(|_| invalid())?;
        Ok(Self { id, level })
    }
}

impl std::fmt::Display for ChartKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.level {
            Some(level) => write!(f, "{}-{}", self.id, level.as_u8()),
            None => write!(f, "{}", self.id),
        }
    }
}

/// Song key to rating data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongsDatabase {
    songs: BTreeMap<String, SongData>,
}

impl SongsDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&SongData> {
        self.songs.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, song: SongData) -> Option<SongData> {
        self.songs.insert(key.into(), song)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SongData)> {
        self.songs.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut SongData)> {
        self.songs.iter_mut()
    }

    /// Find the entry for a chart, preferring a level-specific key.
    pub fn lookup(&self, chart: ChartRef) -> Option<(&str, &SongData)> {
        let specific = format!("{}-{}", chart.id, chart.level.as_u8());
        self.songs
            .get_key_value(&specific)
            .or_else(|| self.songs.get_key_value(&chart.id.to_string()))
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Entries ordered by rating constant, highest first.
    pub fn sorted_by_constant(&self) -> Vec<(&str, &SongData)> {
        let mut entries: Vec<(&str, &SongData)> =
            self.songs.iter().map(|(k, v)| (k.as_str(), v)).collect();
        entries.sort_by(|a, b| b.1.constant.total_cmp(&a.1.constant).then(a.0.cmp(b.0)));
        entries
    }

    /// Fuzzy title search over both the original and CN title, best match first.
    pub fn search(&self, query: &str) -> Vec<(&str, &SongData)> {
        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, &str, &SongData)> = self
            .songs
            .iter()
            .filter_map(|(key, song)| {
                let score = matcher.fuzzy_match(&song.title, query).unwrap_or(0);
                let score_cn = song
                    .title_cn
                    .as_deref()
                    .and_then(|t| matcher.fuzzy_match(t, query))
                    .unwrap_or(0);
                let best = score.max(score_cn);
                (best > 0).then_some((best, key.as_str(), song))
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(b.1)));
        scored.into_iter().map(|(_, k, s)| (k, s)).collect()
    }
}

impl FromIterator<(String, SongData)> for SongsDatabase {
    fn from_iter<T: IntoIterator<Item = (String, SongData)>>(iter: T) -> Self {
        Self {
            songs: iter.into_iter().collect(),
        }
    }
}

/// Where the song database JSON comes from.
pub trait SongSource {
    /// Human-readable origin for logs.
    fn describe(&self) -> String;

    /// Fetch the raw JSON document.
    fn fetch(&self) -> impl Future<Output = Result<String>> + Send;
}

/// Songs database served over HTTP.
#[derive(Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl SongSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}

/// Songs database read from a local file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SongSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }
}

/// Parse a songs database document.
pub fn parse_songs_data(content: &str) -> Result<SongsDatabase> {
    Ok(serde_json::from_str(content)?)
}

/// Load the songs database, propagating failures.
pub async fn try_load_songs_data<S: SongSource>(source: &S) -> Result<SongsDatabase> {
    debug!("Fetching songs database from {}", source.describe());
    let content = source.fetch().await?;
    parse_songs_data(&content)
}

/// Load the songs database. Any failure is logged and yields an empty database.
pub async fn load_songs_data<S: SongSource>(source: &S) -> SongsDatabase {
    match try_load_songs_data(source).await {
        Ok(db) => {
            info!("Loaded {} songs from {}", db.len(), source.describe());
            db
        }
        Err(e) => {
            error!("Failed to load songs database from {}: {}", source.describe(), e);
            SongsDatabase::new()
        }
    }
}

/// Write the database as pretty-printed JSON.
pub fn save_songs_data<P: AsRef<Path>>(path: P, db: &SongsDatabase) -> Result<()> {
    let content = serde_json::to_string_pretty(db)?;
    fs::write(path, content)?;
    Ok(())
}
