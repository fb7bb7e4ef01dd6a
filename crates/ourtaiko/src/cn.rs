//! CN server song titles.
//!
//! The CN server lists the songs it carries under their localized names. The
//! merge marks every database entry with whether it exists there and which
//! title to show.

use std::collections::HashMap;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::config::CnConfig;
use crate::config::network::{CN_PAGE_SIZE, CN_REQUEST_TIMEOUT};
use crate::error::{Error, Result};
use crate::song::{ChartKey, SongsDatabase};

/// One song on the CN server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CnSong {
    pub id: u32,
    #[serde(default)]
    pub song_name: String,
}

#[derive(Deserialize)]
struct CnResponse {
    data: CnPage,
}

#[derive(Deserialize)]
struct CnPage {
    list: Vec<CnSong>,
}

/// Client for the CN song list API.
#[derive(Clone)]
pub struct CnClient {
    client: Client,
    api_url: String,
    api_token: String,
}

impl CnClient {
    pub fn new(api_url: String, api_token: String) -> Result<Self> {
        let client = Client::builder().timeout(CN_REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_url,
            api_token,
        })
    }

    /// Build from config. Both URL and token are required.
    pub fn from_config(config: &CnConfig) -> Result<Self> {
        let api_url = config
            .api_url
            .clone()
            .ok_or(Error::MissingConfig("TAIKO_API_URL"))?;
        let api_token = config
            .api_token
            .clone()
            .ok_or(Error::MissingConfig("TAIKO_API_TOKEN"))?;
        Self::new(api_url, api_token)
    }

    /// Fetch the first page of the song list.
    pub async fn fetch_songs(&self) -> Result<Vec<CnSong>> {
        debug!("Requesting CN song list from {}", self.api_url);
        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", &self.api_token)
            .json(&json!({ "page": 1, "pageSize": CN_PAGE_SIZE }))
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        parse_cn_response(&body)
    }
}

/// Parse a `{"data": {"list": [...]}}` response body.
pub fn parse_cn_response(body: &str) -> Result<Vec<CnSong>> {
    let response: CnResponse = serde_json::from_str(body)
        .map_err(|e| Error::UnexpectedResponse(format!("CN song list: {}", e)))?;
    Ok(response.data.list)
}

/// Reset every entry to its original title, then mark the songs present on
/// the CN server. Returns the number of entries marked.
pub fn apply_cn_titles(db: &mut SongsDatabase, cn_songs: &[CnSong]) -> usize {
    let names: HashMap<u32, &str> = cn_songs
        .iter()
        .filter(|song| song.id != 0)
        .map(|song| (song.id, song.song_name.as_str()))
        .collect();

    let mut updated = 0;
    for (key, song) in db.iter_mut() {
        song.title_cn = Some(song.title.clone());
        song.is_cn = false;

        let Ok(chart_key) = key.parse::<ChartKey>() else {
            continue;
        };
        if let Some(name) = names.get(&chart_key.id) {
            song.is_cn = true;
            song.title_cn = Some(name.to_string());
            updated += 1;
        }
    }

    info!("Marked {} of {} songs as available on CN", updated, db.len());
    updated
}
