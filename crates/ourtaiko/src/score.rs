//! User play records and derived per-song stats.

use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::difficulty::Level;
use crate::duplicate::ChartRef;
use crate::error::Result;

/// Play statistics for one user on one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserScore {
    pub id: u32,
    pub level: Level,
    pub score: u32,
    pub score_rank: u32,
    pub great: u32,
    pub good: u32,
    pub bad: u32,
    pub drumroll: u32,
    pub combo: u32,
    pub play_count: u32,
    pub clear_count: u32,
    pub fullcombo_count: u32,
    pub perfect_count: u32,
    pub updated_at: String,
}

impl UserScore {
    pub fn chart(&self) -> ChartRef {
        ChartRef::new(self.id, self.level)
    }

    /// Parse `updated_at`. Accepts RFC 3339 and `YYYY-MM-DD HH:MM:SS`.
    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.updated_at) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&self.updated_at, "%Y-%m-%d %H:%M:%S")
            .ok()
            .map(|dt| dt.and_utc())
    }

    pub fn is_full_combo(&self) -> bool {
        self.bad == 0
    }

    pub fn is_perfect(&self) -> bool {
        self.good == 0 && self.bad == 0
    }
}

/// Rating breakdown for one song, as computed by the rating service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongStats {
    pub title: String,
    pub rating: f64,
    pub daigouryoku: f64,
    pub stamina: f64,
    pub speed: f64,
    pub accuracy_power: f64,
    pub rhythm: f64,
    pub complex: f64,
    pub great: u32,
    pub good: u32,
    pub bad: u32,
}

/// Load a JSON array of user scores.
pub fn load_user_scores<P: AsRef<Path>>(path: P) -> Result<Vec<UserScore>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a JSON array of song stats.
pub fn load_song_stats<P: AsRef<Path>>(path: P) -> Result<Vec<SongStats>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json(updated_at: &str) -> String {
        format!(
            r#"{{"id":1146,"level":5,"score":1000000,"scoreRank":8,"great":900,"good":12,
            "bad":0,"drumroll":40,"combo":912,"playCount":20,"clearCount":18,
            "fullcomboCount":3,"perfectCount":0,"updatedAt":"{}"}}"#,
            updated_at
        )
    }

    #[test]
    fn test_user_score_shape() {
        let score: UserScore = serde_json::from_str(&sample_json("2025-12-17 20:15:00")).unwrap();
        assert_eq!(score.chart(), ChartRef::new(1146, Level::Ura));
        assert_eq!(score.fullcombo_count, 3);
        assert!(score.is_full_combo());
        assert!(!score.is_perfect());
    }

    #[test]
    fn test_updated_at_formats() {
        let score: UserScore = serde_json::from_str(&sample_json("2025-12-17 20:15:00")).unwrap();
        assert_eq!(
            score.updated_at_utc().unwrap().to_rfc3339(),
            "2025-12-17T20:15:00+00:00"
        );

        let score: UserScore =
            serde_json::from_str(&sample_json("2025-12-17T20:15:00+08:00")).unwrap();
        assert_eq!(
            score.updated_at_utc().unwrap().to_rfc3339(),
            "2025-12-17T12:15:00+00:00"
        );

        let score: UserScore = serde_json::from_str(&sample_json("yesterday")).unwrap();
        assert!(score.updated_at_utc().is_none());
    }

    #[test]
    fn test_song_stats_keeps_snake_case_field() {
        let json = r#"{"title":"A","rating":10.5,"daigouryoku":9.0,"stamina":8.0,"speed":7.0,
            "accuracy_power":6.0,"rhythm":5.0,"complex":4.0,"great":1,"good":2,"bad":3}"#;
        let stats: SongStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.accuracy_power, 6.0);
        assert_eq!(stats.bad, 3);
    }
}
