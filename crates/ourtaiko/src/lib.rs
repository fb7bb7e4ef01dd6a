//! # ourtaiko
//!
//! Core library for the ourtaiko rating viewer.
//!
//! This crate provides:
//! - Song rating database types and the best-effort loader
//! - User score and song stats shapes
//! - Announcements, the duplicate-song table and difficulty labels
//! - Message bundles with persisted locale preference
//! - The route table, page views and a named-event bus
//! - CN server title merge for the songs database

pub mod announcement;
pub mod app;
pub mod cn;
pub mod config;
pub mod difficulty;
pub mod duplicate;
pub mod error;
pub mod event;
pub mod i18n;
pub mod prefs;
pub mod router;
pub mod score;
pub mod song;
pub mod view;

pub use announcement::{ANNOUNCEMENT_VERSION, Announcement, AnnouncementKind, AnnouncementStore};
pub use app::AppState;
pub use cn::{CnClient, CnSong, apply_cn_titles};
pub use config::{CnConfig, ViewerConfig};
pub use difficulty::Level;
pub use duplicate::{ChartRef, DUPLICATE_SONGS, DuplicateSongEntry, DuplicateTable};
pub use error::{Error, Result};
pub use event::{EventBus, ListenerId};
pub use i18n::I18n;
pub use prefs::Preferences;
pub use router::{Route, Router};
pub use score::{SongStats, UserScore, load_song_stats, load_user_scores};
pub use song::{
    ChartKey, FileSource, HttpSource, SongData, SongSource, SongsDatabase, load_songs_data,
    parse_songs_data, save_songs_data, try_load_songs_data,
};
pub use view::{ColorMode, PageContext, render_route};
