use tracing::info;

use crate::announcement::AnnouncementStore;
use crate::config::prefs::{ANNOUNCEMENT_KEY, LANG_KEY};
use crate::duplicate::DuplicateTable;
use crate::error::Result;
use crate::event::{self, EventBus};
use crate::i18n::I18n;
use crate::prefs::Preferences;
use crate::router::Router;
use crate::song::{SongSource, SongsDatabase, load_songs_data};

/// Everything the views read, owned in one place.
#[derive(Debug)]
pub struct AppState {
    pub announcements: AnnouncementStore,
    pub songs: SongsDatabase,
    pub duplicates: DuplicateTable,
    pub i18n: I18n,
    pub router: Router,
    pub events: EventBus,
    prefs: Preferences,
}

impl AppState {
    /// Build state from persisted preferences. The songs database starts empty.
    pub fn new(prefs: Preferences) -> Result<Self> {
        let i18n = I18n::builtin(prefs.lang())?;
        Ok(Self {
            announcements: AnnouncementStore::builtin(),
            songs: SongsDatabase::new(),
            duplicates: DuplicateTable::builtin(),
            i18n,
            router: Router::new(),
            events: EventBus::new(),
            prefs,
        })
    }

    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    /// Load the songs database from `source` and notify listeners.
    pub async fn load_songs<S: SongSource>(&mut self, source: &S) -> &SongsDatabase {
        self.songs = load_songs_data(source).await;
        self.events.emit(event::SONGS_LOADED);
        &self.songs
    }

    /// Switch and persist the active locale.
    pub fn set_locale(&mut self, locale: &str) -> Result<()> {
        self.i18n.set_locale(locale)?;
        self.prefs.set(LANG_KEY, locale)?;
        info!("Locale set to {}", locale);
        self.events.emit(event::LOCALE_CHANGED);
        Ok(())
    }

    pub fn announcements_visible(&self) -> bool {
        self.announcements
            .should_show(self.prefs.dismissed_announcement())
    }

    /// Hide the current announcements until the version changes.
    pub fn dismiss_announcements(&mut self) -> Result<()> {
        let version = self.announcements.version().to_string();
        self.prefs.set(ANNOUNCEMENT_KEY, version)?;
        self.events.emit(event::ANNOUNCEMENTS_DISMISSED);
        Ok(())
    }
}
