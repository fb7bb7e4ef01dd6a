//! Configuration and fixed settings.
//!
//! - `ViewerConfig` - the TOML configuration file
//! - Preference keys, locale defaults and network endpoints

mod viewer;

pub use viewer::*;

/// Persisted preference keys.
pub mod prefs {
    /// Preference file name inside the config directory.
    pub const FILE_NAME: &str = "preferences.json";

    /// Active locale.
    pub const LANG_KEY: &str = "lang";

    /// Announcement version the user dismissed.
    pub const ANNOUNCEMENT_KEY: &str = "announcement";
}

/// Locale selection.
pub mod locale {
    /// Locale used when no preference is stored.
    pub const DEFAULT_LOCALE: &str = "zh";

    /// Locale consulted for keys missing from the active bundle.
    pub const FALLBACK_LOCALE: &str = "en";
}

/// Network endpoints and limits.
pub mod network {
    use std::time::Duration;

    /// Songs database served by the rating site.
    pub const DEFAULT_SONGS_URL: &str = "https://rating.ourtaiko.org/songs.json";

    /// Page request sent to the CN song list API.
    pub const CN_PAGE_SIZE: u32 = 2000;

    /// Timeout for the CN song list request.
    pub const CN_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_defaults() {
        assert_eq!(locale::DEFAULT_LOCALE, "zh");
        assert_eq!(locale::FALLBACK_LOCALE, "en");
    }

    #[test]
    fn test_network_constants() {
        assert!(network::DEFAULT_SONGS_URL.ends_with("/songs.json"));
        assert_eq!(network::CN_PAGE_SIZE, 2000);
        assert_eq!(network::CN_REQUEST_TIMEOUT.as_secs(), 30);
    }
}
