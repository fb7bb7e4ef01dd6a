//! Path to page table.

use serde::Serialize;
use strum::IntoStaticStr;

/// A page of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Route {
    #[strum(serialize = "home")]
    Guide,
    Report,
    Songs,
}

impl Route {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Guide => "/",
            Self::Report => "/report",
            Self::Songs => "/songs",
        }
    }

    /// Message key of the navigation label.
    pub fn nav_key(&self) -> &'static str {
        match self {
            Self::Guide => "nav.guide",
            Self::Report => "nav.report",
            Self::Songs => "nav.songs",
        }
    }
}

pub static ROUTES: [Route; 3] = [Route::Guide, Route::Report, Route::Songs];

#[derive(Debug, Clone, Copy)]
pub struct Router {
    routes: &'static [Route],
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self { routes: &ROUTES }
    }

    pub fn routes(&self) -> &'static [Route] {
        self.routes
    }

    /// Match a path. Query string, fragment and a trailing slash are ignored.
    pub fn resolve(&self, path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        self.routes.iter().copied().find(|route| route.path() == path)
    }

    pub fn by_name(&self, name: &str) -> Option<Route> {
        self.routes.iter().copied().find(|route| route.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_static_paths() {
        let router = Router::new();
        assert_eq!(router.resolve("/"), Some(Route::Guide));
        assert_eq!(router.resolve("/report"), Some(Route::Report));
        assert_eq!(router.resolve("/songs"), Some(Route::Songs));
        assert_eq!(router.resolve("/songs/1"), None);
        assert_eq!(router.resolve("/missing"), None);
    }

    #[test]
    fn test_resolve_normalises() {
        let router = Router::new();
        assert_eq!(router.resolve(""), Some(Route::Guide));
        assert_eq!(router.resolve("/songs/"), Some(Route::Songs));
        assert_eq!(router.resolve("/report?user=1#top"), Some(Route::Report));
        assert_eq!(router.resolve("/?lang=en"), Some(Route::Guide));
    }

    #[test]
    fn test_names() {
        let router = Router::new();
        assert_eq!(router.by_name("home"), Some(Route::Guide));
        assert_eq!(Route::Songs.name(), "songs");
        assert_eq!(Route::Report.name(), "report");
        assert_eq!(router.by_name("guide"), None);
    }
}
