//! Integration tests for the application state and page rendering.

use std::cell::Cell;
use std::rc::Rc;

use ourtaiko::event::{ANNOUNCEMENTS_DISMISSED, LOCALE_CHANGED, SONGS_LOADED};
use ourtaiko::view::{render_nav, render_report, report_rows, song_rows};
use ourtaiko::{
    ANNOUNCEMENT_VERSION, AppState, ChartRef, ColorMode, Error, Level, PageContext, Preferences,
    Result, Route, SongSource, SongStats, UserScore, render_route,
};
use tempfile::tempdir;

const SONGS_JSON: &str = r#"{
    "141-4": {"title":"Fly away","constant":8.5,"totalNotes":700,"composite":0,"avgDensity":6.1,
              "instDensity":0,"separation":0,"bpmChange":0,"hsChange":0},
    "1258-4": {"title":"Fly away","constant":8.5,"totalNotes":700,"composite":0,"avgDensity":6.1,
               "instDensity":0,"separation":0,"bpmChange":0,"hsChange":0},
    "1146-5": {"title":"Hater","constant":10.9,"totalNotes":1024,"composite":0,"avgDensity":8.0,
               "instDensity":0,"separation":0,"bpmChange":0,"hsChange":0},
    "7": {"title":"Plain key","constant":3.0,"totalNotes":200,"composite":0,"avgDensity":2.0,
          "instDensity":0,"separation":0,"bpmChange":0,"hsChange":0}
}"#;

struct StaticSource(&'static str);

impl SongSource for StaticSource {
    fn describe(&self) -> String {
        "static".to_string()
    }

    async fn fetch(&self) -> Result<String> {
        Ok(self.0.to_string())
    }
}

fn counter(state: &mut AppState, event: &str) -> Rc<Cell<u32>> {
    let calls = Rc::new(Cell::new(0));
    let c = Rc::clone(&calls);
    state.events.on(event, move || c.set(c.get() + 1));
    calls
}

fn score(id: u32, level: Level, points: u32) -> UserScore {
    UserScore {
        id,
        level,
        score: points,
        score_rank: 0,
        great: 600,
        good: 10,
        bad: 1,
        drumroll: 0,
        combo: 300,
        play_count: 1,
        clear_count: 1,
        fullcombo_count: 0,
        perfect_count: 0,
        updated_at: "2025-12-17 10:00:00".to_string(),
    }
}

async fn loaded_state() -> AppState {
    let mut state = AppState::new(Preferences::in_memory()).unwrap();
    state.load_songs(&StaticSource(SONGS_JSON)).await;
    state
}

mod state {
    use super::*;

    #[tokio::test]
    async fn test_load_songs_emits_event() {
        let mut state = AppState::new(Preferences::in_memory()).unwrap();
        let calls = counter(&mut state, SONGS_LOADED);

        let db = state.load_songs(&StaticSource(SONGS_JSON)).await;
        assert_eq!(db.len(), 4);
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_failed_load_still_emits_with_empty_db() {
        let mut state = AppState::new(Preferences::in_memory()).unwrap();
        let calls = counter(&mut state, SONGS_LOADED);

        state.load_songs(&StaticSource("not json")).await;
        assert!(state.songs.is_empty());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_locale_preference_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut state = AppState::new(Preferences::load(&path).unwrap()).unwrap();
        assert_eq!(state.i18n.locale(), "zh");
        let calls = counter(&mut state, LOCALE_CHANGED);
        state.set_locale("en").unwrap();
        assert_eq!(calls.get(), 1);

        let state = AppState::new(Preferences::load(&path).unwrap()).unwrap();
        assert_eq!(state.i18n.locale(), "en");
        assert_eq!(state.i18n.t("nav.songs"), "Songs");
    }

    #[test]
    fn test_unknown_locale_is_rejected_and_not_persisted() {
        let mut state = AppState::new(Preferences::in_memory()).unwrap();
        let calls = counter(&mut state, LOCALE_CHANGED);
        assert!(matches!(state.set_locale("fr"), Err(Error::UnknownLocale(_))));
        assert!(state.prefs().lang().is_none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_dismiss_announcements() {
        let mut state = AppState::new(Preferences::in_memory()).unwrap();
        let calls = counter(&mut state, ANNOUNCEMENTS_DISMISSED);
        assert!(state.announcements_visible());

        state.dismiss_announcements().unwrap();
        assert!(!state.announcements_visible());
        assert_eq!(state.prefs().dismissed_announcement(), Some(ANNOUNCEMENT_VERSION));
        assert_eq!(calls.get(), 1);
    }
}

mod pages {
    use super::*;

    #[tokio::test]
    async fn test_song_rows_collapse_duplicates() {
        let state = loaded_state().await;
        let rows = song_rows(&state, None);
        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        // 141-4 and 1258-4 are the same chart; equal constants sort by key
        assert_eq!(keys, ["1146-5", "1258-4", "7"]);
        assert_eq!(rows[0].title, "Hater(裏)");
        assert_eq!(rows[2].level, None);
    }

    #[tokio::test]
    async fn test_song_rows_query() {
        let state = loaded_state().await;
        let rows = song_rows(&state, Some("hater"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].key, "1146-5");
    }

    #[tokio::test]
    async fn test_report_rows_keep_best_duplicate() {
        let state = loaded_state().await;
        let scores = vec![
            score(141, Level::Oni, 900_000),
            score(1258, Level::Oni, 950_000),
            score(1146, Level::Ura, 800_000),
            score(555, Level::Hard, 700_000),
        ];

        let rows = report_rows(&state, &scores);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].chart, ChartRef::new(1146, Level::Ura));
        assert_eq!(rows[0].title.as_deref(), Some("Hater(裏)"));
        assert_eq!(rows[1].chart, ChartRef::new(1258, Level::Oni));
        assert_eq!(rows[1].score, 950_000);
        assert_eq!(rows[1].constant, Some(8.5));
        assert!(rows[2].title.is_none());
        assert!(rows[2].updated_at.is_some());
    }

    #[tokio::test]
    async fn test_render_songs_page_plain() {
        let state = loaded_state().await;
        let page = render_route(
            Route::Songs,
            &state,
            &PageContext {
                color: ColorMode::Plain,
                ..Default::default()
            },
        );
        assert!(page.contains("[曲目列表 /songs]"));
        assert!(page.contains("共 3 首"));
        assert!(page.contains("Hater(裏) 裏"));
    }

    #[test]
    fn test_render_songs_page_when_load_failed() {
        let state = AppState::new(Preferences::in_memory()).unwrap();
        let page = render_route(Route::Songs, &state, &PageContext {
            color: ColorMode::Plain,
            ..Default::default()
        });
        assert!(page.contains("曲目数据加载失败或暂无数据"));
    }

    #[test]
    fn test_render_guide_hides_dismissed_announcements() {
        let mut state = AppState::new(Preferences::in_memory()).unwrap();
        let ctx = PageContext {
            color: ColorMode::Plain,
            ..Default::default()
        };
        assert!(render_route(Route::Guide, &state, &ctx).contains("广告位招租"));

        state.dismiss_announcements().unwrap();
        let page = render_route(Route::Guide, &state, &ctx);
        assert!(!page.contains("广告位招租"));
        assert!(page.contains("太鼓达人 定数表"));
    }

    fn strip_ansi(text: &str) -> String {
        let mut out = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[tokio::test]
    async fn test_colored_report_keeps_column_alignment() {
        let state = loaded_state().await;
        let mut full_combo = score(1146, Level::Ura, 800_000);
        full_combo.bad = 0;
        let scores = vec![full_combo, score(141, Level::Oni, 900_000)];

        let colored = render_report(&state, &scores, &[], ColorMode::Colored);
        let plain = render_report(&state, &scores, &[], ColorMode::Plain);
        assert!(colored.contains('\u{1b}'));
        assert_eq!(strip_ansi(&colored), plain);
        assert!(plain.contains("    10.9    800000"));
    }

    #[tokio::test]
    async fn test_render_report_with_stats() {
        let mut state = loaded_state().await;
        state.set_locale("en").unwrap();
        let stats = vec![SongStats {
            title: "Hater".to_string(),
            rating: 12.34,
            daigouryoku: 1.0,
            stamina: 2.0,
            speed: 3.0,
            accuracy_power: 4.0,
            rhythm: 5.0,
            complex: 6.0,
            great: 1,
            good: 0,
            bad: 0,
        }];
        let ctx = PageContext {
            color: ColorMode::Plain,
            scores: vec![score(1146, Level::Ura, 800_000)],
            stats,
            ..Default::default()
        };

        let page = render_route(Route::Report, &state, &ctx);
        assert!(page.contains("1 scores"));
        assert!(page.contains("Skill breakdown"));
        assert!(page.contains("12.34  Hater  [1.0 2.0 3.0 4.0 5.0 6.0]"));
    }

    #[test]
    fn test_nav_marks_active_route() {
        let state = AppState::new(Preferences::in_memory()).unwrap();
        let nav = render_nav(Route::Report, &state, ColorMode::Plain);
        assert!(nav.starts_with("指南 /  [成绩报告 /report]  曲目列表 /songs"));
    }
}
