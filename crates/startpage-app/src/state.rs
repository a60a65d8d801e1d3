//! Application state: every page component plus the store behind them.

use startpage_core::background::Background;
use startpage_core::clock::WallClock;
use startpage_core::links::LinkGrid;
use startpage_core::modal::AddLinkModal;
use startpage_core::notify::Toast;
use startpage_core::search::{SearchBar, SearchEngine};
use startpage_core::store::KeyValueStore;
use startpage_core::theme::Theme;
use startpage_types::config::StartpageConfig;

/// Top-level application state. Components own their logic; this struct
/// wires them to one store and drives them from the frame loop.
pub struct App {
    pub clock: WallClock,
    pub search: SearchBar,
    pub grid: LinkGrid,
    pub modal: AddLinkModal,
    pub toast: Toast,
    pub background: Background,
    pub theme: Theme,
    pub store: Box<dyn KeyValueStore>,
    pub running: bool,
}

impl App {
    /// Build the page from config and restore persisted state.
    pub fn new(config: &StartpageConfig, store: Box<dyn KeyValueStore>) -> Self {
        let engine =
            SearchEngine::from_key(&config.default_engine).unwrap_or(SearchEngine::Google);
        let mut grid = LinkGrid::new(&config.default_links);
        grid.load_custom(store.as_ref());
        let background = Background::load(store.as_ref());
        Self {
            clock: WallClock::new(),
            search: SearchBar::new(engine),
            grid,
            modal: AddLinkModal::new(),
            toast: Toast::new(),
            background,
            theme: Theme::default(),
            store,
            running: true,
        }
    }

    /// Per-frame housekeeping.
    pub fn tick(&mut self) {
        self.toast.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use startpage_core::links::save_links;
    use startpage_core::store::MemoryStore;
    use startpage_types::error::Result;

    #[test]
    fn new_app_uses_config_defaults() {
        let config = StartpageConfig::default();
        let app = App::new(&config, Box::new(MemoryStore::new()));
        assert!(app.running);
        assert_eq!(app.grid.len(), config.default_links.len());
        assert_eq!(app.search.engine, SearchEngine::Google);
        assert!(!app.modal.is_open());
    }

    #[test]
    fn configured_engine_is_respected() {
        let config = StartpageConfig {
            default_engine: "duckduckgo".to_string(),
            ..StartpageConfig::default()
        };
        let app = App::new(&config, Box::new(MemoryStore::new()));
        assert_eq!(app.search.engine, SearchEngine::DuckDuckGo);
    }

    #[test]
    fn unknown_engine_falls_back_to_google() {
        let config = StartpageConfig {
            default_engine: "askjeeves".to_string(),
            ..StartpageConfig::default()
        };
        let app = App::new(&config, Box::new(MemoryStore::new()));
        assert_eq!(app.search.engine, SearchEngine::Google);
    }

    #[test]
    fn links_survive_a_full_session_cycle() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("store.json");
        let config = StartpageConfig::default();
        {
            let store = startpage_store::FileStore::open(&path)?;
            let mut app = App::new(&config, Box::new(store));
            app.grid
                .add_link(&mut *app.store, "Docs", "https://doc.rust-lang.org")?;
        }
        let store = startpage_store::FileStore::open(&path)?;
        let app = App::new(&config, Box::new(store));
        assert_eq!(app.grid.len(), config.default_links.len() + 1);
        Ok(())
    }

    #[test]
    fn persisted_links_are_restored() -> Result<()> {
        let mut store = MemoryStore::new();
        save_links(
            &mut store,
            &[startpage_core::links::QuickLink::new(
                "Saved",
                "https://saved.example",
            )],
        )?;
        let config = StartpageConfig::default();
        let app = App::new(&config, Box::new(store));
        assert_eq!(app.grid.len(), config.default_links.len() + 1);
        Ok(())
    }
}
