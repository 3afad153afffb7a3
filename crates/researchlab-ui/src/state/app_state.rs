//! Main application state
//!
//! Owns the shared services every page is built from.

use researchlab_core::{
    AppConfig, BackendClient, BookmarkStore, IdeaGenerator, PhaseSequencer, ResearchDashboard,
    ResearchState, Result, SettingsPage, SqliteBookmarkStore, Storage, ThemeState,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Top-level pages reachable from the tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePage {
    #[default]
    InnovationLab,
    ResearchDashboard,
    Settings,
}

impl ActivePage {
    pub const ALL: [ActivePage; 3] = [
        ActivePage::InnovationLab,
        ActivePage::ResearchDashboard,
        ActivePage::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::InnovationLab => "Innovation Lab",
            Self::ResearchDashboard => "Research Dashboard",
            Self::Settings => "Settings",
        }
    }
}

/// Shared services behind the pages
pub struct AppState {
    pub config: AppConfig,
    /// Database storage
    pub storage: Arc<Storage>,
    pub theme: Arc<ThemeState>,
    pub research: Arc<ResearchState>,
    pub bookmarks: Arc<dyn BookmarkStore>,
    pub client: Arc<BackendClient>,
}

impl AppState {
    /// Open storage under the configured data directory.
    ///
    /// Falls back to an in-memory database when the directory can't be used,
    /// so the app still starts (bookmarks just won't survive a restart).
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let data_dir = config.resolved_data_dir();
        let storage = match Storage::new_with_path(&data_dir) {
            Ok(storage) => storage,
            Err(e) => {
                warn!("Failed to open storage at {:?}, using in-memory: {}", data_dir, e);
                Storage::in_memory()?
            }
        };
        Self::with_storage(config, Arc::new(storage))
    }

    pub fn with_storage(config: AppConfig, storage: Arc<Storage>) -> Result<Self> {
        let client = BackendClient::from_config(&config)?;
        info!("Backend: {}", client.base_url());

        let theme = Arc::new(ThemeState::persistent(
            Arc::clone(&storage),
            config.dark_mode,
        ));
        let bookmarks: Arc<dyn BookmarkStore> =
            Arc::new(SqliteBookmarkStore::new(Arc::clone(&storage)));

        Ok(Self {
            config,
            storage,
            theme,
            research: Arc::new(ResearchState::new()),
            bookmarks,
            client: Arc::new(client),
        })
    }

    pub fn idea_generator(&self) -> IdeaGenerator {
        IdeaGenerator::new(self.client.clone())
    }

    pub fn research_dashboard(&self) -> ResearchDashboard {
        ResearchDashboard::new(
            self.client.clone(),
            self.research.clone(),
            Arc::clone(&self.bookmarks),
            PhaseSequencer::uniform(self.config.phase_delay()),
        )
    }

    pub fn settings_page(&self) -> SettingsPage {
        SettingsPage::new(self.theme.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use researchlab_core::{Bookmark, ResearchResult, ThemeStore};

    fn test_state(storage: Arc<Storage>) -> AppState {
        AppState::with_storage(AppConfig::default(), storage).unwrap()
    }

    #[test]
    fn test_tab_titles() {
        let titles: Vec<_> = ActivePage::ALL.iter().map(|p| p.title()).collect();
        assert_eq!(
            titles,
            vec!["Innovation Lab", "Research Dashboard", "Settings"]
        );
        assert_eq!(ActivePage::default(), ActivePage::InnovationLab);
    }

    #[test]
    fn test_pages_share_services() {
        let state = test_state(Arc::new(Storage::in_memory().unwrap()));

        let first = state.research_dashboard();
        let second = state.research_dashboard();
        first.set_topic("graph neural networks");
        assert_eq!(second.topic(), "graph neural networks");

        let settings = state.settings_page();
        settings.toggle_dark_mode();
        assert!(state.theme.is_dark_mode());
    }

    #[test]
    fn test_state_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_dir: Some(dir.path().to_path_buf()),
            ..AppConfig::default()
        };

        {
            let state = AppState::from_config(config.clone()).unwrap();
            state.theme.toggle_dark_mode();
            state
                .bookmarks
                .add_bookmark(Bookmark::from_result("rust", &ResearchResult::with_score(7.0)))
                .unwrap();
        }

        let state = AppState::from_config(config).unwrap();
        assert!(state.theme.is_dark_mode());
        assert!(state.bookmarks.is_bookmarked("rust").unwrap());
    }
}
