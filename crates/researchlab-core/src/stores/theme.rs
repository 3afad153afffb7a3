//! Dark-mode flag, optionally persisted in the settings table

use super::ThemeStore;
use crate::storage::{get_setting, set_setting, Storage};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, warn};

const DARK_MODE_KEY: &str = "dark_mode";

pub struct ThemeState {
    dark_mode: RwLock<bool>,
    storage: Option<Arc<Storage>>,
}

impl ThemeState {
    /// In-memory theme flag
    pub fn new(dark_mode: bool) -> Self {
        Self {
            dark_mode: RwLock::new(dark_mode),
            storage: None,
        }
    }

    /// Theme flag backed by storage; `default` applies when nothing was saved yet
    pub fn persistent(storage: Arc<Storage>, default: bool) -> Self {
        let saved = storage
            .connection()
            .and_then(|conn| get_setting(&conn, DARK_MODE_KEY))
            .unwrap_or_else(|e| {
                warn!("Failed to read theme setting: {}", e);
                None
            });

        let dark_mode = match saved.as_deref() {
            Some("true") => true,
            Some("false") => false,
            _ => default,
        };

        Self {
            dark_mode: RwLock::new(dark_mode),
            storage: Some(storage),
        }
    }

    fn persist(&self, value: bool) {
        let Some(storage) = &self.storage else {
            return;
        };

        let value = if value { "true" } else { "false" };
        if let Err(e) = storage
            .connection()
            .and_then(|conn| set_setting(&conn, DARK_MODE_KEY, value))
        {
            warn!("Failed to save theme setting: {}", e);
        }
    }
}

impl ThemeStore for ThemeState {
    fn is_dark_mode(&self) -> bool {
        *self.dark_mode.read()
    }

    fn toggle_dark_mode(&self) -> bool {
        let value = {
            let mut dark_mode = self.dark_mode.write();
            *dark_mode = !*dark_mode;
            *dark_mode
        };
        info!("Dark mode {}", if value { "enabled" } else { "disabled" });
        self.persist(value);
        value
    }
}
