//! Settings page: a single dark-mode toggle over the shared theme store

use crate::stores::ThemeStore;
use std::sync::Arc;

pub struct SettingsPage {
    theme: Arc<dyn ThemeStore>,
}

impl SettingsPage {
    pub fn new(theme: Arc<dyn ThemeStore>) -> Self {
        Self { theme }
    }

    pub fn is_dark_mode(&self) -> bool {
        self.theme.is_dark_mode()
    }

    pub fn toggle_dark_mode(&self) -> bool {
        self.theme.toggle_dark_mode()
    }

    /// Icon on the toggle button: the sun switches to light, the moon to dark
    pub fn toggle_icon(&self) -> &'static str {
        if self.is_dark_mode() {
            "☀"
        } else {
            "☾"
        }
    }
}
