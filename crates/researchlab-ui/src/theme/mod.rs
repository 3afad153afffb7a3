//! Theme system for ResearchLab
//!
//! Two palettes, picked purely from the dark-mode flag.

mod colors;

pub use colors::*;

/// Theme configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub is_dark: bool,
    pub colors: ThemeColors,
    pub spacing: Spacing,
    pub typography: Typography,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            colors: ThemeColors::dark(),
            spacing: Spacing::default(),
            typography: Typography::default(),
        }
    }

    pub fn light() -> Self {
        Self {
            is_dark: false,
            colors: ThemeColors::light(),
            spacing: Spacing::default(),
            typography: Typography::default(),
        }
    }

    /// Palette for the current dark-mode flag
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Spacing constants
#[derive(Debug, Clone, PartialEq)]
pub struct Spacing {
    /// Extra small spacing (4px)
    pub xs: f32,
    /// Small spacing (8px)
    pub sm: f32,
    /// Medium spacing (12px)
    pub md: f32,
    /// Large spacing (16px)
    pub lg: f32,
    /// Extra large spacing (24px)
    pub xl: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            xs: 4.0,
            sm: 8.0,
            md: 12.0,
            lg: 16.0,
            xl: 24.0,
        }
    }
}

/// Typography settings
#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    pub small_size: f32,
    pub base_size: f32,
    pub large_size: f32,
    /// Page headings
    pub header_size: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            small_size: 12.0,
            base_size: 14.0,
            large_size: 16.0,
            header_size: 22.0,
        }
    }
}

/// Layout constants
pub mod layout {
    /// Tab bar height in pixels
    pub const TAB_BAR_HEIGHT: f32 = 44.0;
    /// Widest a page's content column grows
    pub const CONTENT_MAX_WIDTH: f32 = 960.0;
    /// Research dashboard sidebar (agents + saved list)
    pub const AGENT_PANEL_WIDTH: f32 = 280.0;
    pub const PROGRESS_BAR_HEIGHT: f32 = 8.0;
    pub const BORDER_RADIUS: f32 = 8.0;
    pub const BORDER_RADIUS_SM: f32 = 4.0;
}
