//! Color definitions for the ResearchLab theme

use researchlab_core::SourceTone;

/// RGBA color representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Create a new RGBA color from 0-255 values
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from hex value (0xRRGGBBAA)
    pub const fn from_hex(hex: u32) -> Self {
        Self::new(
            ((hex >> 24) & 0xFF) as u8,
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Create opaque color from RGB hex (0xRRGGBB)
    pub const fn rgb(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            255,
        )
    }

    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a: alpha,
        }
    }
}

/// Foreground/background pair for a small pill badge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeColors {
    pub bg: Rgba,
    pub text: Rgba,
}

/// Theme color palette
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    // === Backgrounds ===
    /// Window background behind every page
    pub app_bg: Rgba,
    /// Tab bar background
    pub tab_bar_bg: Rgba,
    /// Card background
    pub surface: Rgba,
    /// Highlighted card (top paper, active phase)
    pub surface_elevated: Rgba,
    pub input_bg: Rgba,

    // === Brand Colors ===
    pub primary: Rgba,
    pub primary_hover: Rgba,
    /// Text on top of a primary-filled button
    pub on_primary: Rgba,

    // === Text Colors ===
    pub text_primary: Rgba,
    pub text_secondary: Rgba,
    pub text_disabled: Rgba,
    pub text_link: Rgba,

    // === Status Colors ===
    pub success: Rgba,
    pub warning: Rgba,
    pub error: Rgba,

    // === UI Elements ===
    pub border: Rgba,
    pub border_subtle: Rgba,
    pub hover: Rgba,
    pub focus_ring: Rgba,
    /// Unfilled part of the progress bar
    pub progress_track: Rgba,

    // === Source badges ===
    pub badge_red: BadgeColors,
    pub badge_blue: BadgeColors,
    pub badge_green: BadgeColors,
}

impl ThemeColors {
    /// Create the dark theme color palette
    pub fn dark() -> Self {
        Self {
            app_bg: Rgba::rgb(0x111827),           // gray-900
            tab_bar_bg: Rgba::rgb(0x1f2937),       // gray-800
            surface: Rgba::rgb(0x1f2937),
            surface_elevated: Rgba::rgb(0x374151), // gray-700
            input_bg: Rgba::rgb(0x111827),

            primary: Rgba::rgb(0x3b82f6),          // blue-500
            primary_hover: Rgba::rgb(0x60a5fa),
            on_primary: Rgba::rgb(0xffffff),

            text_primary: Rgba::rgb(0xf3f4f6),
            text_secondary: Rgba::rgb(0x9ca3af),
            text_disabled: Rgba::rgb(0x6b7280),
            text_link: Rgba::rgb(0x60a5fa),

            success: Rgba::rgb(0x34d399),
            warning: Rgba::rgb(0xfbbf24),
            error: Rgba::rgb(0xf87171),

            border: Rgba::rgb(0x4b5563),
            border_subtle: Rgba::rgb(0x374151),
            hover: Rgba::from_hex(0xffffff14),
            focus_ring: Rgba::rgb(0x60a5fa),
            progress_track: Rgba::rgb(0x374151),

            badge_red: BadgeColors {
                bg: Rgba::rgb(0x7f1d1d),
                text: Rgba::rgb(0xfecaca),
            },
            badge_blue: BadgeColors {
                bg: Rgba::rgb(0x1e3a8a),
                text: Rgba::rgb(0xbfdbfe),
            },
            badge_green: BadgeColors {
                bg: Rgba::rgb(0x14532d),
                text: Rgba::rgb(0xbbf7d0),
            },
        }
    }

    /// Create the light theme color palette
    pub fn light() -> Self {
        Self {
            app_bg: Rgba::rgb(0xf9fafb),           // gray-50
            tab_bar_bg: Rgba::rgb(0xffffff),
            surface: Rgba::rgb(0xffffff),
            surface_elevated: Rgba::rgb(0xeff6ff), // blue-50
            input_bg: Rgba::rgb(0xffffff),

            primary: Rgba::rgb(0x2563eb),          // blue-600
            primary_hover: Rgba::rgb(0x1d4ed8),
            on_primary: Rgba::rgb(0xffffff),

            text_primary: Rgba::rgb(0x111827),
            text_secondary: Rgba::rgb(0x4b5563),
            text_disabled: Rgba::rgb(0x9ca3af),
            text_link: Rgba::rgb(0x2563eb),

            success: Rgba::rgb(0x059669),
            warning: Rgba::rgb(0xd97706),
            error: Rgba::rgb(0xdc2626),

            border: Rgba::rgb(0xd1d5db),
            border_subtle: Rgba::rgb(0xe5e7eb),
            hover: Rgba::from_hex(0x0000000d),
            focus_ring: Rgba::rgb(0x3b82f6),
            progress_track: Rgba::rgb(0xe5e7eb),

            badge_red: BadgeColors {
                bg: Rgba::rgb(0xfee2e2),
                text: Rgba::rgb(0x991b1b),
            },
            badge_blue: BadgeColors {
                bg: Rgba::rgb(0xdbeafe),
                text: Rgba::rgb(0x1e40af),
            },
            badge_green: BadgeColors {
                bg: Rgba::rgb(0xdcfce7),
                text: Rgba::rgb(0x166534),
            },
        }
    }

    /// Badge colors for a paper source
    pub fn badge(&self, tone: SourceTone) -> BadgeColors {
        match tone {
            SourceTone::Red => self.badge_red,
            SourceTone::Blue => self.badge_blue,
            SourceTone::Green => self.badge_green,
        }
    }
}

/// Transparent color
pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
