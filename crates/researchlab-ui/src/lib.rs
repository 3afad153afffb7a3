//! ResearchLab UI Library
//!
//! GPUI-based desktop UI for ResearchLab.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │ [Innovation Lab] [Research Dashboard] [Settings]            TabBar  │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │                                                                     │
//! │  Active page                                                        │
//! │                                                                     │
//! │  Innovation Lab:     [TextInput] [Generate Ideas]                   │
//! │                      Section cards                                  │
//! │                                                                     │
//! │  Research Dashboard: [TextInput] [Start Research]                   │
//! │                      ┌────────────────┐ ┌─────────────────────────┐ │
//! │                      │ Progress       │ │ Results                 │ │
//! │                      │ Agent activity │ │  Top paper, insights,   │ │
//! │                      │ Saved topics   │ │  related, feedback      │ │
//! │                      └────────────────┘ └─────────────────────────┘ │
//! │                                                                     │
//! │  Settings:           Dark mode toggle                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

pub mod backend_integration;
pub mod components;
pub mod state;
pub mod theme;

// Re-exports
pub use backend_integration::JobManager;
pub use state::{ActivePage, AppState};
pub use theme::{layout, BadgeColors, Rgba, Spacing, Theme, ThemeColors, Typography};
