//! Application state management
//!
//! Shared services and page selection for the ResearchLab UI.

mod app_state;

pub use app_state::*;
