//! Page view-models
//!
//! GUI-free state for the three pages. The desktop UI renders these and
//! forwards input to them; tests drive them directly.

mod idea_generator;
mod paper_card;
mod research_dashboard;
mod settings;

pub use idea_generator::*;
pub use paper_card::*;
pub use research_dashboard::*;
pub use settings::*;
