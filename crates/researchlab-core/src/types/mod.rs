//! Core type definitions for ResearchLab
//!
//! Wire types shared with the research backend plus the records the
//! client keeps locally (bookmarks).

mod bookmark_types;
mod idea_types;
mod research_types;

pub use bookmark_types::*;
pub use idea_types::*;
pub use research_types::*;
