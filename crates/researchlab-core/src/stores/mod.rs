//! Shared state services
//!
//! Each page receives the services it needs as `Arc<dyn ...>` handles instead
//! of reaching for globals. The traits expose exactly the read/write
//! capabilities the pages use.

mod bookmarks;
mod research;
mod theme;

pub use bookmarks::{MemoryBookmarkStore, SqliteBookmarkStore};
pub use research::ResearchState;
pub use theme::ThemeState;

use crate::error::Result;
use crate::types::Bookmark;

/// Display theme flag
pub trait ThemeStore: Send + Sync {
    fn is_dark_mode(&self) -> bool;

    /// Flip the flag and return the new value
    fn toggle_dark_mode(&self) -> bool;
}

/// Current research topic and whether a search is running
pub trait ResearchStore: Send + Sync {
    fn topic(&self) -> String;
    fn set_topic(&self, topic: String);
    fn is_loading(&self) -> bool;
    fn set_loading(&self, loading: bool);
}

/// Saved research results, keyed by topic
pub trait BookmarkStore: Send + Sync {
    /// Save a bookmark, replacing any existing one for the same topic
    fn add_bookmark(&self, bookmark: Bookmark) -> Result<()>;
    fn remove_bookmark(&self, topic: &str) -> Result<()>;
    fn is_bookmarked(&self, topic: &str) -> Result<bool>;
    /// All bookmarks, newest first
    fn list_bookmarks(&self) -> Result<Vec<Bookmark>>;
}
