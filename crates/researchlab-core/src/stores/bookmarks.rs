//! Bookmark store implementations

use super::BookmarkStore;
use crate::error::Result;
use crate::storage::{self, Storage};
use crate::types::Bookmark;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// Bookmarks persisted in SQLite
pub struct SqliteBookmarkStore {
    storage: Arc<Storage>,
}

impl SqliteBookmarkStore {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

impl BookmarkStore for SqliteBookmarkStore {
    fn add_bookmark(&self, bookmark: Bookmark) -> Result<()> {
        let mut conn = self.storage.connection()?;
        let tx = conn.transaction()?;
        storage::delete_bookmark_by_topic(&tx, &bookmark.topic)?;
        storage::insert_bookmark(&tx, &bookmark)?;
        tx.commit()?;
        debug!("Bookmarked topic: {}", bookmark.topic);
        Ok(())
    }

    fn remove_bookmark(&self, topic: &str) -> Result<()> {
        let conn = self.storage.connection()?;
        if storage::delete_bookmark_by_topic(&conn, topic)? {
            debug!("Removed bookmark: {}", topic);
        }
        Ok(())
    }

    fn is_bookmarked(&self, topic: &str) -> Result<bool> {
        let conn = self.storage.connection()?;
        storage::bookmark_exists(&conn, topic)
    }

    fn list_bookmarks(&self) -> Result<Vec<Bookmark>> {
        let conn = self.storage.connection()?;
        storage::list_bookmarks(&conn)
    }
}

/// Bookmarks held in memory for the lifetime of the process
#[derive(Default)]
pub struct MemoryBookmarkStore {
    bookmarks: RwLock<Vec<Bookmark>>,
}

impl MemoryBookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookmarkStore for MemoryBookmarkStore {
    fn add_bookmark(&self, bookmark: Bookmark) -> Result<()> {
        let mut bookmarks = self.bookmarks.write();
        bookmarks.retain(|b| b.topic != bookmark.topic);
        bookmarks.push(bookmark);
        Ok(())
    }

    fn remove_bookmark(&self, topic: &str) -> Result<()> {
        self.bookmarks.write().retain(|b| b.topic != topic);
        Ok(())
    }

    fn is_bookmarked(&self, topic: &str) -> Result<bool> {
        Ok(self.bookmarks.read().iter().any(|b| b.topic == topic))
    }

    fn list_bookmarks(&self) -> Result<Vec<Bookmark>> {
        let mut bookmarks = self.bookmarks.read().clone();
        bookmarks.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(bookmarks)
    }
}
