//! Database query implementations

use crate::error::Result;
use crate::types::*;
use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

// ===== Bookmark Queries =====

/// Insert a bookmark; fails with `DuplicateKey` if the topic is already saved
pub fn insert_bookmark(conn: &Connection, bookmark: &Bookmark) -> Result<()> {
    let top_paper = bookmark
        .top_paper
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;

    conn.execute(
        r#"
        INSERT INTO bookmarks (id, topic, date, score, top_paper)
        VALUES (?, ?, ?, ?, ?)
        "#,
        params![
            bookmark.id,
            bookmark.topic,
            bookmark.date.to_rfc3339(),
            bookmark.score,
            top_paper,
        ],
    )?;

    Ok(())
}

/// Delete the bookmark saved for `topic`; returns whether a row was removed
pub fn delete_bookmark_by_topic(conn: &Connection, topic: &str) -> Result<bool> {
    let removed = conn.execute("DELETE FROM bookmarks WHERE topic = ?", params![topic])?;
    Ok(removed > 0)
}

/// Check whether `topic` has been bookmarked
pub fn bookmark_exists(conn: &Connection, topic: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM bookmarks WHERE topic = ?",
        params![topic],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Get the bookmark saved for `topic`
pub fn get_bookmark_by_topic(conn: &Connection, topic: &str) -> Result<Option<Bookmark>> {
    let result = conn
        .query_row(
            "SELECT id, topic, date, score, top_paper FROM bookmarks WHERE topic = ?",
            params![topic],
            bookmark_from_row,
        )
        .optional()?;

    Ok(result)
}

/// List all bookmarks, newest first
pub fn list_bookmarks(conn: &Connection) -> Result<Vec<Bookmark>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id, topic, date, score, top_paper
        FROM bookmarks
        ORDER BY date DESC
        "#,
    )?;

    let bookmarks = stmt
        .query_map([], bookmark_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(bookmarks)
}

// ===== Settings Queries =====

/// Get a setting value
pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let result = conn
        .query_row(
            "SELECT value FROM settings WHERE key = ?",
            params![key],
            |row| row.get(0),
        )
        .optional()?;

    Ok(result)
}

/// Set a setting value
pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO settings (key, value, updated_at)
        VALUES (?, ?, CURRENT_TIMESTAMP)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP
        "#,
        params![key, value],
    )?;

    Ok(())
}

// ===== Helper Functions =====

fn bookmark_from_row(row: &Row<'_>) -> rusqlite::Result<Bookmark> {
    let date: String = row.get(2)?;
    let top_paper: Option<String> = row.get(4)?;

    Ok(Bookmark {
        id: row.get(0)?,
        topic: row.get(1)?,
        date: parse_timestamp(2, &date)?,
        score: row.get(3)?,
        top_paper: top_paper
            .map(|json| serde_json::from_str::<ResearchPaper>(&json))
            .transpose()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?,
    })
}

fn parse_timestamp(idx: usize, value: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
