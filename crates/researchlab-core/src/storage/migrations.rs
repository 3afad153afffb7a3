//! Database migrations

use crate::error::Result;
use rusqlite::Connection;
use tracing::{debug, info};

/// Run all database migrations
pub fn run_migrations(conn: &Connection) -> Result<()> {
    info!("Running database migrations");

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS migrations (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            applied_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );
        "#,
    )?;

    let migrations: Vec<(&str, &str)> = vec![
        ("001_bookmarks", MIGRATION_001_BOOKMARKS),
        ("002_settings", MIGRATION_002_SETTINGS),
        ("003_bookmarks_topic_key", MIGRATION_003_BOOKMARKS_TOPIC_KEY),
    ];

    for (name, sql) in migrations {
        if !migration_applied(conn, name)? {
            debug!("Applying migration: {}", name);
            conn.execute_batch(sql)?;
            mark_migration_applied(conn, name)?;
            info!("Applied migration: {}", name);
        }
    }

    Ok(())
}

fn migration_applied(conn: &Connection, name: &str) -> Result<bool> {
    let count: i32 = conn.query_row(
        "SELECT COUNT(*) FROM migrations WHERE name = ?",
        [name],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

fn mark_migration_applied(conn: &Connection, name: &str) -> Result<()> {
    conn.execute("INSERT INTO migrations (name) VALUES (?)", [name])?;
    Ok(())
}

const MIGRATION_001_BOOKMARKS: &str = r#"
-- Saved research results, one per topic
CREATE TABLE IF NOT EXISTS bookmarks (
    id TEXT PRIMARY KEY,
    topic TEXT NOT NULL UNIQUE,
    date DATETIME NOT NULL,
    score REAL NOT NULL,
    top_paper TEXT
);

CREATE INDEX IF NOT EXISTS idx_bookmarks_date ON bookmarks(date DESC);
"#;

const MIGRATION_002_SETTINGS: &str = r#"
-- Application settings table
CREATE TABLE IF NOT EXISTS settings (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
);
"#;

const MIGRATION_003_BOOKMARKS_TOPIC_KEY: &str = r#"
-- Bookmarks are keyed by topic; the id is only a save timestamp
CREATE TABLE bookmarks_new (
    topic TEXT PRIMARY KEY,
    id TEXT NOT NULL,
    date DATETIME NOT NULL,
    score REAL NOT NULL,
    top_paper TEXT
);

INSERT INTO bookmarks_new (topic, id, date, score, top_paper)
SELECT topic, id, date, score, top_paper FROM bookmarks;

DROP TABLE bookmarks;
ALTER TABLE bookmarks_new RENAME TO bookmarks;

CREATE INDEX IF NOT EXISTS idx_bookmarks_date ON bookmarks(date DESC);
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_run_successfully() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(tables.contains(&"bookmarks".to_string()));
        assert!(tables.contains(&"settings".to_string()));
        assert!(!tables.contains(&"bookmarks_new".to_string()));
    }

    #[test]
    fn test_topic_key_migration_keeps_rows() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE migrations (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                applied_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );
            "#,
        )
        .unwrap();
        conn.execute_batch(MIGRATION_001_BOOKMARKS).unwrap();
        mark_migration_applied(&conn, "001_bookmarks").unwrap();
        let insert = "INSERT INTO bookmarks (id, topic, date, score) VALUES ('1', ?, ?, 7.0)";
        let date = "2024-05-01T00:00:00+00:00";
        conn.execute(insert, ["T", date]).unwrap();

        run_migrations(&conn).unwrap();

        let topic: String = conn
            .query_row("SELECT topic FROM bookmarks WHERE id = '1'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(topic, "T");

        // Same id under a different topic is now accepted
        conn.execute(insert, ["U", date]).unwrap();
    }

    #[test]
    fn test_migrations_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();

        let count: i32 = conn
            .query_row("SELECT COUNT(*) FROM migrations", [], |row| row.get(0))
            .unwrap();

        assert_eq!(count, 3);
    }
}
