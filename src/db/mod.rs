//! Database helpers: migrations and path handling.

use sqlx::SqlitePool;
use std::path::Path;

/// Run SQLite migrations to create tables if absent.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS contacts (
            id TEXT PRIMARY KEY,
            created_at TEXT NOT NULL,
            fullname TEXT NOT NULL,
            email TEXT NOT NULL,
            service TEXT NOT NULL,
            message TEXT NOT NULL
        )"#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Ensure SQLite file and parent folder exist for a given sqlx URL.
pub fn ensure_sqlite_path(db_url: &str) -> String {
    if !db_url.starts_with("sqlite:") {
        return db_url.to_string();
    }
    let path_part = db_url.trim_start_matches("sqlite://");
    if path_part == ":memory:" {
        return db_url.to_string();
    }
    let path_only = path_part.split_once('?').map_or(path_part, |(p, _)| p);
    if !path_only.is_empty() {
        let p = Path::new(path_only);
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = std::fs::create_dir_all(parent);
            }
        }
        let _ = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(p);
    }
    db_url.to_string()
}
