// Database related types and functions

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;

pub mod database;
pub mod session;

pub use database::Database;

pub fn prepare_sqlite_url(url: &str) -> String {
    if url.starts_with("sqlite:") && !url.contains("mode=") && !url.contains(":memory:") {
        if url.contains('?') {
            format!("{url}&mode=rwc")
        } else {
            format!("{url}?mode=rwc")
        }
    } else {
        url.to_string()
    }
}

/// Open the pool and make sure the session table exists.
pub async fn connect_db(db_url: &str, max_connections: u32) -> Result<Database> {
    tracing::debug!(db_url = %db_url, "Connecting to database");
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(db_url)
        .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS session(
            chat_id  INTEGER PRIMARY KEY,
            locale   TEXT    NOT NULL
        )",
    )
    .execute(&pool)
    .await?;

    Ok(Database::new(pool))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_sqlite_url_basic() {
        assert_eq!(
            prepare_sqlite_url("sqlite:artbot.db"),
            "sqlite:artbot.db?mode=rwc"
        );
    }

    #[test]
    fn prepare_sqlite_url_with_query() {
        assert_eq!(
            prepare_sqlite_url("sqlite:artbot.db?cache=shared"),
            "sqlite:artbot.db?cache=shared&mode=rwc"
        );
    }

    #[test]
    fn prepare_sqlite_url_existing_mode() {
        assert_eq!(
            prepare_sqlite_url("sqlite:artbot.db?mode=ro"),
            "sqlite:artbot.db?mode=ro"
        );
    }

    #[test]
    fn prepare_sqlite_url_memory() {
        assert_eq!(prepare_sqlite_url("sqlite::memory:"), "sqlite::memory:");
    }
}
