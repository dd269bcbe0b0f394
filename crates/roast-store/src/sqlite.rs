//! SQLite-backed roast and leaderboard storage.

use crate::error::StoreError;
use crate::repository::{LeaderboardRepository, RoastRepository};
use crate::types::LeaderboardEntry;
use async_trait::async_trait;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{info, instrument};

/// Durable store for both tables in a single SQLite database.
///
/// Queries run on tokio's blocking pool so disk I/O never stalls the
/// runtime's worker threads.
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open a store from a connection string.
    ///
    /// Accepts `sqlite://path`, `sqlite:path`, a bare path, or `:memory:`.
    pub fn connect(url: &str) -> Result<Self, StoreError> {
        let target = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .unwrap_or(url);

        if target == ":memory:" {
            Self::open_in_memory()
        } else {
            Self::open(Path::new(target))
        }
    }

    /// Open (or create) a database file.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;

        let store = Self::from_connection(conn)?;
        info!("Database opened at {} (journal_mode={})", path.display(), mode);
        Ok(store)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let store = Self::from_connection(Connection::open_in_memory()?)?;
        info!("In-memory database opened");
        Ok(store)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        migrate(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn with_conn<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);

        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|e| StoreError::Poisoned(e.to_string()))?;
            f(&conn)
        })
        .await?
    }
}

fn migrate(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS leaderboard (
            user_id          INTEGER PRIMARY KEY,
            username         TEXT,
            roasts_received  INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS roasts (
            id     INTEGER PRIMARY KEY AUTOINCREMENT,
            level  TEXT NOT NULL,
            text   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_roasts_level
            ON roasts(level);
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}

#[async_trait]
impl RoastRepository for SqliteStore {
    async fn roasts_for(&self, level: &str) -> Result<Vec<String>, StoreError> {
        let level = level.to_string();

        self.with_conn(move |conn| {
            let mut stmt = conn.prepare("SELECT text FROM roasts WHERE level = ?1 ORDER BY id")?;
            let rows = stmt
                .query_map([level], |row| row.get(0))?
                .collect::<Result<Vec<String>, _>>()?;
            Ok(rows)
        })
        .await
    }

    #[instrument(skip(self, text))]
    async fn add_roast(&self, level: &str, text: &str) -> Result<(), StoreError> {
        let (level, text) = (level.to_string(), text.to_string());

        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO roasts (level, text) VALUES (?1, ?2)",
                (level, text),
            )?;
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl LeaderboardRepository for SqliteStore {
    #[instrument(skip(self))]
    async fn record_roast(&self, user_id: i64, username: &str) -> Result<(), StoreError> {
        let username = username.to_string();

        // Single upsert; the stored username is only written on insert.
        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO leaderboard (user_id, username, roasts_received) VALUES (?1, ?2, 1)
                 ON CONFLICT(user_id) DO UPDATE SET roasts_received = roasts_received + 1",
                rusqlite::params![user_id, username],
            )?;
            Ok(())
        })
        .await
    }

    async fn top(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        self.with_conn(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT user_id, COALESCE(username, ''), roasts_received FROM leaderboard
                 ORDER BY roasts_received DESC, user_id ASC LIMIT ?1",
            )?;

            let rows = stmt
                .query_map([limit], |row| {
                    Ok(LeaderboardEntry {
                        user_id: row.get(0)?,
                        username: row.get(1)?,
                        roasts_received: row.get(2)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;

            Ok(rows)
        })
        .await
    }

    async fn reset_all(&self) -> Result<usize, StoreError> {
        let removed = self
            .with_conn(|conn| Ok(conn.execute("DELETE FROM leaderboard", [])?))
            .await?;
        info!("Cleared {} leaderboard entries", removed);
        Ok(removed)
    }
}
