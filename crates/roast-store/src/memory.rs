//! In-memory roast and leaderboard storage.

use crate::error::StoreError;
use crate::repository::{LeaderboardRepository, RoastRepository};
use crate::types::{LeaderboardEntry, StoredRoast};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

#[derive(Default)]
struct RoastRows {
    rows: Vec<StoredRoast>,
    next_id: i64,
}

/// In-memory store for both tables.
///
/// Nothing survives a restart. Used for tests and for running the bot
/// without a database file.
#[derive(Clone, Default)]
pub struct MemoryStore {
    roasts: Arc<RwLock<RoastRows>>,
    leaderboard: Arc<RwLock<HashMap<i64, LeaderboardEntry>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every persisted roast, in insertion order.
    pub async fn stored_roasts(&self) -> Vec<StoredRoast> {
        self.roasts.read().await.rows.clone()
    }

    /// Look up a single leaderboard entry.
    pub async fn entry(&self, user_id: i64) -> Option<LeaderboardEntry> {
        self.leaderboard.read().await.get(&user_id).cloned()
    }
}

#[async_trait]
impl RoastRepository for MemoryStore {
    async fn roasts_for(&self, level: &str) -> Result<Vec<String>, StoreError> {
        let roasts = self.roasts.read().await;
        Ok(roasts
            .rows
            .iter()
            .filter(|row| row.level == level)
            .map(|row| row.text.clone())
            .collect())
    }

    #[instrument(skip(self, text))]
    async fn add_roast(&self, level: &str, text: &str) -> Result<(), StoreError> {
        let mut roasts = self.roasts.write().await;
        roasts.next_id += 1;
        let id = roasts.next_id;
        roasts.rows.push(StoredRoast {
            id,
            level: level.to_string(),
            text: text.to_string(),
        });

        debug!("Stored roast {} (total: {})", id, roasts.rows.len());
        Ok(())
    }
}

#[async_trait]
impl LeaderboardRepository for MemoryStore {
    #[instrument(skip(self))]
    async fn record_roast(&self, user_id: i64, username: &str) -> Result<(), StoreError> {
        let mut leaderboard = self.leaderboard.write().await;

        leaderboard
            .entry(user_id)
            .and_modify(|entry| entry.roasts_received += 1)
            .or_insert_with(|| LeaderboardEntry::new(user_id, username));

        Ok(())
    }

    async fn top(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let leaderboard = self.leaderboard.read().await;
        let mut entries: Vec<LeaderboardEntry> = leaderboard.values().cloned().collect();

        entries.sort_by(|a, b| {
            b.roasts_received
                .cmp(&a.roasts_received)
                .then(a.user_id.cmp(&b.user_id))
        });
        entries.truncate(limit);

        Ok(entries)
    }

    async fn reset_all(&self) -> Result<usize, StoreError> {
        let mut leaderboard = self.leaderboard.write().await;
        let removed = leaderboard.len();
        leaderboard.clear();

        info!("Cleared {} leaderboard entries", removed);
        Ok(removed)
    }
}
