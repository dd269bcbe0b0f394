//! Persistence seams for roasts and the leaderboard.

use crate::error::StoreError;
use crate::types::LeaderboardEntry;
use async_trait::async_trait;

/// Persisted roast rows, keyed by free-form level label.
#[async_trait]
pub trait RoastRepository: Send + Sync {
    /// All persisted roast texts stored under `level`.
    async fn roasts_for(&self, level: &str) -> Result<Vec<String>, StoreError>;

    /// Append a roast under `level`. The label is not validated.
    async fn add_roast(&self, level: &str, text: &str) -> Result<(), StoreError>;
}

/// Per-user roast counters.
#[async_trait]
pub trait LeaderboardRepository: Send + Sync {
    /// Create the entry with a count of 1, or increment an existing one.
    ///
    /// An existing entry keeps the username it was created with.
    async fn record_roast(&self, user_id: i64, username: &str) -> Result<(), StoreError>;

    /// Entries ordered by count descending, at most `limit` of them.
    async fn top(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, StoreError>;

    /// Delete every entry, returning how many were removed.
    async fn reset_all(&self) -> Result<usize, StoreError>;
}
