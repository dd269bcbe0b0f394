//! Roast pools and leaderboard storage.
//!
//! Both tables sit behind repository traits so the bot can run against
//! SQLite in production and an in-memory store in tests.

mod defaults;
mod error;
mod memory;
mod repository;
mod roasts;
mod sqlite;
mod types;

pub use defaults::{builtin_roasts, FALLBACK_ROAST};
pub use error::{StoreError, UnknownCategory};
pub use memory::MemoryStore;
pub use repository::{LeaderboardRepository, RoastRepository};
pub use roasts::RoastStore;
pub use sqlite::SqliteStore;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio_test::assert_ok;

    #[test]
    fn test_category_from_str() {
        assert_eq!("mild".parse::<RoastCategory>(), Ok(RoastCategory::Mild));
        assert_eq!("nuclear".parse::<RoastCategory>(), Ok(RoastCategory::Nuclear));
        assert!("Mild".parse::<RoastCategory>().is_err());
        assert!("spicy".parse::<RoastCategory>().is_err());
    }

    #[test]
    fn test_unknown_category_error() {
        let err = "spicy".parse::<RoastCategory>().unwrap_err();
        assert_eq!(err, UnknownCategory("spicy".into()));
        assert_eq!(err.to_string(), "unknown roast category: spicy");

        let boxed: Box<dyn std::error::Error + Send + Sync> = err.into();
        assert_eq!(boxed.to_string(), "unknown roast category: spicy");
    }

    #[test]
    fn test_category_display_round_trips() {
        for category in RoastCategory::ALL {
            assert_eq!(category.to_string().parse::<RoastCategory>(), Ok(category));
        }
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&RoastCategory::Savage).unwrap();
        assert_eq!(json, "\"savage\"");
    }

    #[test]
    fn test_builtin_pools_are_populated() {
        for category in RoastCategory::ALL {
            let pool = builtin_roasts(category);
            assert_eq!(pool.len(), 2);
            assert!(pool.iter().all(|roast| !roast.is_empty()));
        }
    }

    // RoastStore selection

    #[tokio::test]
    async fn test_get_roast_uses_builtins_when_nothing_persisted() {
        let roasts = RoastStore::new(Arc::new(MemoryStore::new()));

        for category in RoastCategory::ALL {
            let roast = roasts.get_roast(category).await.unwrap();
            assert!(builtin_roasts(category).contains(&roast.as_str()));
        }
    }

    #[tokio::test]
    async fn test_persisted_roasts_shadow_builtins() {
        let store = Arc::new(MemoryStore::new());
        let roasts = RoastStore::new(store.clone());

        roasts.add_roast("mild", "Custom mild roast").await.unwrap();

        for _ in 0..20 {
            let roast = roasts.get_roast(RoastCategory::Mild).await.unwrap();
            assert_eq!(roast, "Custom mild roast");
        }

        // Other categories still fall back to the built-in pool
        let medium = roasts.get_roast(RoastCategory::Medium).await.unwrap();
        assert!(builtin_roasts(RoastCategory::Medium).contains(&medium.as_str()));
    }

    #[tokio::test]
    async fn test_added_roast_is_selectable() {
        let roasts = RoastStore::new(Arc::new(MemoryStore::new()));

        roasts.add_roast("savage", "First").await.unwrap();
        roasts.add_roast("savage", "Second").await.unwrap();

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(roasts.get_roast(RoastCategory::Savage).await.unwrap());
        }

        assert!(seen.contains("First"));
        assert!(seen.contains("Second"));
        assert_eq!(seen.len(), 2);
    }

    #[tokio::test]
    async fn test_get_roast_fallback_when_pools_empty() {
        let roasts = RoastStore::with_builtins(Arc::new(MemoryStore::new()), HashMap::new());

        let roast = roasts.get_roast(RoastCategory::Nuclear).await.unwrap();
        assert_eq!(roast, FALLBACK_ROAST);
    }

    #[tokio::test]
    async fn test_add_roast_accepts_unknown_level() {
        let store = Arc::new(MemoryStore::new());
        let roasts = RoastStore::new(store.clone());

        roasts.add_roast("spicy", "Off-menu roast").await.unwrap();

        let stored = store.stored_roasts().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].level, "spicy");
        assert_eq!(stored[0].text, "Off-menu roast");
    }

    // In-memory store tests

    #[tokio::test]
    async fn test_memory_record_roast_creates_entry() {
        let store = MemoryStore::new();

        store.record_roast(1, "alice").await.unwrap();

        let top = store.top(10).await.unwrap();
        assert_eq!(top, vec![LeaderboardEntry::new(1, "alice")]);
    }

    #[tokio::test]
    async fn test_memory_record_roast_increments_and_keeps_username() {
        let store = MemoryStore::new();

        store.record_roast(1, "alice").await.unwrap();
        store.record_roast(1, "alice_renamed").await.unwrap();

        let entry = store.entry(1).await.unwrap();
        assert_eq!(entry.roasts_received, 2);
        assert_eq!(entry.username, "alice");
        assert_eq!(store.top(10).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_memory_top_orders_and_truncates() {
        let store = MemoryStore::new();

        for (user_id, name, count) in [(1, "a", 1), (2, "b", 3), (3, "c", 2), (4, "d", 5)] {
            for _ in 0..count {
                store.record_roast(user_id, name).await.unwrap();
            }
        }

        let top = store.top(3).await.unwrap();
        let counts: Vec<i64> = top.iter().map(|e| e.roasts_received).collect();
        assert_eq!(counts, vec![5, 3, 2]);
        assert_eq!(top[0].username, "d");
    }

    #[tokio::test]
    async fn test_memory_reset_all() {
        let store = MemoryStore::new();
        store.record_roast(1, "alice").await.unwrap();
        store.record_roast(2, "bob").await.unwrap();

        let removed = assert_ok!(store.reset_all().await);
        assert_eq!(removed, 2);
        assert!(store.top(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_memory_top_empty() {
        let store = MemoryStore::new();
        assert!(store.top(10).await.unwrap().is_empty());
    }

    // SQLite store tests

    #[tokio::test]
    async fn test_sqlite_roasts_by_level() {
        let store = assert_ok!(SqliteStore::open_in_memory());

        store.add_roast("mild", "one").await.unwrap();
        store.add_roast("mild", "two").await.unwrap();
        store.add_roast("savage", "three").await.unwrap();

        assert_eq!(store.roasts_for("mild").await.unwrap(), vec!["one", "two"]);
        assert_eq!(store.roasts_for("savage").await.unwrap(), vec!["three"]);
        assert!(store.roasts_for("nuclear").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sqlite_record_roast_upsert() {
        let store = SqliteStore::open_in_memory().unwrap();

        store.record_roast(42, "carol").await.unwrap();
        let top = store.top(10).await.unwrap();
        assert_eq!(top, vec![LeaderboardEntry::new(42, "carol")]);

        store.record_roast(42, "carol_new").await.unwrap();
        let top = store.top(10).await.unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].roasts_received, 2);
        assert_eq!(top[0].username, "carol");
    }

    #[tokio::test]
    async fn test_sqlite_top_orders_and_truncates() {
        let store = SqliteStore::open_in_memory().unwrap();

        for (user_id, name, count) in [(1, "a", 2), (2, "b", 4), (3, "c", 1)] {
            for _ in 0..count {
                store.record_roast(user_id, name).await.unwrap();
            }
        }

        let top = store.top(2).await.unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].username, "b");
        assert_eq!(top[0].roasts_received, 4);
        assert_eq!(top[1].username, "a");
    }

    #[tokio::test]
    async fn test_sqlite_reset_all() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.record_roast(1, "alice").await.unwrap();

        assert_eq!(store.reset_all().await.unwrap(), 1);
        assert!(store.top(10).await.unwrap().is_empty());
        assert_eq!(store.reset_all().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_sqlite_connect_memory_url() {
        let store = SqliteStore::connect("sqlite://:memory:").unwrap();
        store.add_roast("medium", "hello").await.unwrap();
        assert_eq!(store.roasts_for("medium").await.unwrap(), vec!["hello"]);
    }

    #[tokio::test]
    async fn test_sqlite_file_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roastify.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.add_roast("nuclear", "persisted").await.unwrap();
            store.record_roast(7, "dave").await.unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.roasts_for("nuclear").await.unwrap(), vec!["persisted"]);
        assert_eq!(store.top(10).await.unwrap()[0].username, "dave");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_sqlite_concurrent_record_roast() {
        let store = Arc::new(SqliteStore::open_in_memory().unwrap());

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    for _ in 0..5 {
                        store.record_roast(1, "alice").await.unwrap();
                    }
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap();
        }

        let top = store.top(10).await.unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].roasts_received, 40);
    }
}
