//! Roast selection over persisted and built-in pools.

use crate::defaults::{builtin_roasts, FALLBACK_ROAST};
use crate::error::StoreError;
use crate::repository::RoastRepository;
use crate::types::RoastCategory;
use rand::seq::IndexedRandom;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Resolves a category to a roast.
///
/// Persisted roasts for a category shadow the built-in ones: the built-in
/// pool is only consulted while nothing has been added for that category.
pub struct RoastStore {
    repository: Arc<dyn RoastRepository>,
    builtins: HashMap<RoastCategory, Vec<String>>,
}

impl RoastStore {
    /// Create a store seeded with the built-in roast pools.
    pub fn new(repository: Arc<dyn RoastRepository>) -> Self {
        let builtins = RoastCategory::ALL
            .into_iter()
            .map(|category| {
                let pool = builtin_roasts(category)
                    .iter()
                    .map(|roast| roast.to_string())
                    .collect();
                (category, pool)
            })
            .collect();

        Self::with_builtins(repository, builtins)
    }

    /// Create a store with custom built-in pools. Missing categories are empty.
    pub fn with_builtins(
        repository: Arc<dyn RoastRepository>,
        builtins: HashMap<RoastCategory, Vec<String>>,
    ) -> Self {
        Self {
            repository,
            builtins,
        }
    }

    /// Built-in pool for a category.
    pub fn builtin_pool(&self, category: RoastCategory) -> &[String] {
        self.builtins
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Pick a roast for `category`, uniformly at random.
    #[instrument(skip(self))]
    pub async fn get_roast(&self, category: RoastCategory) -> Result<String, StoreError> {
        let persisted = self.repository.roasts_for(category.as_str()).await?;

        if let Some(roast) = pick(&persisted) {
            debug!("Picked from {} persisted {} roasts", persisted.len(), category);
            return Ok(roast);
        }

        Ok(pick(self.builtin_pool(category)).unwrap_or_else(|| FALLBACK_ROAST.to_string()))
    }

    /// Persist a new roast under a free-form level label.
    #[instrument(skip(self, text))]
    pub async fn add_roast(&self, level: &str, text: &str) -> Result<(), StoreError> {
        self.repository.add_roast(level, text).await?;
        info!("Added roast to {} category", level);
        Ok(())
    }
}

fn pick(pool: &[String]) -> Option<String> {
    pool.choose(&mut rand::rng()).cloned()
}
