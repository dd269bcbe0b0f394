//! Roast and leaderboard types.

use crate::error::UnknownCategory;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity label of a roast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoastCategory {
    Mild,
    Medium,
    Savage,
    Nuclear,
}

impl RoastCategory {
    pub const ALL: [RoastCategory; 4] = [
        RoastCategory::Mild,
        RoastCategory::Medium,
        RoastCategory::Savage,
        RoastCategory::Nuclear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoastCategory::Mild => "mild",
            RoastCategory::Medium => "medium",
            RoastCategory::Savage => "savage",
            RoastCategory::Nuclear => "nuclear",
        }
    }
}

impl fmt::Display for RoastCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoastCategory {
    type Err = UnknownCategory;

    /// Exact, lowercase match. Callers lowercase user input first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoastCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A roast persisted by the admin add command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRoast {
    pub id: i64,
    pub level: String,
    pub text: String,
}

/// Per-user count of roast commands issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: i64,
    pub username: String,
    pub roasts_received: i64,
}

impl LeaderboardEntry {
    pub fn new(user_id: i64, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            roasts_received: 1,
        }
    }
}
