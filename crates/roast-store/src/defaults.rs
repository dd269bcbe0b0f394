//! Built-in roast pools, available even with an empty database.

use crate::types::RoastCategory;

/// Returned when neither the persisted nor the built-in pool has entries.
pub const FALLBACK_ROAST: &str = "No roasts available!";

const MILD: &[&str] = &[
    "You're like a cloud... when you disappear, it's a beautiful day!",
    "You're not stupid; you just have bad luck thinking.",
];

const MEDIUM: &[&str] = &[
    "You're proof that even evolution takes a break sometimes.",
    "You bring everyone so much joy… when you leave the room.",
];

const SAVAGE: &[&str] = &[
    "You have something on your chin… no, the third one down.",
    "You're like a penny: two-faced and not worth much.",
];

const NUCLEAR: &[&str] = &[
    "Your secrets are safe with me. I never even listen when you tell me them.",
    "You're the reason why shampoo bottles have instructions.",
];

/// Built-in roasts for a category.
pub fn builtin_roasts(category: RoastCategory) -> &'static [&'static str] {
    match category {
        RoastCategory::Mild => MILD,
        RoastCategory::Medium => MEDIUM,
        RoastCategory::Savage => SAVAGE,
        RoastCategory::Nuclear => NUCLEAR,
    }
}
