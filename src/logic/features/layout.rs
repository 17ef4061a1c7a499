//! Feature Layout - Centralized Feature Definition
//!
//! **This file controls the model input schema.**
//!
//! The district list and bucket count are versioned alongside the trained
//! model. Changing either without retraining silently breaks predictions;
//! the layout hash makes that drift visible at startup and on `/health`.
//!
//! ```text
//! [0..4)     numeric   Baths, Beds, Land_size, House_size
//! [4..28)    one-hot   district (canonical order below)
//! [28..247)  one-hot   town bucket (sha256(trim(town)) mod 219)
//! ```

use crc32fast::Hasher;
use serde::Serialize;

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
/// MUST be incremented when layout changes
pub const FEATURE_VERSION: u8 = 2;

// ============================================================================
// LAYOUT CONSTANTS
// ============================================================================

/// Numeric features in the order they lead the vector
pub const NUMERIC_FEATURES: &[&str] = &["Baths", "Beds", "Land_size", "House_size"];

/// Districts in one-hot order. Position is the slot index.
pub const DISTRICTS: &[&str] = &[
    "Ampara", "Anuradhapura", "Badulla", "Batticaloa", "Colombo",
    "Galle", "Gampaha", "Hambantota", "Jaffna", "Kalutara",
    "Kandy", "Kegalle", "Kurunegala", "Mannar", "Matale",
    "Matara", "Monaragala", "Mullativu", "Nuwara Eliya",
    "Polonnaruwa", "Puttalam", "Ratnapura", "Trincomalee", "Vavuniya",
];

/// Number of hash buckets for the town one-hot block
pub const TOWN_BUCKETS: usize = 219;

pub const NUMERIC_COUNT: usize = 4;
pub const DISTRICT_COUNT: usize = 24;

/// Total number of features the model was trained on
/// IMPORTANT: Must equal NUMERIC_COUNT + DISTRICT_COUNT + TOWN_BUCKETS
pub const FEATURE_COUNT: usize = 247;

/// Offset of the first district slot
pub const DISTRICT_OFFSET: usize = NUMERIC_COUNT;

/// Offset of the first town bucket slot
pub const TOWN_OFFSET: usize = NUMERIC_COUNT + DISTRICT_COUNT;

/// One-hot position of a district, exact (case-sensitive) match
pub fn district_index(name: &str) -> Option<usize> {
    DISTRICTS.iter().position(|d| *d == name)
}

/// Feature names in vector order
pub fn feature_names() -> Vec<String> {
    NUMERIC_FEATURES
        .iter()
        .map(|n| n.to_string())
        .chain(DISTRICTS.iter().map(|d| format!("district_{}", d)))
        .chain((0..TOWN_BUCKETS).map(|i| format!("town_bucket_{}", i)))
        .collect()
}

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 over version + ordered feature names
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(&[FEATURE_VERSION]);

    for name in feature_names() {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

/// Layout summary for logging and health reporting
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub district_count: usize,
    pub town_buckets: usize,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_count: FEATURE_COUNT,
            district_count: DISTRICTS.len(),
            town_buckets: TOWN_BUCKETS,
        }
    }
}

impl Default for LayoutInfo {
    fn default() -> Self {
        Self::current()
    }
}
