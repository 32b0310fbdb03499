//! Water-quality status classification.
//!
//! The status column is free text. It collapses into four buckets, each
//! with a fixed marker color the map legend documents: green for a good
//! status, yellow for potential stress, red for danger, grey for
//! anything unrecognized.

use serde::Serialize;

/// A marker color, serialized as `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgba(pub [u8; 4]);

/// The four buckets the dashboard legend distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBucket {
    Good,
    PotentialStress,
    InDanger,
    Unknown,
}

impl StatusBucket {
    /// Marker color for this bucket.
    pub fn color(self) -> Rgba {
        match self {
            StatusBucket::Good => Rgba([0, 170, 0, 220]),
            StatusBucket::PotentialStress => Rgba([255, 205, 0, 220]),
            StatusBucket::InDanger => Rgba([200, 0, 0, 220]),
            StatusBucket::Unknown => Rgba([160, 160, 160, 200]),
        }
    }

    /// Legend label for this bucket.
    pub fn label(self) -> &'static str {
        match self {
            StatusBucket::Good => "OK",
            StatusBucket::PotentialStress => "Potential stress",
            StatusBucket::InDanger => "In danger",
            StatusBucket::Unknown => "Unknown",
        }
    }
}

/// Classify a raw status string into its bucket.
///
/// Matching is case-insensitive on the trimmed input. The substring
/// check runs after the exact matches and is deliberately broad: any
/// status mentioning "danger" lands in the danger bucket, including
/// negated phrasings like "no danger".
pub fn classify(status: &str) -> StatusBucket {
    let status = status.trim().to_lowercase();
    match status.as_str() {
        "ok" | "good" => StatusBucket::Good,
        "potential stress" => StatusBucket::PotentialStress,
        "in danger" | "danger" | "at risk" | "poor" => StatusBucket::InDanger,
        s if s.contains("danger") => StatusBucket::InDanger,
        _ => StatusBucket::Unknown,
    }
}
