use std::fmt;

use serde::{Deserialize, Serialize};

use super::policy::{DEFAULT_HIGH_TIER_THRESHOLD, DEFAULT_MEDIUM_TIER_THRESHOLD};

/// Discrete fit classification. Variants are ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FitTier {
    #[serde(rename = "baixo")]
    Low,
    #[serde(rename = "medio")]
    Medium,
    #[serde(rename = "alto")]
    High,
}

impl FitTier {
    pub fn label(self) -> &'static str {
        match self {
            FitTier::Low => "baixo",
            FitTier::Medium => "medio",
            FitTier::High => "alto",
        }
    }
}

impl fmt::Display for FitTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive lower bounds of the `alto` and `medio` tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub high: u8,
    pub medium: u8,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            high: DEFAULT_HIGH_TIER_THRESHOLD,
            medium: DEFAULT_MEDIUM_TIER_THRESHOLD,
        }
    }
}

impl TierThresholds {
    pub fn classify(&self, score: u8) -> FitTier {
        if score >= self.high {
            FitTier::High
        } else if score >= self.medium {
            FitTier::Medium
        } else {
            FitTier::Low
        }
    }
}
