use serde::{Deserialize, Serialize};

use super::tier::TierThresholds;

pub const DEFAULT_DISC_WEIGHT: f64 = 0.6;
pub const DEFAULT_MBTI_WEIGHT: f64 = 0.4;
pub const DEFAULT_ROLE_WEIGHT: f64 = 0.6;
pub const DEFAULT_LEADER_WEIGHT: f64 = 0.4;
pub const DEFAULT_TYPE_MATCH_BONUS: u8 = 10;
pub const DEFAULT_HIGH_TIER_THRESHOLD: u8 = 75;
pub const DEFAULT_MEDIUM_TIER_THRESHOLD: u8 = 50;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Blend of the DISC and MBTI composites into an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeWeights {
    pub disc: f64,
    pub mbti: f64,
}

/// Blend of role fit and leader fit into the consolidated score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsolidationWeights {
    pub role: f64,
    pub leader: f64,
}

/// Lower bounds of the consolidated verdict bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictBands {
    pub excellent: u8,
    pub good: u8,
    pub moderate: u8,
}

impl Default for VerdictBands {
    fn default() -> Self {
        Self {
            excellent: 80,
            good: 65,
            moderate: 50,
        }
    }
}

/// Product constants applied by every scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitPolicy {
    pub composite: CompositeWeights,
    pub consolidation: ConsolidationWeights,
    pub type_match_bonus: u8,
    pub tiers: TierThresholds,
    pub verdicts: VerdictBands,
}

impl Default for FitPolicy {
    fn default() -> Self {
        Self {
            composite: CompositeWeights {
                disc: DEFAULT_DISC_WEIGHT,
                mbti: DEFAULT_MBTI_WEIGHT,
            },
            consolidation: ConsolidationWeights {
                role: DEFAULT_ROLE_WEIGHT,
                leader: DEFAULT_LEADER_WEIGHT,
            },
            type_match_bonus: DEFAULT_TYPE_MATCH_BONUS,
            tiers: TierThresholds {
                high: DEFAULT_HIGH_TIER_THRESHOLD,
                medium: DEFAULT_MEDIUM_TIER_THRESHOLD,
            },
            verdicts: VerdictBands::default(),
        }
    }
}

impl FitPolicy {
    pub fn validate(&self) -> Result<(), PolicyError> {
        check_pair(
            "composite",
            ("disc", self.composite.disc),
            ("mbti", self.composite.mbti),
        )?;
        check_pair(
            "consolidation",
            ("role", self.consolidation.role),
            ("leader", self.consolidation.leader),
        )?;

        let TierThresholds { high, medium } = self.tiers;
        if medium > high || high > 100 {
            return Err(PolicyError::TierOrder { high, medium });
        }

        let VerdictBands {
            excellent,
            good,
            moderate,
        } = self.verdicts;
        if moderate > good || good > excellent || excellent > 100 {
            return Err(PolicyError::VerdictOrder {
                excellent,
                good,
                moderate,
            });
        }

        Ok(())
    }
}

fn check_pair(
    pair: &'static str,
    first: (&'static str, f64),
    second: (&'static str, f64),
) -> Result<(), PolicyError> {
    for (name, value) in [first, second] {
        if !(0.0..=1.0).contains(&value) {
            return Err(PolicyError::WeightOutOfRange { name, value });
        }
    }

    let total = first.1 + second.1;
    if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(PolicyError::WeightSum { pair, total });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolicyError {
    #[error("{name} weight {value} must lie within [0, 1]")]
    WeightOutOfRange { name: &'static str, value: f64 },
    #[error("{pair} weights must sum to 1 (got {total})")]
    WeightSum { pair: &'static str, total: f64 },
    #[error("tier thresholds must satisfy medium ({medium}) <= high ({high}) <= 100")]
    TierOrder { high: u8, medium: u8 },
    #[error(
        "verdict bands must satisfy moderate ({moderate}) <= good ({good}) <= excellent ({excellent}) <= 100"
    )]
    VerdictOrder { excellent: u8, good: u8, moderate: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_valid() {
        assert!(FitPolicy::default().validate().is_ok());
    }

    #[test]
    fn rejects_unbalanced_composite() {
        let mut policy = FitPolicy::default();
        policy.composite.mbti = 0.5;
        assert!(matches!(
            policy.validate(),
            Err(PolicyError::WeightSum {
                pair: "composite",
                ..
            })
        ));
    }

    #[test]
    fn rejects_inverted_tiers() {
        let mut policy = FitPolicy::default();
        policy.tiers.medium = 80;
        assert_eq!(
            policy.validate(),
            Err(PolicyError::TierOrder {
                high: 75,
                medium: 80
            })
        );
    }
}
