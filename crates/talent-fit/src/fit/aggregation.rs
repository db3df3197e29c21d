use super::policy::{CompositeWeights, ConsolidationWeights, FitPolicy};
use super::recommendation::consolidated_verdict;
use super::{ConsolidatedResult, PairwiseFitResult, RangeFitResult};

/// Rounds half away from zero and clamps to the 0-100 score scale.
pub(crate) fn round_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

pub(crate) fn mean_score(scores: &[f64]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    round_score(scores.iter().sum::<f64>() / scores.len() as f64)
}

/// Weighted mean of `(score, weight)` pairs; `None` when the weights sum to zero.
pub(crate) fn weighted_score(pairs: &[(f64, f64)]) -> Option<u8> {
    let total_weight: f64 = pairs.iter().map(|(_, weight)| weight).sum();
    if total_weight <= 0.0 {
        return None;
    }
    let weighted: f64 = pairs.iter().map(|(score, weight)| score * weight).sum();
    Some(round_score(weighted / total_weight))
}

impl CompositeWeights {
    pub fn blend(&self, disc_score: u8, mbti_score: u8) -> u8 {
        round_score(f64::from(disc_score) * self.disc + f64::from(mbti_score) * self.mbti)
    }
}

impl ConsolidationWeights {
    pub fn consolidate(&self, role_score: u8, leader_score: Option<u8>) -> u8 {
        match leader_score {
            Some(leader_score) => round_score(
                f64::from(role_score) * self.role + f64::from(leader_score) * self.leader,
            ),
            None => role_score,
        }
    }
}

pub(crate) fn consolidate(
    role_fit: &RangeFitResult,
    leader_fit: Option<&PairwiseFitResult>,
    policy: &FitPolicy,
) -> ConsolidatedResult {
    let role_score = role_fit.overall_score;
    let leader_score = leader_fit.map(|fit| fit.overall_score);
    let consolidated_score = policy.consolidation.consolidate(role_score, leader_score);

    ConsolidatedResult {
        consolidated_score,
        tier: policy.tiers.classify(consolidated_score),
        verdict: consolidated_verdict(consolidated_score, &policy.verdicts),
        role_score,
        leader_score,
    }
}
