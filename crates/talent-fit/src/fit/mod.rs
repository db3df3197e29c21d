//! Behavioral fit scoring between candidates, role profiles, and hiring leaders.
//!
//! Every computation here is a pure function of its arguments: no I/O, no clock,
//! no shared mutable state. [`FitEngine`] carries the product constants and is
//! safe to share across threads.

mod aggregation;
pub mod batch;
pub mod domain;
pub mod ideal_range;
pub mod policy;
pub mod recommendation;
pub mod report;
pub mod repository;
pub mod service;
pub mod similarity;
pub mod templates;
pub mod tier;
mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    Dimension, DimensionGroup, DimensionRange, DiscRanges, DiscScores, IdealProfile, MbtiRanges,
    MbtiScores, MeasuredProfile, ProfileDraft, TypeCode,
};
pub use ideal_range::TypePreference;
pub use policy::{CompositeWeights, ConsolidationWeights, FitPolicy, PolicyError, VerdictBands};
pub use recommendation::RecommendationContext;
pub use tier::{FitTier, TierThresholds};
pub use validation::{BlankTypeCode, FitError, InvalidIdealRangeError, InvalidProfileError};

use serde::{Deserialize, Serialize};

/// Stateless scorer applying a [`FitPolicy`] to profiles.
#[derive(Debug, Clone, Default)]
pub struct FitEngine {
    policy: FitPolicy,
}

impl FitEngine {
    /// Rejects policies whose blend weights or thresholds are inconsistent.
    pub fn new(policy: FitPolicy) -> Result<Self, PolicyError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &FitPolicy {
        &self.policy
    }

    /// Distance-based fit between two measured profiles.
    pub fn compute_pairwise_fit(
        &self,
        left: &MeasuredProfile,
        right: &MeasuredProfile,
    ) -> Result<PairwiseFitResult, InvalidProfileError> {
        left.validate()?;
        right.validate()?;
        Ok(similarity::score_pairwise(left, right, &self.policy))
    }

    /// Fit between a measured profile and a role's weighted ideal ranges.
    pub fn compute_range_fit(
        &self,
        candidate: &MeasuredProfile,
        ideal: &IdealProfile,
    ) -> Result<RangeFitResult, FitError> {
        candidate.validate()?;
        ideal.validate()?;
        let result = ideal_range::score_range(candidate, ideal, &self.policy)?;
        Ok(result)
    }

    /// Blends role fit with an optional leader fit.
    pub fn compute_consolidated_fit(
        &self,
        role_fit: &RangeFitResult,
        leader_fit: Option<&PairwiseFitResult>,
    ) -> ConsolidatedResult {
        aggregation::consolidate(role_fit, leader_fit, &self.policy)
    }
}

pub fn compute_pairwise_fit(
    left: &MeasuredProfile,
    right: &MeasuredProfile,
) -> Result<PairwiseFitResult, InvalidProfileError> {
    FitEngine::default().compute_pairwise_fit(left, right)
}

pub fn compute_range_fit(
    candidate: &MeasuredProfile,
    ideal: &IdealProfile,
) -> Result<RangeFitResult, FitError> {
    FitEngine::default().compute_range_fit(candidate, ideal)
}

pub fn compute_consolidated_fit(
    role_fit: &RangeFitResult,
    leader_fit: Option<&PairwiseFitResult>,
) -> ConsolidatedResult {
    FitEngine::default().compute_consolidated_fit(role_fit, leader_fit)
}

/// Per-dimension closeness of two measured profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionMatch {
    pub dimension: Dimension,
    pub score: u8,
    pub value: f64,
    pub counterpart: f64,
}

/// Per-dimension position of a candidate relative to the role band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub score: u8,
    pub within_range: bool,
    pub value: f64,
    pub range: String,
}

/// Profile-versus-profile fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwiseFitResult {
    pub overall_score: u8,
    pub disc_score: u8,
    pub mbti_score: u8,
    pub tier: FitTier,
    pub dimension_details: Vec<DimensionMatch>,
    pub recommendation: String,
}

/// Profile-versus-role fit. `mbti_score` includes the preferred-type bonus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeFitResult {
    pub role_name: String,
    pub overall_score: u8,
    pub disc_score: u8,
    pub mbti_score: u8,
    pub mbti_score_raw: u8,
    pub type_preference: TypePreference,
    pub tier: FitTier,
    pub dimension_details: Vec<DimensionScore>,
    pub recommendation: String,
}

/// Single summary number blending role fit and leader fit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidatedResult {
    pub consolidated_score: u8,
    pub tier: FitTier,
    pub verdict: String,
    pub role_score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader_score: Option<u8>,
}
