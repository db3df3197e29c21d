use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{IdealProfile, MeasuredProfile};
use super::tier::FitTier;
use super::{ConsolidatedResult, PairwiseFitResult, RangeFitResult};

/// Identifier of the person (candidate or leader) owning a measured profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OwnerId(pub String);

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a role carrying an ideal profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoleId(pub String);

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of validated profiles supplied by the assessment collaborators.
pub trait ProfileDirectory: Send + Sync {
    fn measured_profile(&self, owner: &OwnerId) -> Result<Option<MeasuredProfile>, DirectoryError>;
    fn ideal_profile(&self, role: &RoleId) -> Result<Option<IdealProfile>, DirectoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("profile directory unavailable: {0}")]
    Unavailable(String),
}

/// Sink for computed fit records.
pub trait FitResultStore: Send + Sync {
    fn persist(&self, record: FitAnalysisRecord) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("fit record already exists")]
    Conflict,
    #[error("fit store unavailable: {0}")]
    Unavailable(String),
}

/// Complete outcome of analyzing one candidate for one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitAnalysisRecord {
    pub candidate_id: OwnerId,
    pub role_id: RoleId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader_id: Option<OwnerId>,
    pub role_fit: RangeFitResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader_fit: Option<PairwiseFitResult>,
    pub consolidated: ConsolidatedResult,
    pub analyzed_at: DateTime<Utc>,
}

impl FitAnalysisRecord {
    pub fn summary_view(&self) -> FitSummaryView {
        FitSummaryView {
            candidate_id: self.candidate_id.clone(),
            role_id: self.role_id.clone(),
            consolidated_score: self.consolidated.consolidated_score,
            tier: self.consolidated.tier,
            verdict: self.consolidated.verdict.clone(),
            role_score: self.role_fit.overall_score,
            leader_score: self.leader_fit.as_ref().map(|fit| fit.overall_score),
            analyzed_at: self.analyzed_at,
        }
    }
}

/// Compact projection of a record for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FitSummaryView {
    pub candidate_id: OwnerId,
    pub role_id: RoleId,
    pub consolidated_score: u8,
    pub tier: FitTier,
    pub verdict: String,
    pub role_score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader_score: Option<u8>,
    pub analyzed_at: DateTime<Utc>,
}
