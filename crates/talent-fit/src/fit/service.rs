use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::policy::{FitPolicy, PolicyError};
use super::repository::{
    DirectoryError, FitAnalysisRecord, FitResultStore, OwnerId, ProfileDirectory, RoleId,
    StoreError,
};
use super::validation::{FitError, InvalidProfileError};
use super::FitEngine;

/// Candidate, role, and optional leader to analyze together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitAnalysisRequest {
    pub candidate_id: OwnerId,
    pub role_id: RoleId,
    #[serde(default)]
    pub leader_id: Option<OwnerId>,
}

/// Service composing the profile directory, fit engine, and result store.
pub struct FitAnalysisService<D, S> {
    directory: Arc<D>,
    store: Arc<S>,
    engine: Arc<FitEngine>,
}

impl<D, S> FitAnalysisService<D, S>
where
    D: ProfileDirectory + 'static,
    S: FitResultStore + 'static,
{
    pub fn new(
        directory: Arc<D>,
        store: Arc<S>,
        policy: FitPolicy,
    ) -> Result<Self, PolicyError> {
        Ok(Self {
            directory,
            store,
            engine: Arc::new(FitEngine::new(policy)?),
        })
    }

    pub fn engine(&self) -> &FitEngine {
        &self.engine
    }

    /// Score a candidate against a role (and leader, when known) and persist the record.
    pub fn analyze(
        &self,
        request: &FitAnalysisRequest,
    ) -> Result<FitAnalysisRecord, FitAnalysisError> {
        let candidate = self
            .directory
            .measured_profile(&request.candidate_id)?
            .ok_or_else(|| FitAnalysisError::CandidateProfileMissing(request.candidate_id.clone()))?;

        let ideal = self
            .directory
            .ideal_profile(&request.role_id)?
            .ok_or_else(|| FitAnalysisError::IdealProfileMissing(request.role_id.clone()))?;

        let role_fit = self.engine.compute_range_fit(&candidate, &ideal)?;
        debug!(
            candidate = %request.candidate_id,
            role = %request.role_id,
            score = role_fit.overall_score,
            "computed role fit"
        );

        let mut leader_id = None;
        let mut leader_fit = None;
        if let Some(id) = &request.leader_id {
            match self.directory.measured_profile(id)? {
                Some(leader) => {
                    let fit = self
                        .engine
                        .compute_pairwise_fit(&candidate, &leader)
                        .map_err(FitAnalysisError::LeaderProfile)?;
                    leader_id = Some(id.clone());
                    leader_fit = Some(fit);
                }
                None => {
                    warn!(leader = %id, "leader has no measured profile; skipping leader fit");
                }
            }
        }

        let consolidated = self
            .engine
            .compute_consolidated_fit(&role_fit, leader_fit.as_ref());

        let record = FitAnalysisRecord {
            candidate_id: request.candidate_id.clone(),
            role_id: request.role_id.clone(),
            leader_id,
            role_fit,
            leader_fit,
            consolidated,
            analyzed_at: Utc::now(),
        };

        self.store.persist(record.clone())?;
        info!(
            candidate = %record.candidate_id,
            role = %record.role_id,
            score = record.consolidated.consolidated_score,
            tier = %record.consolidated.tier,
            "fit analysis stored"
        );

        Ok(record)
    }
}

/// Error raised by the fit analysis service.
#[derive(Debug, thiserror::Error)]
pub enum FitAnalysisError {
    #[error("candidate {0} has not completed the behavioral assessments")]
    CandidateProfileMissing(OwnerId),
    #[error("role {0} has no ideal profile")]
    IdealProfileMissing(RoleId),
    #[error("leader profile is invalid: {0}")]
    LeaderProfile(InvalidProfileError),
    #[error(transparent)]
    Fit(#[from] FitError),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
