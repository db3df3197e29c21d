use std::io::Read;

use serde::{Deserialize, Serialize};

use super::domain::{IdealProfile, MeasuredProfile, ProfileDraft};
use super::tier::FitTier;
use super::validation::{FitError, InvalidIdealRangeError, InvalidProfileError};
use super::{FitEngine, PairwiseFitResult};

/// One candidate row of a profile export.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateRow {
    pub owner_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub disc_d: Option<f64>,
    #[serde(default)]
    pub disc_i: Option<f64>,
    #[serde(default)]
    pub disc_s: Option<f64>,
    #[serde(default)]
    pub disc_c: Option<f64>,
    #[serde(default)]
    pub mbti_e_i: Option<f64>,
    #[serde(default)]
    pub mbti_s_n: Option<f64>,
    #[serde(default)]
    pub mbti_t_f: Option<f64>,
    #[serde(default)]
    pub mbti_j_p: Option<f64>,
    #[serde(default)]
    pub mbti_type: Option<String>,
}

impl CandidateRow {
    pub fn draft(&self) -> ProfileDraft {
        ProfileDraft {
            disc_d: self.disc_d,
            disc_i: self.disc_i,
            disc_s: self.disc_s,
            disc_c: self.disc_c,
            mbti_e_i: self.mbti_e_i,
            mbti_s_n: self.mbti_s_n,
            mbti_t_f: self.mbti_t_f,
            mbti_j_p: self.mbti_j_p,
            mbti_type: self.mbti_type.clone(),
        }
    }
}

pub fn read_candidates<R: Read>(reader: R) -> Result<Vec<CandidateRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<CandidateRow>()
        .collect::<Result<Vec<_>, _>>()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCandidate {
    pub rank: usize,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub consolidated_score: u8,
    pub tier: FitTier,
    pub role_score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader_score: Option<u8>,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRow {
    /// 1-based data row, excluding the header.
    pub row: usize,
    pub owner_id: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchRanking {
    pub ranked: Vec<RankedCandidate>,
    pub rejected: Vec<RejectedRow>,
}

/// Scores every row against `ideal` (and `leader`, when given) and orders by consolidated score.
pub fn rank_candidates(
    engine: &FitEngine,
    rows: &[CandidateRow],
    ideal: &IdealProfile,
    leader: Option<&MeasuredProfile>,
) -> Result<BatchRanking, BatchError> {
    ideal.validate()?;
    if let Some(leader) = leader {
        leader.validate().map_err(BatchError::Leader)?;
    }

    let mut ranking = BatchRanking::default();

    for (index, row) in rows.iter().enumerate() {
        let scored = row
            .draft()
            .normalize()
            .map_err(FitError::from)
            .and_then(|candidate| {
                let role_fit = engine.compute_range_fit(&candidate, ideal)?;
                let leader_fit: Option<PairwiseFitResult> = leader
                    .map(|leader| engine.compute_pairwise_fit(&candidate, leader))
                    .transpose()?;
                Ok((role_fit, leader_fit))
            });

        match scored {
            Ok((role_fit, leader_fit)) => {
                let consolidated = engine.compute_consolidated_fit(&role_fit, leader_fit.as_ref());
                ranking.ranked.push(RankedCandidate {
                    rank: 0,
                    owner_id: row.owner_id.clone(),
                    name: row.name.clone(),
                    consolidated_score: consolidated.consolidated_score,
                    tier: consolidated.tier,
                    role_score: consolidated.role_score,
                    leader_score: consolidated.leader_score,
                    recommendation: role_fit.recommendation,
                });
            }
            Err(err) => ranking.rejected.push(RejectedRow {
                row: index + 1,
                owner_id: row.owner_id.clone(),
                reason: err.to_string(),
            }),
        }
    }

    ranking.ranked.sort_by(|a, b| {
        b.consolidated_score
            .cmp(&a.consolidated_score)
            .then_with(|| a.owner_id.cmp(&b.owner_id))
    });
    for (position, candidate) in ranking.ranked.iter_mut().enumerate() {
        candidate.rank = position + 1;
    }

    Ok(ranking)
}

/// Reads a CSV export and ranks it in one step.
pub fn rank_csv<R: Read>(
    engine: &FitEngine,
    reader: R,
    ideal: &IdealProfile,
    leader: Option<&MeasuredProfile>,
) -> Result<BatchRanking, BatchError> {
    let rows = read_candidates(reader)?;
    rank_candidates(engine, &rows, ideal, leader)
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to read candidate export: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Ideal(#[from] InvalidIdealRangeError),
    #[error("leader profile is invalid: {0}")]
    Leader(InvalidProfileError),
}
