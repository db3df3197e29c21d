use serde::{Deserialize, Serialize};

use super::aggregation::{round_score, weighted_score};
use super::domain::{
    Dimension, DimensionGroup, DimensionRange, IdealProfile, MeasuredProfile, TypeCode,
};
use super::policy::FitPolicy;
use super::recommendation::{recommend, RecommendationContext};
use super::validation::InvalidIdealRangeError;
use super::{DimensionScore, RangeFitResult};

/// 100 inside the band, minus one point per unit of distance outside it, floored at 0.
pub fn score_against_range(value: f64, range: &DimensionRange) -> f64 {
    if range.contains(value) {
        return 100.0;
    }

    let distance = if value < range.min {
        range.min - value
    } else {
        value - range.max
    };
    (100.0 - distance.min(100.0)).max(0.0)
}

/// How the candidate's type code related to the role's preferred types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TypePreference {
    /// Candidate has no type code or the role defines no preferred list.
    NotEvaluated,
    Matched { code: TypeCode },
    Mismatched { code: TypeCode },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAdjustment {
    pub score: u8,
    pub preference: TypePreference,
}

/// Applies the preferred-type bonus to a weighted MBTI score, capped at 100.
pub fn apply_type_preference(
    raw_score: u8,
    candidate_type: Option<&TypeCode>,
    ideal: &IdealProfile,
    bonus: u8,
) -> TypeAdjustment {
    match candidate_type {
        Some(code) if ideal.prefers(code) => TypeAdjustment {
            score: raw_score.saturating_add(bonus).min(100),
            preference: TypePreference::Matched { code: code.clone() },
        },
        Some(code) if ideal.preferred_types.is_some() => TypeAdjustment {
            score: raw_score,
            preference: TypePreference::Mismatched { code: code.clone() },
        },
        _ => TypeAdjustment {
            score: raw_score,
            preference: TypePreference::NotEvaluated,
        },
    }
}

fn group_score(
    candidate: &MeasuredProfile,
    ideal: &IdealProfile,
    group: DimensionGroup,
) -> Result<u8, InvalidIdealRangeError> {
    let pairs: Vec<(f64, f64)> = group
        .dimensions()
        .iter()
        .map(|dimension| {
            let range = ideal.range(*dimension);
            (score_against_range(candidate.value(*dimension), range), range.weight)
        })
        .collect();

    weighted_score(&pairs).ok_or(InvalidIdealRangeError::ZeroGroupWeight { group })
}

/// Scores a validated candidate against a validated ideal profile.
pub(crate) fn score_range(
    candidate: &MeasuredProfile,
    ideal: &IdealProfile,
    policy: &FitPolicy,
) -> Result<RangeFitResult, InvalidIdealRangeError> {
    let disc_score = group_score(candidate, ideal, DimensionGroup::Disc)?;
    let mbti_score_raw = group_score(candidate, ideal, DimensionGroup::Mbti)?;

    let adjustment = apply_type_preference(
        mbti_score_raw,
        candidate.type_code.as_ref(),
        ideal,
        policy.type_match_bonus,
    );

    let overall_score = policy.composite.blend(disc_score, adjustment.score);
    let tier = policy.tiers.classify(overall_score);

    let mut context = RecommendationContext::for_role(ideal.role_name.clone());
    if let TypePreference::Mismatched { code } = &adjustment.preference {
        context = context.with_type_mismatch(code.clone());
    }

    let dimension_details = Dimension::ALL
        .iter()
        .map(|dimension| {
            let range = ideal.range(*dimension);
            let value = candidate.value(*dimension);
            DimensionScore {
                dimension: *dimension,
                score: round_score(score_against_range(value, range)),
                within_range: range.contains(value),
                value,
                range: range.describe(),
            }
        })
        .collect();

    Ok(RangeFitResult {
        role_name: ideal.role_name.clone(),
        overall_score,
        disc_score,
        mbti_score: adjustment.score,
        mbti_score_raw,
        type_preference: adjustment.preference,
        tier,
        dimension_details,
        recommendation: recommend(tier, &context),
    })
}
