use super::aggregation::{mean_score, round_score};
use super::domain::{Dimension, DimensionGroup, MeasuredProfile};
use super::policy::FitPolicy;
use super::recommendation::{recommend, RecommendationContext};
use super::{DimensionMatch, PairwiseFitResult};

/// Closeness of two values on the 0-100 scale.
pub fn dimension_similarity(left: f64, right: f64) -> f64 {
    100.0 - (left - right).abs()
}

/// Scores two already validated profiles against each other.
pub(crate) fn score_pairwise(
    left: &MeasuredProfile,
    right: &MeasuredProfile,
    policy: &FitPolicy,
) -> PairwiseFitResult {
    let group_scores = |group: DimensionGroup| -> Vec<f64> {
        group
            .dimensions()
            .iter()
            .map(|dimension| dimension_similarity(left.value(*dimension), right.value(*dimension)))
            .collect()
    };

    let disc_score = mean_score(&group_scores(DimensionGroup::Disc));
    let mbti_score = mean_score(&group_scores(DimensionGroup::Mbti));
    let overall_score = policy.composite.blend(disc_score, mbti_score);
    let tier = policy.tiers.classify(overall_score);

    let dimension_details = Dimension::ALL
        .iter()
        .map(|dimension| {
            let value = left.value(*dimension);
            let counterpart = right.value(*dimension);
            DimensionMatch {
                dimension: *dimension,
                score: round_score(dimension_similarity(value, counterpart)),
                value,
                counterpart,
            }
        })
        .collect();

    PairwiseFitResult {
        overall_score,
        disc_score,
        mbti_score,
        tier,
        dimension_details,
        recommendation: recommend(tier, &RecommendationContext::default()),
    }
}
