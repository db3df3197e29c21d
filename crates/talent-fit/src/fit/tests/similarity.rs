use super::common::*;
use crate::fit::domain::Dimension;
use crate::fit::{compute_pairwise_fit, FitEngine, FitTier, InvalidProfileError};

#[test]
fn worked_example_scores_candidate_against_leader() {
    let fit = compute_pairwise_fit(&candidate(), &leader()).expect("valid profiles");

    let disc: Vec<u8> = fit
        .dimension_details
        .iter()
        .filter(|detail| Dimension::DISC.contains(&detail.dimension))
        .map(|detail| detail.score)
        .collect();
    assert_eq!(disc, vec![90, 95, 95, 90]);
    // mean 92.5 rounds half up
    assert_eq!(fit.disc_score, 93);
    assert_eq!(fit.mbti_score, 80);
    assert_eq!(fit.overall_score, 88);
    assert_eq!(fit.tier, FitTier::High);
    assert_eq!(
        fit.recommendation,
        "Excelente compatibilidade comportamental. Perfis muito alinhados."
    );
}

#[test]
fn details_carry_both_values() {
    let fit = compute_pairwise_fit(&candidate(), &leader()).expect("valid profiles");

    assert_eq!(fit.dimension_details.len(), 8);
    let dominance = &fit.dimension_details[0];
    assert_eq!(dominance.dimension, Dimension::Dominance);
    assert_eq!(dominance.value, 65.0);
    assert_eq!(dominance.counterpart, 75.0);
}

#[test]
fn self_fit_is_perfect() {
    for profile in grid_profiles() {
        let fit = compute_pairwise_fit(&profile, &profile).expect("valid profile");
        assert_eq!(fit.overall_score, 100);
        assert_eq!(fit.tier, FitTier::High);
    }
}

#[test]
fn pairwise_fit_is_symmetric() {
    let profiles = grid_profiles();
    for left in &profiles {
        for right in &profiles {
            let forward = compute_pairwise_fit(left, right).expect("valid");
            let backward = compute_pairwise_fit(right, left).expect("valid");
            assert_eq!(forward.overall_score, backward.overall_score);
            assert_eq!(forward.disc_score, backward.disc_score);
            assert_eq!(forward.mbti_score, backward.mbti_score);
        }
    }
}

#[test]
fn opposite_profiles_fall_to_low_tier() {
    let low = profile([0.0; 4], [0.0; 4], None);
    let high = profile([100.0; 4], [100.0; 4], None);

    let fit = compute_pairwise_fit(&low, &high).expect("valid profiles");

    assert_eq!(fit.overall_score, 0);
    assert_eq!(fit.tier, FitTier::Low);
    assert!(fit.recommendation.starts_with("Compatibilidade moderada"));
}

#[test]
fn rejects_out_of_scale_values_in_either_profile() {
    let engine = FitEngine::default();
    let mut broken = leader();
    broken.mbti.thinking_feeling = 130.0;

    let err = engine
        .compute_pairwise_fit(&candidate(), &broken)
        .expect_err("leader is invalid");
    assert_eq!(
        err,
        InvalidProfileError::OutOfRange {
            dimension: Dimension::ThinkingFeeling,
            value: 130.0
        }
    );

    let mut broken = candidate();
    broken.disc.dominance = -1.0;
    assert!(engine.compute_pairwise_fit(&broken, &leader()).is_err());
}

#[test]
fn repeated_calls_are_identical() {
    let engine = FitEngine::default();
    let first = engine
        .compute_pairwise_fit(&candidate(), &leader())
        .expect("valid");
    let second = engine
        .compute_pairwise_fit(&candidate(), &leader())
        .expect("valid");
    assert_eq!(first, second);
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(FitEngine::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || {
                engine
                    .compute_pairwise_fit(&candidate(), &leader())
                    .expect("valid")
                    .overall_score
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread completes"), 88);
    }
}
