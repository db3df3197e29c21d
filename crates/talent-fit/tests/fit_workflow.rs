//! End-to-end scenarios exercised through the public fit API: profile records
//! are normalized, scored against a built-in role and a leader, and stored.

mod common {
    use std::sync::{Arc, Mutex};

    use talent_fit::fit::repository::{
        DirectoryError, FitAnalysisRecord, FitResultStore, OwnerId, ProfileDirectory, RoleId,
        StoreError,
    };
    use talent_fit::fit::templates::role_template;
    use talent_fit::fit::{IdealProfile, MeasuredProfile, ProfileDraft};

    pub(super) fn draft(json: &str) -> ProfileDraft {
        serde_json::from_str(json).expect("profile record parses")
    }

    pub(super) fn analyst_candidate() -> MeasuredProfile {
        draft(
            r#"{"disc_d": 65, "disc_i": 45, "disc_s": 55, "disc_c": 70,
                "mbti_e_i": 40, "mbti_s_n": 60, "mbti_t_f": 70, "mbti_j_p": 55,
                "mbti_type": "ISTJ"}"#,
        )
        .normalize()
        .expect("candidate is valid")
    }

    pub(super) fn leader() -> MeasuredProfile {
        draft(
            r#"{"disc_d": 75, "disc_i": 50, "disc_s": 60, "disc_c": 80,
                "mbti_e_i": 60, "mbti_s_n": 80, "mbti_t_f": 90, "mbti_j_p": 75,
                "mbti_type": "ESTJ"}"#,
        )
        .normalize()
        .expect("leader is valid")
    }

    pub(super) struct TemplateDirectory {
        pub(super) candidate: MeasuredProfile,
        pub(super) leader: MeasuredProfile,
    }

    impl ProfileDirectory for TemplateDirectory {
        fn measured_profile(
            &self,
            owner: &OwnerId,
        ) -> Result<Option<MeasuredProfile>, DirectoryError> {
            Ok(match owner.0.as_str() {
                "cand-1" => Some(self.candidate.clone()),
                "lead-1" => Some(self.leader.clone()),
                _ => None,
            })
        }

        fn ideal_profile(&self, role: &RoleId) -> Result<Option<IdealProfile>, DirectoryError> {
            Ok(role_template(&role.0))
        }
    }

    #[derive(Default, Clone)]
    pub(super) struct RecordingStore {
        pub(super) records: Arc<Mutex<Vec<FitAnalysisRecord>>>,
    }

    impl FitResultStore for RecordingStore {
        fn persist(&self, record: FitAnalysisRecord) -> Result<(), StoreError> {
            self.records.lock().expect("store mutex").push(record);
            Ok(())
        }
    }
}

use std::sync::Arc;

use common::*;
use talent_fit::fit::report::{render_consolidated, render_range};
use talent_fit::fit::repository::{OwnerId, RoleId};
use talent_fit::fit::service::{FitAnalysisRequest, FitAnalysisService};
use talent_fit::fit::templates::role_template;
use talent_fit::fit::{
    compute_consolidated_fit, compute_pairwise_fit, compute_range_fit, Dimension, FitPolicy,
    FitTier, TypeCode, TypePreference,
};

#[test]
fn analyst_candidate_scores_against_builtin_template() {
    let ideal = role_template("analista").expect("template exists");

    let fit = compute_range_fit(&analyst_candidate(), &ideal).expect("fit computes");

    assert_eq!(fit.disc_score, 98);
    assert_eq!(fit.mbti_score_raw, 99);
    assert_eq!(fit.mbti_score, 100);
    assert_eq!(fit.overall_score, 99);
    assert_eq!(fit.tier, FitTier::High);
    assert!(matches!(fit.type_preference, TypePreference::Matched { .. }));
    assert!(fit
        .recommendation
        .starts_with("Excelente fit para Analista de Dados."));
}

#[test]
fn full_pipeline_blends_role_and_leader() {
    let ideal = role_template("analista").expect("template exists");
    let candidate = analyst_candidate();

    let role_fit = compute_range_fit(&candidate, &ideal).expect("role fit");
    let leader_fit = compute_pairwise_fit(&candidate, &leader()).expect("leader fit");
    let consolidated = compute_consolidated_fit(&role_fit, Some(&leader_fit));

    assert_eq!(leader_fit.overall_score, 88);
    // 99 * 0.6 + 88 * 0.4 = 94.6
    assert_eq!(consolidated.consolidated_score, 95);
    assert_eq!(consolidated.tier, FitTier::High);
    assert!(consolidated.verdict.starts_with("Fit excelente."));
}

#[test]
fn results_serialize_with_stable_keys() {
    let ideal = role_template("analista").expect("template exists");
    let fit = compute_range_fit(&analyst_candidate(), &ideal).expect("fit computes");

    let json = serde_json::to_value(&fit).expect("serializes");

    assert_eq!(json["tier"], "alto");
    assert_eq!(json["type_preference"]["status"], "matched");
    assert_eq!(json["type_preference"]["code"], "ISTJ");
    assert_eq!(json["dimension_details"][0]["dimension"], "disc_d");
    assert_eq!(json["dimension_details"][0]["range"], "30-60");
}

#[test]
fn text_reports_mark_bands_and_type() {
    let ideal = role_template("analista").expect("template exists");
    let fit = compute_range_fit(&analyst_candidate(), &ideal).expect("fit computes");

    let report = render_range(&fit);

    assert!(report.contains("Analista de Dados"));
    assert!(report.contains("Score Geral: 99/100 (ALTO)"));
    assert!(report.contains("Conformidade (C): 70 -> Range 70-100 ✅ (100%)"));
    assert!(report.contains("Dominância (D): 65 -> Range 30-60 ❌ (95%)"));
    assert!(report.contains("Match (ISTJ)"));

    let consolidated = compute_consolidated_fit(&fit, None);
    assert!(render_consolidated(&consolidated).contains("sem líder"));
}

#[test]
fn service_persists_complete_record() {
    let store = RecordingStore::default();
    let service = FitAnalysisService::new(
        Arc::new(TemplateDirectory {
            candidate: analyst_candidate(),
            leader: leader(),
        }),
        Arc::new(store.clone()),
        FitPolicy::default(),
    )
    .expect("default policy is valid");

    let record = service
        .analyze(&FitAnalysisRequest {
            candidate_id: OwnerId("cand-1".to_string()),
            role_id: RoleId("analista".to_string()),
            leader_id: Some(OwnerId("lead-1".to_string())),
        })
        .expect("analysis succeeds");

    assert_eq!(record.consolidated.consolidated_score, 95);
    let stored = store.records.lock().expect("store mutex");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], record);
}

#[test]
fn derived_profile_helpers() {
    let candidate = analyst_candidate();

    assert_eq!(candidate.disc.primary_factor(), Dimension::Conformity);
    assert_eq!(TypeCode::from_scores(&candidate.mbti).as_str(), "ISTJ");
}
