use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::fit::domain::{
    DimensionRange, DiscRanges, DiscScores, IdealProfile, MbtiRanges, MbtiScores, MeasuredProfile,
    TypeCode,
};
use crate::fit::repository::{
    DirectoryError, FitAnalysisRecord, FitResultStore, OwnerId, ProfileDirectory, RoleId,
    StoreError,
};
use crate::fit::service::FitAnalysisService;
use crate::fit::FitPolicy;

pub(super) fn profile(disc: [f64; 4], mbti: [f64; 4], type_code: Option<&str>) -> MeasuredProfile {
    MeasuredProfile {
        disc: DiscScores {
            dominance: disc[0],
            influence: disc[1],
            steadiness: disc[2],
            conformity: disc[3],
        },
        mbti: MbtiScores {
            extraversion_introversion: mbti[0],
            sensing_intuition: mbti[1],
            thinking_feeling: mbti[2],
            judging_perceiving: mbti[3],
        },
        type_code: type_code.and_then(TypeCode::parse),
    }
}

pub(super) fn candidate() -> MeasuredProfile {
    profile([65.0, 45.0, 55.0, 70.0], [40.0, 60.0, 70.0, 55.0], Some("ISTJ"))
}

pub(super) fn leader() -> MeasuredProfile {
    profile([75.0, 50.0, 60.0, 80.0], [60.0, 80.0, 90.0, 75.0], Some("ESTJ"))
}

pub(super) fn sales_role() -> IdealProfile {
    IdealProfile {
        role_name: "Vendedor".to_string(),
        description: None,
        disc: DiscRanges {
            dominance: DimensionRange::new(60.0, 90.0, 0.8),
            influence: DimensionRange::new(70.0, 100.0, 1.0),
            steadiness: DimensionRange::new(30.0, 60.0, 0.5),
            conformity: DimensionRange::new(20.0, 50.0, 0.4),
        },
        mbti: MbtiRanges {
            extraversion_introversion: DimensionRange::new(60.0, 100.0, 1.0),
            sensing_intuition: DimensionRange::new(40.0, 80.0, 0.6),
            thinking_feeling: DimensionRange::new(30.0, 70.0, 0.5),
            judging_perceiving: DimensionRange::new(40.0, 80.0, 0.6),
        },
        preferred_types: Some(
            ["ENFP", "ENTP", "ESFP", "ESTP"]
                .iter()
                .filter_map(|code| TypeCode::parse(code))
                .collect(),
        ),
    }
}

/// Profile sitting inside every band of [`sales_role`].
pub(super) fn ideal_salesperson(type_code: Option<&str>) -> MeasuredProfile {
    profile([75.0, 85.0, 45.0, 35.0], [80.0, 60.0, 50.0, 60.0], type_code)
}

pub(super) fn grid_profiles() -> Vec<MeasuredProfile> {
    let steps = [0.0, 17.0, 50.0, 83.0, 100.0];
    let mut profiles = Vec::new();
    for (i, a) in steps.iter().enumerate() {
        for b in steps.iter().skip(i) {
            profiles.push(profile([*a, *b, 100.0 - a, 50.0], [*b, *a, 25.0, 100.0 - b], None));
        }
    }
    profiles
}

#[derive(Default, Clone)]
pub(super) struct MemoryDirectory {
    pub(super) profiles: HashMap<OwnerId, MeasuredProfile>,
    pub(super) roles: HashMap<RoleId, IdealProfile>,
}

impl ProfileDirectory for MemoryDirectory {
    fn measured_profile(&self, owner: &OwnerId) -> Result<Option<MeasuredProfile>, DirectoryError> {
        Ok(self.profiles.get(owner).cloned())
    }

    fn ideal_profile(&self, role: &RoleId) -> Result<Option<IdealProfile>, DirectoryError> {
        Ok(self.roles.get(role).cloned())
    }
}

pub(super) struct UnavailableDirectory;

impl ProfileDirectory for UnavailableDirectory {
    fn measured_profile(&self, _owner: &OwnerId) -> Result<Option<MeasuredProfile>, DirectoryError> {
        Err(DirectoryError::Unavailable("timeout".to_string()))
    }

    fn ideal_profile(&self, _role: &RoleId) -> Result<Option<IdealProfile>, DirectoryError> {
        Err(DirectoryError::Unavailable("timeout".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    pub(super) records: Arc<Mutex<Vec<FitAnalysisRecord>>>,
}

impl FitResultStore for MemoryStore {
    fn persist(&self, record: FitAnalysisRecord) -> Result<(), StoreError> {
        self.records.lock().expect("store mutex").push(record);
        Ok(())
    }
}

impl MemoryStore {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("store mutex").len()
    }
}

pub(super) struct RejectingStore;

impl FitResultStore for RejectingStore {
    fn persist(&self, _record: FitAnalysisRecord) -> Result<(), StoreError> {
        Err(StoreError::Conflict)
    }
}

pub(super) fn directory() -> MemoryDirectory {
    let mut directory = MemoryDirectory::default();
    directory
        .profiles
        .insert(OwnerId("cand-1".to_string()), candidate());
    directory
        .profiles
        .insert(OwnerId("lead-1".to_string()), leader());
    directory
        .roles
        .insert(RoleId("role-sales".to_string()), sales_role());
    directory
}

pub(super) fn build_service() -> (
    FitAnalysisService<MemoryDirectory, MemoryStore>,
    MemoryStore,
) {
    let store = MemoryStore::default();
    let service = FitAnalysisService::new(
        Arc::new(directory()),
        Arc::new(store.clone()),
        FitPolicy::default(),
    )
    .expect("default policy is valid");
    (service, store)
}
