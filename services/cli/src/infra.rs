use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::{Arc, Mutex};
use talent_fit::error::AppError;
use talent_fit::fit::repository::{
    DirectoryError, FitAnalysisRecord, FitResultStore, OwnerId, ProfileDirectory, RoleId,
    StoreError,
};
use talent_fit::fit::templates::role_template;
use talent_fit::fit::{IdealProfile, MeasuredProfile, ProfileDraft};

/// JSON snapshot of profiles exported by the assessment collaborators.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct DirectorySnapshot {
    #[serde(default)]
    pub(crate) profiles: BTreeMap<String, ProfileDraft>,
    #[serde(default)]
    pub(crate) roles: BTreeMap<String, IdealProfile>,
}

#[derive(Debug, Default, Clone)]
pub(crate) struct InMemoryProfileDirectory {
    profiles: HashMap<OwnerId, MeasuredProfile>,
    roles: HashMap<RoleId, IdealProfile>,
}

impl InMemoryProfileDirectory {
    /// Normalizes every draft up front so invalid exports fail before any scoring.
    pub(crate) fn from_snapshot(snapshot: DirectorySnapshot) -> Result<Self, AppError> {
        let mut profiles = HashMap::with_capacity(snapshot.profiles.len());
        for (owner, draft) in snapshot.profiles {
            let profile = draft.normalize().map_err(|err| {
                AppError::InvalidInput(format!("profile '{owner}' is invalid: {err}"))
            })?;
            profiles.insert(OwnerId(owner), profile);
        }

        let roles = snapshot
            .roles
            .into_iter()
            .map(|(role, ideal)| (RoleId(role), ideal))
            .collect();

        Ok(Self { profiles, roles })
    }
}

impl ProfileDirectory for InMemoryProfileDirectory {
    fn measured_profile(&self, owner: &OwnerId) -> Result<Option<MeasuredProfile>, DirectoryError> {
        Ok(self.profiles.get(owner).cloned())
    }

    fn ideal_profile(&self, role: &RoleId) -> Result<Option<IdealProfile>, DirectoryError> {
        if let Some(ideal) = self.roles.get(role) {
            return Ok(Some(ideal.clone()));
        }
        Ok(role_template(&role.0))
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct InMemoryFitStore {
    records: Arc<Mutex<Vec<FitAnalysisRecord>>>,
}

impl FitResultStore for InMemoryFitStore {
    fn persist(&self, record: FitAnalysisRecord) -> Result<(), StoreError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("fit store mutex poisoned".to_string()))?;
        guard.push(record);
        Ok(())
    }
}

impl InMemoryFitStore {
    #[cfg(test)]
    pub(crate) fn records(&self) -> Vec<FitAnalysisRecord> {
        self.records
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let file = File::open(path)?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    Ok(value)
}

/// Loads a flat profile record and normalizes it.
pub(crate) fn load_profile(path: &Path) -> Result<MeasuredProfile, AppError> {
    let draft: ProfileDraft = read_json(path)?;
    Ok(draft.normalize()?)
}

/// Resolves an ideal profile from a built-in template key or a JSON file.
pub(crate) fn load_ideal(
    template: Option<&str>,
    path: Option<&Path>,
) -> Result<IdealProfile, AppError> {
    match (template, path) {
        (Some(key), _) => role_template(key)
            .ok_or_else(|| AppError::InvalidInput(format!("unknown role template '{key}'"))),
        (None, Some(path)) => read_json(path),
        (None, None) => Err(AppError::InvalidInput(
            "either --role-template or --ideal is required".to_string(),
        )),
    }
}
