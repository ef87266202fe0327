//! JSON state file: the stored profile, plan mode and completed tasks.
//!
//! The plan itself is never persisted. Every command regenerates it from the
//! stored profile and mode, so the file stays small and a planner change
//! takes effect on the next run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use studyplan_core::{
    Clock, GeneratedPlan, PlanMode, Progress, StudentProfile, generate_study_plan_with,
};

/// Everything persisted between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredData {
    pub profile: StudentProfile,
    #[serde(default)]
    pub plan_mode: PlanMode,
    #[serde(default)]
    pub completed: Progress,
}

impl StoredData {
    pub fn new(profile: StudentProfile, plan_mode: PlanMode) -> Self {
        Self {
            profile,
            plan_mode,
            completed: Progress::new(),
        }
    }

    /// Regenerate the plan for the stored profile and mode.
    pub fn plan(&self, clock: &dyn Clock) -> GeneratedPlan {
        generate_study_plan_with(&self.profile, &self.plan_mode.settings(), clock)
    }
}

/// Reads and writes [`StoredData`] at a fixed path.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load stored data. `None` when nothing has been stored yet.
    pub fn load(&self) -> Result<Option<StoredData>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read state file at {}", self.path.display()))?;
        let data: StoredData = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse state file at {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), completed = data.completed.completed_count(), "state loaded");
        Ok(Some(data))
    }

    /// Write stored data, replacing the file via a temp file and rename.
    pub fn save(&self, data: &StoredData) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create state directory {}", dir.display()))?;
        }
        let contents = serde_json::to_string_pretty(data).context("failed to serialize state")?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, contents)
            .with_context(|| format!("failed to write state file at {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("failed to replace state file at {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "state saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use studyplan_core::{FixedClock, Language, SubjectDetails};

    use super::*;

    fn sample() -> StoredData {
        StoredData::new(
            StudentProfile {
                grade: "Grade 8".into(),
                exam_date: "2026-10-20".into(),
                daily_hours: 2.0,
                language: Language::En,
                subjects: vec![SubjectDetails {
                    id: "subject-1".into(),
                    name: "Math".into(),
                    topics: vec!["Fractions".into()],
                }],
            },
            PlanMode::Gentle,
        )
    }

    #[test]
    fn missing_file_loads_as_none() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = StateStore::new(tmp.path().join("state.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = StateStore::new(tmp.path().join("nested").join("state.json"));
        let mut data = sample();
        data.completed.toggle("study-0-0-d0");

        store.save(&data).unwrap();
        assert_eq!(store.load().unwrap(), Some(data));
        assert!(!tmp.path().join("nested").join("state.json.tmp").exists());
    }

    #[test]
    fn stored_json_uses_camel_case_keys() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = StateStore::new(tmp.path().join("state.json"));
        store.save(&sample()).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"planMode\": \"gentle\""));
        assert!(raw.contains("\"examDate\""));
        assert!(raw.contains("\"completed\": []"));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("state.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = StateStore::new(&path).load().unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse state file"));
    }

    #[test]
    fn plan_uses_stored_mode() {
        let data = sample();
        let today = chrono::NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let plan = data.plan(&FixedClock(today));
        // Gentle: floor(2 * 0.75) = 1 task per day.
        assert_eq!(plan.days[0].tasks.len(), 1);
        assert_eq!(plan.days.len(), 5);
    }
}
