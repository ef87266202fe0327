//! Completion tracking against a generated plan.
//!
//! The planner itself is stateless. Progress is a separate set of completed
//! task ids that survives regeneration as long as the ids still exist.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::locale::progress_message;
use crate::plan::GeneratedPlan;
use crate::profile::StudentProfile;

/// Set of completed task ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress {
    completed: BTreeSet<String>,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the completion state of `id`. Returns the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.completed.remove(id) {
            false
        } else {
            self.completed.insert(id.to_owned());
            true
        }
    }

    pub fn reset(&mut self) {
        self.completed.clear();
    }

    pub fn is_done(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.completed.iter().map(String::as_str)
    }

    /// Drop ids that no longer appear in `plan`. Returns how many were dropped.
    pub fn retain_known(&mut self, plan: &GeneratedPlan) -> usize {
        let before = self.completed.len();
        self.completed.retain(|id| plan.find_task(id).is_some());
        before - self.completed.len()
    }
}

impl FromIterator<String> for Progress {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            completed: iter.into_iter().collect(),
        }
    }
}

/// Snapshot of how far along the student is.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReport {
    pub completed: usize,
    pub total: usize,
    /// Average daily load exceeds the hours the student said they have.
    pub overloaded: bool,
    /// Plan day matching today, if today is inside the plan.
    pub today_index: Option<usize>,
}

impl ProgressReport {
    pub fn from_plan(
        plan: &GeneratedPlan,
        progress: &Progress,
        profile: &StudentProfile,
        today: NaiveDate,
    ) -> Self {
        let completed = plan.tasks().filter(|t| progress.is_done(&t.id)).count();
        Self {
            completed,
            total: plan.summary.total_tasks,
            overloaded: plan.summary.tasks_per_day as f64 > profile.daily_hours.ceil(),
            today_index: plan.day_index(today),
        }
    }

    /// Completed fraction in [0, 1]; 0 for an empty plan.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }

    pub fn message(&self, profile: &StudentProfile) -> String {
        progress_message(self.completed, self.total, profile.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::plan::generate_study_plan_with;
    use crate::profile::{Language, PlanSettings, SubjectDetails};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn profile(daily_hours: f64) -> StudentProfile {
        StudentProfile {
            grade: "G".into(),
            exam_date: "2026-10-18".into(),
            daily_hours,
            language: Language::En,
            subjects: vec![SubjectDetails {
                id: "m".into(),
                name: "Math".into(),
                topics: vec!["A".into(), "B".into(), "C".into()],
            }],
        }
    }

    fn plan(p: &StudentProfile) -> GeneratedPlan {
        generate_study_plan_with(p, &PlanSettings::default(), &FixedClock(today()))
    }

    #[test]
    fn toggle_flips_state() {
        let mut progress = Progress::new();
        assert!(progress.toggle("study-0-0-d0"));
        assert!(progress.is_done("study-0-0-d0"));
        assert!(!progress.toggle("study-0-0-d0"));
        assert_eq!(progress.completed_count(), 0);
    }

    #[test]
    fn retain_known_drops_stale_ids() {
        let p = profile(1.0);
        let plan = plan(&p);
        let mut progress: Progress = ["study-0-0-d0".to_owned(), "study-9-9-d9".to_owned()]
            .into_iter()
            .collect();
        assert_eq!(progress.retain_known(&plan), 1);
        assert_eq!(progress.iter().collect::<Vec<_>>(), vec!["study-0-0-d0"]);
    }

    #[test]
    fn report_counts_completed_tasks() {
        let p = profile(1.0);
        let plan = plan(&p);
        let mut progress = Progress::new();
        progress.toggle("study-0-0-d0");
        progress.toggle("study-0-1-d1");

        let report = ProgressReport::from_plan(&plan, &progress, &p, today());
        assert_eq!(report.completed, 2);
        assert_eq!(report.total, plan.summary.total_tasks);
        assert_eq!(report.today_index, Some(0));
        assert!(!report.overloaded);
        assert!(report.ratio() > 0.0 && report.ratio() < 1.0);
        assert_eq!(
            report.message(&p),
            format!("Nice! You finished 2 out of {} tasks.", report.total)
        );
    }

    #[test]
    fn today_outside_plan_has_no_index() {
        let p = profile(1.0);
        let plan = plan(&p);
        let later = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
        let report = ProgressReport::from_plan(&plan, &Progress::new(), &p, later);
        assert_eq!(report.today_index, None);
    }

    #[test]
    fn empty_plan_ratio_is_zero() {
        let report = ProgressReport {
            completed: 0,
            total: 0,
            overloaded: false,
            today_index: None,
        };
        assert_eq!(report.ratio(), 0.0);
    }
}
