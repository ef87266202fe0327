//! Plan generation: task derivation, day allocation, revision injection and
//! summary statistics.
//!
//! The four stages run strictly in order, each on the previous stage's output:
//!
//! 1. [`derive::derive_study_tasks`] flattens subjects into one-hour tasks.
//! 2. [`allocate::allocate_tasks_to_days`] lays out days from today to the
//!    exam and packs tasks greedily under the daily capacity, appending days
//!    past the exam when the window is too short.
//! 3. [`revision::inject_weekly_revision`] adds a weekly recap on the last
//!    day of each week and on the final plan day.
//! 4. [`summary::build_summary`] counts tasks and days.

pub mod allocate;
pub mod derive;
pub mod revision;
pub mod summary;

use std::fmt;

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::profile::{PlanSettings, StudentProfile};

pub use allocate::{allocate_tasks_to_days, daily_capacity, resolve_exam_date};
pub use derive::derive_study_tasks;
pub use revision::inject_weekly_revision;
pub use summary::build_summary;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Kind of scheduled work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Study,
    Revision,
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Study => "study",
            Self::Revision => "revision",
        };
        f.write_str(s)
    }
}

/// One schedulable unit of work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanTask {
    /// Unique within a generated plan.
    pub id: String,
    pub subject: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: TaskKind,
    pub estimated_hours: f64,
    /// Zero-based week of the day the task landed on.
    pub week_index: usize,
}

/// One calendar day of the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDay {
    pub date: NaiveDate,
    pub readable_date: String,
    pub focus_message: String,
    pub tasks: Vec<PlanTask>,
}

impl PlanDay {
    /// Local midnight at the start of this day.
    ///
    /// Falls back to the UTC reading of midnight when the local zone skips
    /// that instant.
    pub fn starts_at(&self) -> DateTime<Local> {
        let midnight = self.date.and_time(NaiveTime::MIN);
        Local
            .from_local_datetime(&midnight)
            .earliest()
            .unwrap_or_else(|| Local.from_utc_datetime(&midnight))
    }

    /// Whether any task on this day is a study task.
    pub fn has_study_task(&self) -> bool {
        self.tasks.iter().any(|t| t.kind == TaskKind::Study)
    }
}

/// Aggregate numbers for a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub total_tasks: usize,
    pub total_days: usize,
    pub tasks_per_day: usize,
    /// Days from today to the last plan day, never negative.
    pub exam_countdown: i64,
}

/// A complete schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    pub days: Vec<PlanDay>,
    pub summary: PlanSummary,
}

impl GeneratedPlan {
    /// Iterate over every scheduled task in day order.
    pub fn tasks(&self) -> impl Iterator<Item = &PlanTask> {
        self.days.iter().flat_map(|d| d.tasks.iter())
    }

    /// Index of the day whose date is `date`, if it is part of the plan.
    pub fn day_index(&self, date: NaiveDate) -> Option<usize> {
        self.days.iter().position(|d| d.date == date)
    }

    /// Look up a task by id.
    pub fn find_task(&self, id: &str) -> Option<&PlanTask> {
        self.tasks().find(|t| t.id == id)
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Generate a plan using the local wall clock for "today".
pub fn generate_study_plan(profile: &StudentProfile, settings: &PlanSettings) -> GeneratedPlan {
    generate_study_plan_with(profile, settings, &SystemClock)
}

/// Generate a plan, reading "today" from `clock` exactly once.
///
/// Never fails: bad dates, empty subject lists and tiny capacities are all
/// coerced into a valid, possibly empty, plan of at least one day.
pub fn generate_study_plan_with(
    profile: &StudentProfile,
    settings: &PlanSettings,
    clock: &dyn Clock,
) -> GeneratedPlan {
    let today = clock.today();
    let tasks = derive_study_tasks(&profile.subjects);
    let mut days = allocate_tasks_to_days(&tasks, profile, settings, today);
    inject_weekly_revision(&mut days, profile.language);
    let summary = build_summary(&days, today);

    tracing::debug!(
        total_tasks = summary.total_tasks,
        total_days = summary.total_days,
        exam_countdown = summary.exam_countdown,
        "study plan generated"
    );

    GeneratedPlan { days, summary }
}
