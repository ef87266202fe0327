//! Study-plan generation for a single student.
//!
//! Given an exam date, daily study hours and a list of subjects with topics,
//! [`plan::generate_study_plan`] produces a day-by-day schedule of one-hour
//! tasks with weekly recaps and a summary. Everything here is pure: no
//! filesystem, no network, and the only ambient input is "today", which is
//! read through a [`clock::Clock`].

pub mod clock;
pub mod locale;
pub mod plan;
pub mod profile;
pub mod progress;

pub use clock::{Clock, FixedClock, SystemClock};
pub use plan::{
    GeneratedPlan, PlanDay, PlanSummary, PlanTask, TaskKind, generate_study_plan,
    generate_study_plan_with,
};
pub use profile::{
    Language, PlanMode, PlanSettings, ProfileParseError, StudentProfile, SubjectDetails,
    parse_profile_toml,
};
pub use progress::{Progress, ProgressReport};
