//! Shared fixtures for studyplan integration tests.
//!
//! Every fixture is pinned to [`TODAY`] so generated plans are reproducible
//! regardless of when the tests run.

use chrono::{Days, NaiveDate};

use studyplan_core::{FixedClock, Language, StudentProfile, SubjectDetails};

/// The date every fixture treats as "today": 2026-10-16, a Friday.
pub const TODAY: (i32, u32, u32) = (2026, 10, 16);

/// [`TODAY`] as a date.
pub fn today() -> NaiveDate {
    let (y, m, d) = TODAY;
    NaiveDate::from_ymd_opt(y, m, d).expect("TODAY is a valid date")
}

/// A clock fixed at [`TODAY`].
pub fn fixed_clock() -> FixedClock {
    FixedClock(today())
}

/// `YYYY-MM-DD` for the date `days` after [`TODAY`].
pub fn days_from_today(days: u64) -> String {
    (today() + Days::new(days)).format("%Y-%m-%d").to_string()
}

/// A subject whose id is derived from its name.
pub fn subject(name: &str, topics: &[&str]) -> SubjectDetails {
    SubjectDetails {
        id: format!("subject-{}", name.to_lowercase()),
        name: name.to_owned(),
        topics: topics.iter().map(|t| (*t).to_owned()).collect(),
    }
}

/// A subject with `count` numbered topics ("<name> 1", "<name> 2", ...).
pub fn numbered_subject(name: &str, count: usize) -> SubjectDetails {
    SubjectDetails {
        id: format!("subject-{}", name.to_lowercase()),
        name: name.to_owned(),
        topics: (1..=count).map(|i| format!("{name} {i}")).collect(),
    }
}

/// Builder for [`StudentProfile`] with sensible defaults.
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    profile: StudentProfile,
}

impl Default for ProfileBuilder {
    fn default() -> Self {
        Self {
            profile: StudentProfile {
                grade: "Grade 10".to_owned(),
                exam_date: String::new(),
                daily_hours: 3.0,
                language: Language::En,
                subjects: Vec::new(),
            },
        }
    }
}

impl ProfileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exam `days` after [`TODAY`].
    pub fn exam_in(mut self, days: u64) -> Self {
        self.profile.exam_date = days_from_today(days);
        self
    }

    pub fn exam_date(mut self, raw: &str) -> Self {
        self.profile.exam_date = raw.to_owned();
        self
    }

    pub fn daily_hours(mut self, hours: f64) -> Self {
        self.profile.daily_hours = hours;
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.profile.language = language;
        self
    }

    pub fn subject(mut self, subject: SubjectDetails) -> Self {
        self.profile.subjects.push(subject);
        self
    }

    pub fn build(self) -> StudentProfile {
        self.profile
    }
}
