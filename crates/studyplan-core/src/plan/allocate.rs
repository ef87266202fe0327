//! Day allocation: lay out the calendar and pack tasks into it.
//!
//! Days run from today through the exam date inclusive. Tasks are taken in
//! order and poured into each day until its capacity is used up. If tasks
//! remain after the last day, more days are appended after it, so no task is
//! ever dropped.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};

use super::{PlanDay, PlanTask};
use crate::locale::{focus_message, format_readable_date};
use crate::profile::{Language, PlanSettings, StudentProfile};

/// Remaining capacity below which a day counts as full.
const MIN_REMAINING_HOURS: f64 = 0.5;

/// Parse an exam date string. Accepts `YYYY-MM-DD`, RFC 3339 instants and
/// `YYYY-MM-DDTHH:MM[:SS]` local datetimes.
pub fn parse_exam_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&chrono::Local).date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

/// Exam date to plan towards: the parsed date, or `today` when the string is
/// empty, unparsable, or in the past.
pub fn resolve_exam_date(raw: &str, today: NaiveDate) -> NaiveDate {
    match parse_exam_date(raw) {
        Some(date) if date >= today => date,
        _ => today,
    }
}

/// Task-hours one day can hold. Never below 1, so every day makes progress.
pub fn daily_capacity(daily_hours: f64, lighten_factor: f64) -> f64 {
    (daily_hours * lighten_factor).floor().max(1.0)
}

/// Build the day list and pack `tasks` into it.
///
/// Each placed task gets the id suffix `-d<dayIndex>` and the week index of
/// its day. A day's focus message is fixed when the day is created and names
/// the subject of the next unplaced task at that moment.
pub fn allocate_tasks_to_days(
    tasks: &[PlanTask],
    profile: &StudentProfile,
    settings: &PlanSettings,
    today: NaiveDate,
) -> Vec<PlanDay> {
    let language = profile.language;
    let exam = resolve_exam_date(&profile.exam_date, today);
    let initial_days = (exam - today).num_days().max(1) as usize + 1;
    let capacity = daily_capacity(profile.daily_hours, settings.lighten_factor);

    tracing::debug!(%exam, initial_days, capacity, tasks = tasks.len(), "allocating tasks");

    let mut pointer = 0usize;
    let mut days: Vec<PlanDay> = (0..initial_days)
        .map(|offset| {
            let date = today + Days::new(offset as u64);
            new_day(date, tasks.get(pointer), language)
        })
        .collect();

    let mut day_index = 0usize;
    while pointer < tasks.len() {
        if day_index >= days.len() {
            // Overflow: the window cannot hold everything at this capacity.
            let last = days.last().map_or(today, |d| d.date);
            let date = last + Days::new(1);
            tracing::debug!(day_index, %date, remaining = tasks.len() - pointer, "extending plan past exam date");
            days.push(new_day(date, tasks.get(pointer), language));
        }

        let day = &mut days[day_index];
        let mut remaining = capacity;
        while remaining >= MIN_REMAINING_HOURS && pointer < tasks.len() {
            let task = &tasks[pointer];
            let placed = PlanTask {
                id: format!("{}-d{day_index}", task.id),
                week_index: day_index / 7,
                ..task.clone()
            };
            remaining -= placed.estimated_hours;
            day.tasks.push(placed);
            pointer += 1;
        }

        day_index += 1;
    }

    days
}

fn new_day(date: NaiveDate, pending: Option<&PlanTask>, language: Language) -> PlanDay {
    PlanDay {
        date,
        readable_date: format_readable_date(date, language),
        focus_message: focus_message(
            pending.map(|t| t.subject.as_str()).filter(|s| !s.is_empty()),
            language,
        ),
        tasks: Vec::new(),
    }
}
