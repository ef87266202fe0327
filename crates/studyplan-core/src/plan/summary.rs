//! Summary statistics over a finished day list.

use chrono::NaiveDate;

use super::{PlanDay, PlanSummary};

/// Count tasks and days and compute the countdown to the last plan day.
///
/// `tasks_per_day` is rounded half away from zero. The countdown is measured
/// to the last day of the (possibly extended) plan, not the exam date.
pub fn build_summary(days: &[PlanDay], today: NaiveDate) -> PlanSummary {
    let total_tasks: usize = days.iter().map(|d| d.tasks.len()).sum();
    let total_days = days.len();
    let tasks_per_day = if total_days > 0 {
        (total_tasks as f64 / total_days as f64).round() as usize
    } else {
        total_tasks
    };
    let exam_countdown = days
        .last()
        .map_or(0, |last| (last.date - today).num_days().max(0));

    PlanSummary {
        total_tasks,
        total_days,
        tasks_per_day,
        exam_countdown,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Days;

    use super::*;
    use crate::plan::{PlanTask, TaskKind};

    fn day(date: NaiveDate, n: usize) -> PlanDay {
        PlanDay {
            date,
            readable_date: String::new(),
            focus_message: String::new(),
            tasks: (0..n)
                .map(|i| PlanTask {
                    id: format!("t{i}"),
                    subject: "S".into(),
                    title: "T".into(),
                    kind: TaskKind::Study,
                    estimated_hours: 1.0,
                    week_index: 0,
                })
                .collect(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn counts_and_rounds() {
        let days = vec![day(today(), 3), day(today() + Days::new(1), 2)];
        let summary = build_summary(&days, today());
        assert_eq!(summary.total_tasks, 5);
        assert_eq!(summary.total_days, 2);
        // 2.5 rounds up.
        assert_eq!(summary.tasks_per_day, 3);
        assert_eq!(summary.exam_countdown, 1);
    }

    #[test]
    fn zero_days_degenerates_gracefully() {
        let summary = build_summary(&[], today());
        assert_eq!(summary.total_tasks, 0);
        assert_eq!(summary.total_days, 0);
        assert_eq!(summary.tasks_per_day, 0);
        assert_eq!(summary.exam_countdown, 0);
    }

    #[test]
    fn countdown_never_negative() {
        let yesterday = today() - Days::new(1);
        let summary = build_summary(&[day(yesterday, 1)], today());
        assert_eq!(summary.exam_countdown, 0);
    }
}
