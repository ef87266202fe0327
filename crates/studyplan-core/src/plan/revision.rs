//! Weekly revision: append a recap task at the end of each week.

use super::{PlanDay, PlanTask, TaskKind};
use crate::locale::{TextCopy, weekly_recap_title};
use crate::profile::Language;

/// A day already holding this many tasks gets no recap.
const MAX_TASKS_FOR_RECAP: usize = 3;

/// Append a recap task to each eligible day.
///
/// A day is eligible when it has fewer than three tasks, at least one of them
/// a study task, and it is either the seventh day of its week or the last day
/// of the plan. The recap lists the distinct subjects studied from the start
/// of that week through the day, in first-seen order.
pub fn inject_weekly_revision(days: &mut [PlanDay], language: Language) {
    let last_index = days.len().saturating_sub(1);
    for day_index in 0..days.len() {
        let day = &days[day_index];
        if day.tasks.len() >= MAX_TASKS_FOR_RECAP || !day.has_study_task() {
            continue;
        }
        if day_index % 7 != 6 && day_index != last_index {
            continue;
        }

        let week_start = day_index - day_index % 7;
        let mut covered: Vec<&str> = Vec::new();
        for task in days[week_start..=day_index]
            .iter()
            .flat_map(|d| d.tasks.iter())
            .filter(|t| t.kind == TaskKind::Study)
        {
            if !covered.contains(&task.subject.as_str()) {
                covered.push(&task.subject);
            }
        }
        if covered.is_empty() {
            continue;
        }

        let recap = PlanTask {
            id: format!("revision-{day_index}"),
            subject: TextCopy::for_language(language).revision_label.to_owned(),
            title: weekly_recap_title(&covered, language),
            kind: TaskKind::Revision,
            estimated_hours: 1.0,
            week_index: day_index / 7,
        };
        tracing::debug!(day_index, subjects = covered.len(), "weekly recap injected");
        days[day_index].tasks.push(recap);
    }
}
