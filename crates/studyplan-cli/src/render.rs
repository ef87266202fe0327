//! Plain-text rendering of plans and days.

use std::io::{self, Write};

use studyplan_core::locale::TextCopy;
use studyplan_core::{GeneratedPlan, PlanDay, PlanMode, PlanTask, Progress, StudentProfile, TaskKind};

/// Width of the text progress bar.
const BAR_WIDTH: usize = 20;

/// Checkbox marker for a task.
fn mark(task: &PlanTask, progress: &Progress) -> &'static str {
    if progress.is_done(&task.id) { "[x]" } else { "[ ]" }
}

/// Write one task line.
pub fn write_task(out: &mut impl Write, task: &PlanTask, progress: &Progress) -> io::Result<()> {
    let tag = match task.kind {
        TaskKind::Study => "",
        TaskKind::Revision => " *",
    };
    writeln!(
        out,
        "  {} {:<16} {}: {}{}",
        mark(task, progress),
        task.id,
        task.subject,
        task.title,
        tag
    )
}

/// Write a day heading, its focus message and its tasks.
pub fn write_day(out: &mut impl Write, day: &PlanDay, progress: &Progress) -> io::Result<()> {
    writeln!(out, "{}  ({})", day.readable_date, day.date)?;
    writeln!(out, "  {}", day.focus_message)?;
    for task in &day.tasks {
        write_task(out, task, progress)?;
    }
    Ok(())
}

/// Write the full plan with a header block.
pub fn write_plan(
    out: &mut impl Write,
    plan: &GeneratedPlan,
    profile: &StudentProfile,
    mode: PlanMode,
    progress: &Progress,
) -> io::Result<()> {
    let copy = TextCopy::for_language(profile.language);
    let summary = &plan.summary;

    writeln!(out, "{} ({}, mode: {mode})", copy.plan_title, profile.grade)?;
    writeln!(
        out,
        "Days: {}  Tasks: {}  Per day: ~{}  Countdown: {} days",
        summary.total_days, summary.total_tasks, summary.tasks_per_day, summary.exam_countdown
    )?;
    if plan.tasks().any(|t| t.kind == TaskKind::Revision) {
        writeln!(out, "{}", copy.weekly_revision)?;
    }
    writeln!(out)?;

    for day in &plan.days {
        write_day(out, day, progress)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Text progress bar, e.g. `[#####---------------]`.
pub fn progress_bar(ratio: f64) -> String {
    let filled = ((ratio.clamp(0.0, 1.0)) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
