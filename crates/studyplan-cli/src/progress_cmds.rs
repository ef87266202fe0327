//! CLI handlers for day-to-day progress: `today`, `done`, `status`,
//! `reset` and `mode`.

use anyhow::{Result, bail};

use studyplan_core::locale::TextCopy;
use studyplan_core::{PlanMode, ProgressReport};

use crate::context::Context;
use crate::render;

// -----------------------------------------------------------------------
// studyplan today
// -----------------------------------------------------------------------

/// Print today's day of the plan.
pub fn run_today(ctx: &Context) -> Result<()> {
    let data = ctx.require_state()?;
    let plan = data.plan(&ctx.clock);
    let copy = TextCopy::for_language(data.profile.language);

    let Some(index) = plan.day_index(ctx.today()) else {
        println!("Today ({}) is not part of the plan.", ctx.today());
        return Ok(());
    };

    let day = &plan.days[index];
    println!("{} (day {} of {})", copy.todays_focus, index + 1, plan.days.len());
    render::write_day(&mut std::io::stdout().lock(), day, &data.completed)?;
    Ok(())
}

// -----------------------------------------------------------------------
// studyplan done <task-id>
// -----------------------------------------------------------------------

/// Toggle completion of one task and save.
pub fn run_done(ctx: &Context, task_id: &str) -> Result<()> {
    let mut data = ctx.require_state()?;
    let plan = data.plan(&ctx.clock);

    let Some(task) = plan.find_task(task_id) else {
        bail!("unknown task id: {task_id}\nRun `studyplan plan show` to list task ids.");
    };

    let done = data.completed.toggle(task_id);
    ctx.store.save(&data)?;
    tracing::info!(task_id, done, "task toggled");

    let mark = if done { "[x]" } else { "[ ]" };
    println!("{mark} {}: {}", task.subject, task.title);

    let report = ProgressReport::from_plan(&plan, &data.completed, &data.profile, ctx.today());
    println!("{}", report.message(&data.profile));
    Ok(())
}

// -----------------------------------------------------------------------
// studyplan status
// -----------------------------------------------------------------------

/// Print overall progress, the active mode and any overload warning.
pub fn run_status(ctx: &Context) -> Result<()> {
    let data = ctx.require_state()?;
    let plan = data.plan(&ctx.clock);
    let copy = TextCopy::for_language(data.profile.language);
    let report = ProgressReport::from_plan(&plan, &data.completed, &data.profile, ctx.today());

    println!("{} ({})", copy.plan_title, data.profile.grade);
    println!();
    println!("  Mode:       {}", data.plan_mode);
    println!(
        "  Progress:   {} {:.0}%",
        render::progress_bar(report.ratio()),
        report.ratio() * 100.0
    );
    println!("  Countdown:  {} days", plan.summary.exam_countdown);
    match report.today_index {
        Some(i) => println!("  Today:      day {} of {}", i + 1, plan.days.len()),
        None => println!("  Today:      outside the plan"),
    }
    println!();
    println!("{}", report.message(&data.profile));
    println!("{}", copy.mode_note(data.plan_mode));
    if report.overloaded {
        println!("{}", copy.overload_detected);
    }
    Ok(())
}

// -----------------------------------------------------------------------
// studyplan reset
// -----------------------------------------------------------------------

/// Clear every completion mark.
pub fn run_reset(ctx: &Context) -> Result<()> {
    let mut data = ctx.require_state()?;
    let cleared = data.completed.completed_count();
    data.completed.reset();
    ctx.store.save(&data)?;
    tracing::info!(cleared, "progress reset");
    println!("Progress reset ({cleared} marks cleared).");
    Ok(())
}

// -----------------------------------------------------------------------
// studyplan mode <normal|gentle>
// -----------------------------------------------------------------------

/// Switch plan mode, regenerate, and drop marks for ids that disappeared.
pub fn run_mode(ctx: &Context, mode: PlanMode) -> Result<()> {
    let mut data = ctx.require_state()?;
    let copy = TextCopy::for_language(data.profile.language);

    if data.plan_mode == mode {
        println!("Already in {mode} mode.");
        return Ok(());
    }

    data.plan_mode = mode;
    let plan = data.plan(&ctx.clock);
    let dropped = data.completed.retain_known(&plan);
    ctx.store.save(&data)?;
    tracing::info!(%mode, dropped, "plan mode changed");

    println!("{}", copy.mode_note(mode));
    println!(
        "Days: {}  Tasks: {}  Per day: ~{}",
        plan.summary.total_days, plan.summary.total_tasks, plan.summary.tasks_per_day
    );
    if dropped > 0 {
        println!("{dropped} completion marks no longer match a task and were cleared.");
    }
    Ok(())
}
