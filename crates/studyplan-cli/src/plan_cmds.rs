//! CLI handlers for `studyplan plan` subcommands.
//!
//! Implements:
//! - `studyplan plan create <file>` -- store a profile and print its plan
//! - `studyplan plan show`          -- regenerate and print the stored plan
//! - `studyplan plan export`        -- write every scheduled task as CSV

use std::io::Write;

use anyhow::{Context as _, Result};

use studyplan_core::parse_profile_toml;

use crate::context::Context;
use crate::store::StoredData;
use crate::{OutputFormat, PlanCommands, coach, export_cmd, render};

// -----------------------------------------------------------------------
// Public entry point
// -----------------------------------------------------------------------

/// Dispatch a `PlanCommands` variant to the appropriate handler.
pub fn run_plan_command(command: PlanCommands, ctx: &Context) -> Result<()> {
    match command {
        PlanCommands::Create { file, format } => cmd_create(ctx, &file, format),
        PlanCommands::Show { format } => cmd_show(ctx, format),
        PlanCommands::Export { output } => {
            let data = ctx.require_state()?;
            export_cmd::run_export_csv(ctx, &data, output.as_deref())
        }
    }
}

// -----------------------------------------------------------------------
// studyplan plan create <file>
// -----------------------------------------------------------------------

/// Read a profile.toml, store it with progress cleared, and print the plan.
///
/// The plan mode carries over from any previously stored profile.
fn cmd_create(ctx: &Context, file_path: &str, format: OutputFormat) -> Result<()> {
    // 1. Read the file.
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("failed to read profile file: {file_path}"))?;

    // 2. Parse and validate.
    let parsed = parse_profile_toml(&content)
        .with_context(|| format!("failed to parse profile file: {file_path}"))?;

    // 3. Keep the current mode, reset progress.
    let mode = match ctx.store.load()? {
        Some(previous) => previous.plan_mode,
        None => ctx.config.default_mode,
    };
    let data = StoredData::new(parsed.profile, mode);
    ctx.store.save(&data)?;
    tracing::info!(path = %ctx.store.path().display(), subjects = data.profile.subjects.len(), "profile stored");

    // 4. Print warnings to stderr so JSON output stays parseable.
    if !parsed.warnings.is_empty() {
        eprintln!("Warnings:");
        for w in &parsed.warnings {
            eprintln!("  - {w}");
        }
    }

    // 5. Print the plan.
    print_plan(ctx, &data, format)?;
    if format == OutputFormat::Text {
        if let Some(phrase) = coach::choose_motivation(data.profile.language, &mut rand::rng()) {
            println!("{phrase}");
        }
    }
    Ok(())
}

// -----------------------------------------------------------------------
// studyplan plan show
// -----------------------------------------------------------------------

fn cmd_show(ctx: &Context, format: OutputFormat) -> Result<()> {
    let data = ctx.require_state()?;
    print_plan(ctx, &data, format)
}

/// Regenerate and print the plan for `data`.
fn print_plan(ctx: &Context, data: &StoredData, format: OutputFormat) -> Result<()> {
    let plan = data.plan(&ctx.clock);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => {
            render::write_plan(&mut out, &plan, &data.profile, data.plan_mode, &data.completed)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &plan).context("failed to serialize plan")?;
            writeln!(out)?;
        }
    }
    Ok(())
}
