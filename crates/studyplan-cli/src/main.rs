mod coach;
mod config;
mod context;
mod export_cmd;
mod plan_cmds;
mod progress_cmds;
mod render;
mod store;
#[cfg(test)]
mod test_util;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

use studyplan_core::{Language, PlanMode};

use context::Context;

#[derive(Parser)]
#[command(name = "studyplan", about = "Exam study planner for students", version)]
struct Cli {
    /// State file path (overrides STUDYPLAN_STATE env var)
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a studyplan config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
        /// Default message language (en, hi)
        #[arg(long, default_value = "en")]
        language: Language,
        /// Plan mode for newly stored profiles (normal, gentle)
        #[arg(long, default_value = "normal")]
        mode: PlanMode,
    },
    /// Plan management
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Switch between normal and gentle pacing
    Mode {
        /// normal or gentle
        mode: PlanMode,
    },
    /// Show today's tasks
    Today,
    /// Toggle a task as done
    Done {
        /// Task ID, as listed by `plan show`
        task_id: String,
    },
    /// Show progress, mode and countdown
    Status,
    /// Clear all completion marks
    Reset,
    /// Print a random motivational phrase
    Motivate,
    /// Get a short study tip for a question
    Explain {
        /// The question to explain
        #[arg(trailing_var_arg = true)]
        question: Vec<String>,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Store a profile from a TOML file and print its plan
    Create {
        /// Path to the profile TOML file
        file: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the plan for the stored profile
    Show {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Export the plan as CSV
    Export {
        /// Output file path (defaults to stdout)
        #[arg(long)]
        output: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn cmd_init(force: bool, language: Language, mode: PlanMode) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile {
        defaults: config::DefaultsSection { language, mode },
        storage: config::StorageSection::default(),
    };

    config::save_config_to(&cfg, &path)?;

    println!("Config written to {}", path.display());
    println!("  defaults.language = {language}");
    println!("  defaults.mode = {mode}");
    println!();
    println!("Next: run `studyplan plan create <file>` with your profile.");

    Ok(())
}

fn cmd_motivate(ctx: &Context) -> anyhow::Result<()> {
    let language = current_language(ctx)?;
    if let Some(phrase) = coach::choose_motivation(language, &mut rand::rng()) {
        println!("{phrase}");
    }
    Ok(())
}

fn cmd_explain(ctx: &Context, question: &[String]) -> anyhow::Result<()> {
    let language = current_language(ctx)?;
    println!("{}", coach::quick_explanation(&question.join(" "), language));
    Ok(())
}

/// Language of the stored profile, or the configured default.
fn current_language(ctx: &Context) -> anyhow::Result<Language> {
    Ok(ctx
        .store
        .load()?
        .map_or(ctx.config.default_language, |data| data.profile.language))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let state = cli.state;
    let today = cli.today;
    let resolve = || Context::resolve(state.as_deref(), today);

    match cli.command {
        Commands::Init {
            force,
            language,
            mode,
        } => cmd_init(force, language, mode)?,
        Commands::Plan { command } => plan_cmds::run_plan_command(command, &resolve()?)?,
        Commands::Mode { mode } => progress_cmds::run_mode(&resolve()?, mode)?,
        Commands::Today => progress_cmds::run_today(&resolve()?)?,
        Commands::Done { task_id } => progress_cmds::run_done(&resolve()?, &task_id)?,
        Commands::Status => progress_cmds::run_status(&resolve()?)?,
        Commands::Reset => progress_cmds::run_reset(&resolve()?)?,
        Commands::Motivate => cmd_motivate(&resolve()?)?,
        Commands::Explain { question } => cmd_explain(&resolve()?, &question)?,
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "studyplan", &mut std::io::stdout());
        }
    }

    Ok(())
}
