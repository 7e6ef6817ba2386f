mod achievements;
mod checkin;
mod focus;
mod init;
mod quiz;
mod reset;
mod roadmap;
mod stats;
mod task;

use std::collections::HashSet;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use colored::Colorize;

pub use checkin::CheckinCommand;
pub use init::InitCommand;
pub use stats::StatsCommand;

use crate::engine::{self, AchievementDef};
use crate::models::{ActivityStats, FocusSession, Roadmap, StreakRecord};
use crate::storage::{
    self, SledStore, Store, KEY_ACHIEVEMENTS, KEY_PERFECT_QUIZZES, KEY_POMODORO_SESSIONS,
    KEY_ROADMAP, KEY_STREAK_DATA,
};

#[derive(Parser)]
#[command(name = "skillplan")]
#[command(about = "Terminal-based study planner and progress tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a profile and generate a study roadmap
    Init(InitCommand),

    /// Show the generated roadmap
    Roadmap {
        /// Show only one month (1-based)
        #[arg(short, long)]
        month: Option<u32>,
    },

    /// Manage roadmap tasks
    #[command(subcommand)]
    Task(TaskSubcommands),

    /// Record today's activity and update the streak
    Checkin(CheckinCommand),

    /// Log focus sessions
    #[command(subcommand)]
    Focus(FocusSubcommands),

    /// Record quiz results
    #[command(subcommand)]
    Quiz(QuizSubcommands),

    /// Show progress and activity statistics
    Stats(StatsCommand),

    /// List achievements and their unlock status
    Achievements,

    /// Clear all stored data and start over
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum TaskSubcommands {
    /// List tasks
    List {
        /// Filter by global week index
        #[arg(short, long)]
        week: Option<u32>,

        /// Only show incomplete tasks
        #[arg(long)]
        pending: bool,
    },

    /// Mark a task as completed
    Complete {
        /// Task ID (e.g. 1-2-3)
        id: String,
    },

    /// Mark a task as not completed
    Undo {
        /// Task ID (e.g. 1-2-3)
        id: String,
    },
}

#[derive(Subcommand)]
enum FocusSubcommands {
    /// Log a finished focus session
    Log {
        /// Session length in minutes (defaults from config)
        #[arg(short, long)]
        minutes: Option<u32>,

        /// Log a deep-work session instead of a pomodoro
        #[arg(long)]
        deep: bool,
    },
}

#[derive(Subcommand)]
enum QuizSubcommands {
    /// Record a perfect quiz score
    Perfect,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        if self.verbose {
            tracing::info!("Verbose mode enabled");
        }

        match self.command {
            Commands::Init(cmd) => cmd.execute().await,
            Commands::Roadmap { month } => roadmap::show_roadmap(month).await,
            Commands::Task(subcmd) => match subcmd {
                TaskSubcommands::List { week, pending } => task::list_tasks(week, pending).await,
                TaskSubcommands::Complete { id } => task::set_completed(&id, true).await,
                TaskSubcommands::Undo { id } => task::set_completed(&id, false).await,
            },
            Commands::Checkin(cmd) => cmd.execute().await,
            Commands::Focus(subcmd) => match subcmd {
                FocusSubcommands::Log { minutes, deep } => focus::log_session(minutes, deep).await,
            },
            Commands::Quiz(subcmd) => match subcmd {
                QuizSubcommands::Perfect => quiz::record_perfect().await,
            },
            Commands::Stats(cmd) => cmd.execute().await,
            Commands::Achievements => achievements::list_achievements().await,
            Commands::Reset { force } => reset::reset(force).await,
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

/// Open the default store
pub(crate) fn open_store() -> Result<SledStore> {
    SledStore::open_default()
}

/// Assemble fresh stats, evaluate the achievement catalog against them,
/// append newly unlocked ids to the persisted set and return the new
/// unlocks. Called after every mutating command.
pub(crate) fn refresh_achievements(store: &dyn Store) -> Result<Vec<&'static AchievementDef>> {
    let today = Local::now().date_naive();

    let roadmap: Option<Roadmap> = storage::get_record(store, KEY_ROADMAP)?;
    let streak: StreakRecord =
        storage::get_record(store, KEY_STREAK_DATA)?.unwrap_or_default();
    let sessions: Vec<FocusSession> =
        storage::get_record(store, KEY_POMODORO_SESSIONS)?.unwrap_or_default();
    let perfect_quizzes: u32 =
        storage::get_record(store, KEY_PERFECT_QUIZZES)?.unwrap_or_default();

    let stats = ActivityStats::assemble(
        roadmap.as_ref(),
        &streak,
        &sessions,
        perfect_quizzes,
        today,
    );

    let mut unlocked_ids: Vec<String> =
        storage::get_record(store, KEY_ACHIEVEMENTS)?.unwrap_or_default();
    let unlocked_set: HashSet<String> = unlocked_ids.iter().cloned().collect();

    let newly = engine::evaluate(&stats, &unlocked_set);
    if !newly.is_empty() {
        unlocked_ids.extend(newly.iter().map(|a| a.id.to_string()));
        storage::put_record(store, KEY_ACHIEVEMENTS, &unlocked_ids)?;
        tracing::info!(count = newly.len(), "unlocked achievements");
    }

    Ok(newly)
}

/// Print newly unlocked achievements, if any
pub(crate) fn print_unlocked(newly: &[&AchievementDef]) {
    for achievement in newly {
        println!(
            "{} {} {} — {}",
            "Achievement unlocked!".yellow().bold(),
            achievement.icon,
            achievement.name.bold(),
            achievement.description
        );
    }
}
