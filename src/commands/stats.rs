use anyhow::Result;
use chrono::Local;
use clap::Args;
use colored::Colorize;

use crate::engine::progress;
use crate::models::{ActivityStats, FocusSession, Roadmap, StreakRecord};
use crate::storage::{
    self, KEY_PERFECT_QUIZZES, KEY_POMODORO_SESSIONS, KEY_ROADMAP, KEY_STREAK_DATA,
};

#[derive(Args)]
pub struct StatsCommand {
    /// Print the raw stats snapshot as JSON
    #[arg(long)]
    json: bool,
}

impl StatsCommand {
    pub async fn execute(self) -> Result<()> {
        let store = super::open_store()?;
        let today = Local::now().date_naive();

        let roadmap: Option<Roadmap> = storage::get_record(&store, KEY_ROADMAP)?;
        let streak: StreakRecord =
            storage::get_record(&store, KEY_STREAK_DATA)?.unwrap_or_default();
        let sessions: Vec<FocusSession> =
            storage::get_record(&store, KEY_POMODORO_SESSIONS)?.unwrap_or_default();
        let perfect_quizzes: u32 =
            storage::get_record(&store, KEY_PERFECT_QUIZZES)?.unwrap_or_default();

        let stats = ActivityStats::assemble(
            roadmap.as_ref(),
            &streak,
            &sessions,
            perfect_quizzes,
            today,
        );

        if self.json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
            return Ok(());
        }

        println!("{}", "Study Statistics".bold());
        println!();

        match roadmap.as_ref() {
            Some(r) => {
                let p = progress(r);
                println!(
                    "Roadmap: {}/{} tasks ({:.1}%)",
                    p.completed, p.total, p.percent
                );
                println!("Months completed: {}", stats.months_completed);
            }
            None => println!("Roadmap: not generated yet"),
        }

        println!(
            "Streak: {} day(s), longest {}",
            stats.streak, streak.longest_streak
        );
        println!(
            "Focus sessions: {} total, {} deep work, {} today",
            stats.pomodoro_sessions, stats.deep_work_sessions, stats.daily_pomodoro_sessions
        );
        println!("Perfect quizzes: {}", stats.perfect_quizzes);

        Ok(())
    }
}
