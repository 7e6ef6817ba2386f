use anyhow::Result;
use chrono::Local;
use clap::Args;
use colored::Colorize;

use crate::engine::check_daily_login;
use crate::models::StreakRecord;
use crate::storage::{self, KEY_STREAK_DATA};

#[derive(Args)]
pub struct CheckinCommand {}

impl CheckinCommand {
    pub async fn execute(self) -> Result<()> {
        let store = super::open_store()?;
        let today = Local::now().date_naive();

        let streak = check_daily_login(&store, today)?;
        let record: StreakRecord =
            storage::get_record(&store, KEY_STREAK_DATA)?.unwrap_or_default();

        println!(
            "{} Current streak: {} day{}",
            "🔥".normal(),
            streak.to_string().bold(),
            if streak == 1 { "" } else { "s" }
        );
        println!("Longest streak: {} days", record.longest_streak);

        let newly = super::refresh_achievements(&store)?;
        super::print_unlocked(&newly);

        Ok(())
    }
}
