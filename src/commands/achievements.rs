use anyhow::Result;
use colored::Colorize;

use crate::engine;
use crate::storage::{self, KEY_ACHIEVEMENTS};

pub async fn list_achievements() -> Result<()> {
    let store = super::open_store()?;

    let unlocked: Vec<String> =
        storage::get_record(&store, KEY_ACHIEVEMENTS)?.unwrap_or_default();

    println!("{}", "Achievements".bold());
    println!();

    for achievement in engine::catalog() {
        let status = if unlocked.iter().any(|id| id == achievement.id) {
            "unlocked".green()
        } else {
            "locked".dimmed()
        };
        println!(
            "{} {} — {} [{}]",
            achievement.icon,
            achievement.name.bold(),
            achievement.description,
            status
        );
    }

    println!();
    println!("{}/{} unlocked", unlocked.len(), engine::catalog().len());

    Ok(())
}
