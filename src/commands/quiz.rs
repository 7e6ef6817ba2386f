use anyhow::Result;
use colored::Colorize;

use crate::storage::{self, KEY_PERFECT_QUIZZES};

pub async fn record_perfect() -> Result<()> {
    let store = super::open_store()?;

    let count: u32 = storage::get_record(&store, KEY_PERFECT_QUIZZES)?.unwrap_or_default();
    let count = count + 1;
    storage::put_record(&store, KEY_PERFECT_QUIZZES, &count)?;

    println!(
        "{} Perfect quiz recorded ({} total).",
        "🧠".normal(),
        count.to_string().bold()
    );

    let newly = super::refresh_achievements(&store)?;
    super::print_unlocked(&newly);

    Ok(())
}
