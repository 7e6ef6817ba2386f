use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::models::{FocusSession, SessionKind};
use crate::storage::{self, KEY_POMODORO_SESSIONS};

pub async fn log_session(minutes: Option<u32>, deep: bool) -> Result<()> {
    let store = super::open_store()?;
    let config = Config::load()?;

    let kind = if deep {
        SessionKind::DeepWork
    } else {
        SessionKind::Pomodoro
    };
    let duration = minutes.unwrap_or(match kind {
        SessionKind::Pomodoro => config.timer.pomodoro_minutes,
        SessionKind::DeepWork => config.timer.deep_work_minutes,
    });

    let mut sessions: Vec<FocusSession> =
        storage::get_record(&store, KEY_POMODORO_SESSIONS)?.unwrap_or_default();
    sessions.push(FocusSession::new(duration, kind));
    storage::put_record(&store, KEY_POMODORO_SESSIONS, &sessions)?;

    println!(
        "Logged a {}-minute {} session ({} total).",
        duration.to_string().bold(),
        kind,
        sessions.len()
    );

    let newly = super::refresh_achievements(&store)?;
    super::print_unlocked(&newly);

    Ok(())
}
