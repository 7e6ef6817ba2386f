use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{FocusSession, Roadmap, SessionKind, StreakRecord};
use crate::engine::{months_completed, progress};

/// Ephemeral activity snapshot fed into achievement predicates.
/// Never persisted as a unit; assembled from the authoritative records
/// on every evaluation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityStats {
    pub tasks_completed: u32,
    pub pomodoro_sessions: u32,
    pub streak: u32,
    pub months_completed: u32,
    pub perfect_quizzes: u32,
    pub roadmap_completed: bool,
    pub deep_work_sessions: u32,
    pub daily_pomodoro_sessions: u32,
}

impl ActivityStats {
    /// Build a snapshot from the current records. Task counts are
    /// recomputed by walking the roadmap rather than read from any
    /// stored counter.
    pub fn assemble(
        roadmap: Option<&Roadmap>,
        streak: &StreakRecord,
        sessions: &[FocusSession],
        perfect_quizzes: u32,
        today: NaiveDate,
    ) -> Self {
        let (tasks_completed, roadmap_completed, months_done) = match roadmap {
            Some(r) => {
                let p = progress(r);
                (p.completed, p.total > 0 && p.completed == p.total, months_completed(r))
            }
            None => (0, false, 0),
        };

        Self {
            tasks_completed,
            pomodoro_sessions: sessions.len() as u32,
            streak: streak.streak,
            months_completed: months_done,
            perfect_quizzes,
            roadmap_completed,
            deep_work_sessions: sessions
                .iter()
                .filter(|s| s.kind == SessionKind::DeepWork)
                .count() as u32,
            // Counts every session logged today, regardless of kind
            daily_pomodoro_sessions: sessions
                .iter()
                .filter(|s| s.date.date_naive() == today)
                .count() as u32,
        }
    }
}
