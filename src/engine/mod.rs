//! Core engine: roadmap generation, progress aggregation, streak
//! tracking and achievement evaluation. Everything here is synchronous
//! and deterministic; persistence happens at the call sites through the
//! injected store.

mod achievements;
mod generator;
mod progress;
mod streak;

pub use achievements::{catalog, evaluate, AchievementDef};
pub use generator::generate;
pub use progress::{months_completed, progress, Progress};
pub use streak::{check_daily_login, update_streak};
