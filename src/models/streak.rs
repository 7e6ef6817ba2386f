use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Day-granularity activity streak state.
///
/// `longest_streak` is monotonically non-decreasing. `streak` resets to
/// 1 on a gap, increments on a consecutive day, and stays unchanged on
/// a repeat same-day update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreakRecord {
    pub last_date: Option<NaiveDate>,
    pub streak: u32,
    pub longest_streak: u32,
}
