use anyhow::Result;
use chrono::{Duration, NaiveDate};

use crate::models::StreakRecord;
use crate::storage::{self, Store, KEY_LAST_LOGIN, KEY_STREAK_DATA};

/// Apply one day-keyed transition to the streak record.
///
/// Every date relation maps to exactly one case:
/// same day -> unchanged, yesterday -> +1, no prior date -> 1,
/// gap of two or more days -> reset to 1.
pub fn update_streak(record: &StreakRecord, today: NaiveDate) -> StreakRecord {
    if record.last_date == Some(today) {
        return record.clone();
    }

    let yesterday = today - Duration::days(1);
    let streak = match record.last_date {
        Some(last) if last == yesterday => record.streak + 1,
        Some(_) => 1,
        None => 1,
    };

    StreakRecord {
        last_date: Some(today),
        streak,
        longest_streak: record.longest_streak.max(streak),
    }
}

/// Daily login check. Idempotent within a day: repeat calls on the same
/// date return the current streak without touching the record.
pub fn check_daily_login(store: &dyn Store, today: NaiveDate) -> Result<u32> {
    let last_login: Option<NaiveDate> = storage::get_record(store, KEY_LAST_LOGIN)?;

    if last_login == Some(today) {
        let record: StreakRecord =
            storage::get_record(store, KEY_STREAK_DATA)?.unwrap_or_default();
        return Ok(record.streak);
    }

    storage::put_record(store, KEY_LAST_LOGIN, &today)?;

    let record: StreakRecord = storage::get_record(store, KEY_STREAK_DATA)?.unwrap_or_default();
    let updated = update_streak(&record, today);
    storage::put_record(store, KEY_STREAK_DATA, &updated)?;

    tracing::debug!(streak = updated.streak, "updated daily streak");
    Ok(updated.streak)
}
