use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A logged focus session (pomodoro or deep work)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusSession {
    pub id: String,
    pub date: DateTime<Utc>,
    pub duration_minutes: u32,
    pub kind: SessionKind,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SessionKind {
    Pomodoro,
    DeepWork,
}

impl FocusSession {
    pub fn new(duration_minutes: u32, kind: SessionKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: Utc::now(),
            duration_minutes,
            kind,
        }
    }
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionKind::Pomodoro => write!(f, "pomodoro"),
            SessionKind::DeepWork => write!(f, "deep work"),
        }
    }
}
