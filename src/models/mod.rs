mod profile;
mod roadmap;
mod session;
mod stats;
mod streak;

pub use profile::{Domain, ParseDomainError, ParseSkillLevelError, SkillLevel, UserProfile};
pub use roadmap::{DailyPractice, Month, Roadmap, Task, Week};
pub use session::{FocusSession, SessionKind};
pub use stats::ActivityStats;
pub use streak::StreakRecord;
