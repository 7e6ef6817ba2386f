use std::collections::HashSet;

use crate::models::ActivityStats;

/// Static achievement definition. Predicates are pure functions of the
/// stats snapshot.
pub struct AchievementDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    predicate: fn(&ActivityStats) -> bool,
}

impl AchievementDef {
    pub fn unlocked_by(&self, stats: &ActivityStats) -> bool {
        (self.predicate)(stats)
    }
}

static CATALOG: [AchievementDef; 10] = [
    AchievementDef {
        id: "first-task",
        name: "First Step",
        description: "Complete your first task",
        icon: "🎯",
        predicate: |s| s.tasks_completed >= 1,
    },
    AchievementDef {
        id: "first-focus",
        name: "First Focus Session",
        description: "Complete your first Pomodoro session",
        icon: "🍅",
        predicate: |s| s.pomodoro_sessions >= 1,
    },
    AchievementDef {
        id: "week-streak",
        name: "Week Warrior",
        description: "Complete 7 days in a row",
        icon: "🔥",
        predicate: |s| s.streak >= 7,
    },
    AchievementDef {
        id: "month-complete",
        name: "Month Master",
        description: "Complete a full month",
        icon: "🏆",
        predicate: |s| s.months_completed >= 1,
    },
    AchievementDef {
        id: "quiz-master",
        name: "Quiz Master",
        description: "Score 100% on a quiz",
        icon: "🧠",
        predicate: |s| s.perfect_quizzes >= 1,
    },
    AchievementDef {
        id: "roadmap-complete",
        name: "Roadmap Champion",
        description: "Complete entire roadmap",
        icon: "👑",
        predicate: |s| s.roadmap_completed,
    },
    AchievementDef {
        id: "20-tasks",
        name: "Task Master",
        description: "Complete 20 tasks",
        icon: "✅",
        predicate: |s| s.tasks_completed >= 20,
    },
    AchievementDef {
        id: "deep-work-master",
        name: "Deep Work Master",
        description: "Complete 10 Deep Work sessions",
        icon: "🧘",
        predicate: |s| s.deep_work_sessions >= 10,
    },
    AchievementDef {
        id: "consistency-hero",
        name: "Consistency Hero",
        description: "Maintain a 30-day streak",
        icon: "💪",
        predicate: |s| s.streak >= 30,
    },
    AchievementDef {
        id: "4-sessions",
        name: "Focus Champion",
        description: "Complete 4 Pomodoro sessions in a day",
        icon: "⭐",
        predicate: |s| s.daily_pomodoro_sessions >= 4,
    },
];

/// The full achievement catalog, in declaration order
pub fn catalog() -> &'static [AchievementDef] {
    &CATALOG
}

/// Return every achievement that the stats now satisfy and the unlocked
/// set does not yet contain, in catalog order. Pure: persisting the
/// updated unlocked set is the caller's responsibility.
pub fn evaluate(
    stats: &ActivityStats,
    unlocked: &HashSet<String>,
) -> Vec<&'static AchievementDef> {
    CATALOG
        .iter()
        .filter(|a| !unlocked.contains(a.id) && a.unlocked_by(stats))
        .collect()
}
