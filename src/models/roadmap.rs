use serde::{Deserialize, Serialize};

use super::{Domain, SkillLevel};

/// Fully materialized study plan: months of weeks of tasks.
///
/// `total_tasks` is fixed at generation time and is the denominator for
/// all progress percentages. The only mutation after generation is
/// flipping individual `Task::completed` flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roadmap {
    pub domain: Domain,
    pub daily_hours: u8,
    pub duration_months: u8,
    pub skill_level: SkillLevel,
    pub months: Vec<Month>,
    pub total_tasks: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Month {
    /// 1-based month index
    pub index: u32,
    pub title: String,
    pub goals: String,
    pub resources: Vec<String>,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Week {
    /// 1-based index across the whole roadmap
    pub global_week_index: u32,
    pub title: String,
    pub daily_practice: DailyPractice,
    pub tasks: Vec<Task>,
}

/// Suggested daily split of the user's available hours.
/// The three shares are independently floored and may not sum back to
/// the input hours; the remainder is intentionally dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPractice {
    pub learning: String,
    pub practice: String,
    pub test: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Stable id, unique within the roadmap: "{month}-{week}-{task}"
    pub id: String,
    pub title: String,
    pub description: String,
    pub estimated_hours: u32,
    pub completed: bool,
}

impl Roadmap {
    /// Iterate every task in month/week order
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.months
            .iter()
            .flat_map(|m| m.weeks.iter())
            .flat_map(|w| w.tasks.iter())
    }

    /// Find one task by its id
    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.tasks().find(|t| t.id == id)
    }

    fn find_task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.months
            .iter_mut()
            .flat_map(|m| m.weeks.iter_mut())
            .flat_map(|w| w.tasks.iter_mut())
            .find(|t| t.id == id)
    }

    /// Set the completion flag on exactly one task. Returns false when
    /// no task has the given id.
    pub fn set_task_completed(&mut self, id: &str, completed: bool) -> bool {
        match self.find_task_mut(id) {
            Some(task) => {
                task.completed = completed;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::generate;
    use crate::models::{Domain, SkillLevel};

    #[test]
    fn test_set_task_completed_flips_exactly_one_task() {
        let mut roadmap = generate(Domain::Coding, 2, 1, SkillLevel::Beginner);

        assert!(roadmap.set_task_completed("1-1-1", true));
        assert_eq!(roadmap.tasks().filter(|t| t.completed).count(), 1);
        assert!(roadmap.find_task("1-1-1").unwrap().completed);

        assert!(roadmap.set_task_completed("1-1-1", false));
        assert_eq!(roadmap.tasks().filter(|t| t.completed).count(), 0);
    }

    #[test]
    fn test_unknown_task_id_is_rejected() {
        let mut roadmap = generate(Domain::Coding, 2, 1, SkillLevel::Beginner);
        assert!(!roadmap.set_task_completed("9-9-9", true));
        assert_eq!(roadmap.tasks().filter(|t| t.completed).count(), 0);
    }
}
