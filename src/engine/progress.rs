use crate::models::Roadmap;

/// Completion summary derived from a roadmap's task states
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub completed: u32,
    pub total: u32,
    pub percent: f64,
}

/// Recompute progress by walking every task. The roadmap is the source
/// of truth; no stored counter is consulted, so the result cannot drift
/// from the task states.
pub fn progress(roadmap: &Roadmap) -> Progress {
    let total = roadmap.tasks().count() as u32;
    let completed = roadmap.tasks().filter(|t| t.completed).count() as u32;
    let percent = if total > 0 {
        completed as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    Progress {
        completed,
        total,
        percent,
    }
}

/// Number of months whose every task is complete
pub fn months_completed(roadmap: &Roadmap) -> u32 {
    roadmap
        .months
        .iter()
        .filter(|m| {
            m.weeks
                .iter()
                .flat_map(|w| w.tasks.iter())
                .all(|t| t.completed)
        })
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::generate;
    use crate::models::{Domain, SkillLevel};

    #[test]
    fn test_toggle_round_trip() {
        let mut roadmap = generate(Domain::Coding, 2, 1, SkillLevel::Beginner);
        let before = progress(&roadmap);

        roadmap.set_task_completed("1-2-3", true);
        let after = progress(&roadmap);
        assert_eq!(after.completed, before.completed + 1);
        assert_eq!(after.total, before.total);

        roadmap.set_task_completed("1-2-3", false);
        let restored = progress(&roadmap);
        assert_eq!(restored.completed, before.completed);
        assert_eq!(restored.percent, before.percent);
    }

    #[test]
    fn test_percent_bounds() {
        let mut roadmap = generate(Domain::Coding, 2, 1, SkillLevel::Beginner);
        assert_eq!(progress(&roadmap).percent, 0.0);

        let ids: Vec<String> = roadmap.tasks().map(|t| t.id.clone()).collect();
        for id in &ids {
            roadmap.set_task_completed(id, true);
        }
        assert_eq!(progress(&roadmap).percent, 100.0);
    }

    #[test]
    fn test_empty_roadmap_percent_is_zero() {
        let mut roadmap = generate(Domain::Coding, 2, 1, SkillLevel::Beginner);
        roadmap.months.clear();
        let p = progress(&roadmap);
        assert_eq!(p.total, 0);
        assert_eq!(p.percent, 0.0);
    }

    #[test]
    fn test_months_completed_requires_every_task() {
        let mut roadmap = generate(Domain::Coding, 2, 2, SkillLevel::Beginner);
        assert_eq!(months_completed(&roadmap), 0);

        let first_month_ids: Vec<String> = roadmap.months[0]
            .weeks
            .iter()
            .flat_map(|w| w.tasks.iter())
            .map(|t| t.id.clone())
            .collect();
        for id in &first_month_ids {
            roadmap.set_task_completed(id, true);
        }
        assert_eq!(months_completed(&roadmap), 1);

        roadmap.set_task_completed(&first_month_ids[0], false);
        assert_eq!(months_completed(&roadmap), 0);
    }
}
