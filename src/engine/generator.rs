use crate::catalog;
use crate::models::{DailyPractice, Domain, Month, Roadmap, SkillLevel, Task, Week};

const WEEKS_PER_MONTH: u32 = 4;

/// Generate a fully materialized roadmap from the onboarding inputs.
///
/// Deterministic: identical inputs always produce an identical
/// structure, including task ids and titles.
pub fn generate(
    domain: Domain,
    daily_hours: u8,
    duration_months: u8,
    skill_level: SkillLevel,
) -> Roadmap {
    let duration_months_u32 = duration_months as u32;
    let total_weeks = duration_months_u32 * WEEKS_PER_MONTH;
    let hours_per_week = daily_hours as u32 * 7;

    let mut roadmap = Roadmap {
        domain,
        daily_hours,
        duration_months,
        skill_level,
        months: Vec::with_capacity(duration_months as usize),
        total_tasks: 0,
    };

    for month in 1..=duration_months_u32 {
        let mut month_data = Month {
            index: month,
            title: catalog::month_title(domain, skill_level, month).to_string(),
            goals: catalog::monthly_goals(domain, month).to_string(),
            resources: catalog::monthly_resources(domain),
            weeks: Vec::new(),
        };

        // The last month absorbs any remainder so total weeks stays
        // exactly duration * 4. Computed explicitly rather than assumed.
        let weeks_in_month = if month == duration_months_u32 {
            total_weeks - (month - 1) * WEEKS_PER_MONTH
        } else {
            WEEKS_PER_MONTH
        };

        for week in 1..=weeks_in_month {
            let mut week_data = Week {
                global_week_index: (month - 1) * WEEKS_PER_MONTH + week,
                title: catalog::week_title(week).to_string(),
                daily_practice: daily_practice(daily_hours),
                tasks: Vec::new(),
            };

            let tasks_per_week = (hours_per_week / 2).max(3);
            for task in 1..=tasks_per_week {
                let title = catalog::task_title(domain, task);
                week_data.tasks.push(Task {
                    id: format!("{}-{}-{}", month, week, task),
                    title: title.to_string(),
                    description: format!(
                        "Complete the {} task. Focus on understanding the concepts and practicing regularly.",
                        title
                    ),
                    estimated_hours: estimated_hours(daily_hours),
                    completed: false,
                });
                roadmap.total_tasks += 1;
            }

            month_data.weeks.push(week_data);
        }

        roadmap.months.push(month_data);
    }

    roadmap
}

fn estimated_hours(daily_hours: u8) -> u32 {
    (daily_hours as f64 * 0.5).ceil() as u32
}

/// Split the daily hours 60% learning / 30% practice / 10% test.
/// Each share is floored independently; the remainder is dropped, so
/// the three shares need not sum back to the input.
fn daily_practice(daily_hours: u8) -> DailyPractice {
    let hours = daily_hours as f64;
    let learning_hours = (hours * 0.6).floor() as u32;
    let practice_hours = (hours * 0.3).floor() as u32;
    let test_minutes = (hours * 0.1 * 60.0).floor() as u32;

    DailyPractice {
        learning: format!("{}h learning", learning_hours),
        practice: format!("{}h practice", practice_hours),
        test: format!("{}min test/quiz", test_minutes),
    }
}
