use anyhow::Result;
use colored::Colorize;

use crate::models::Roadmap;
use crate::storage::{self, KEY_ROADMAP};

pub async fn show_roadmap(month_filter: Option<u32>) -> Result<()> {
    let store = super::open_store()?;
    let roadmap: Option<Roadmap> = storage::get_record(&store, KEY_ROADMAP)?;

    let Some(roadmap) = roadmap else {
        println!("No roadmap yet. Run {} first.", "skillplan init".green());
        return Ok(());
    };

    println!(
        "{} — {} months, {}h/day ({})",
        roadmap.domain.to_string().cyan().bold(),
        roadmap.duration_months,
        roadmap.daily_hours,
        roadmap.skill_level
    );
    println!();

    for month in &roadmap.months {
        if let Some(filter) = month_filter {
            if month.index != filter {
                continue;
            }
        }

        println!(
            "{} {}",
            format!("Month {}:", month.index).bold(),
            month.title.bold()
        );
        println!("  Goal: {}", month.goals);
        println!("  Resources: {}", month.resources.join(", "));

        for week in &month.weeks {
            println!(
                "  {} (week {}) — {} / {} / {}",
                week.title.cyan(),
                week.global_week_index,
                week.daily_practice.learning,
                week.daily_practice.practice,
                week.daily_practice.test
            );
            for task in &week.tasks {
                let mark = if task.completed {
                    "✓".green()
                } else {
                    "○".normal()
                };
                println!(
                    "    {} [{}] {} ({}h)",
                    mark, task.id, task.title, task.estimated_hours
                );
            }
        }
        println!();
    }

    Ok(())
}
