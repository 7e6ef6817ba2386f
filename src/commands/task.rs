use anyhow::Result;
use colored::Colorize;

use crate::engine::progress;
use crate::models::Roadmap;
use crate::storage::{self, KEY_ROADMAP};

/// Flip one task's completion flag. The whole roadmap is read, mutated
/// and written back in one synchronous sequence so a toggle can never
/// observe a stale copy.
pub async fn set_completed(id: &str, completed: bool) -> Result<()> {
    let store = super::open_store()?;

    let roadmap: Option<Roadmap> = storage::get_record(&store, KEY_ROADMAP)?;
    let Some(mut roadmap) = roadmap else {
        println!("No roadmap yet. Run {} first.", "skillplan init".green());
        return Ok(());
    };

    if !roadmap.set_task_completed(id, completed) {
        anyhow::bail!("No task with id {} in the roadmap", id);
    }
    storage::put_record(&store, KEY_ROADMAP, &roadmap)?;

    if let Some(task) = roadmap.find_task(id) {
        let mark = if completed { "✓".green() } else { "○".normal() };
        println!("{} {} — {}", mark, task.id, task.title);
    }

    let p = progress(&roadmap);
    println!(
        "Progress: {}/{} tasks ({:.1}%)",
        p.completed, p.total, p.percent
    );

    let newly = super::refresh_achievements(&store)?;
    super::print_unlocked(&newly);

    Ok(())
}

pub async fn list_tasks(week: Option<u32>, pending_only: bool) -> Result<()> {
    let store = super::open_store()?;

    let roadmap: Option<Roadmap> = storage::get_record(&store, KEY_ROADMAP)?;
    let Some(roadmap) = roadmap else {
        println!("No roadmap yet. Run {} first.", "skillplan init".green());
        return Ok(());
    };

    for month in &roadmap.months {
        for w in &month.weeks {
            if let Some(filter) = week {
                if w.global_week_index != filter {
                    continue;
                }
            }
            for task in &w.tasks {
                if pending_only && task.completed {
                    continue;
                }
                let mark = if task.completed {
                    "✓".green()
                } else {
                    "○".normal()
                };
                println!(
                    "{} [{}] {} (week {}, {}h)",
                    mark, task.id, task.title, w.global_week_index, task.estimated_hours
                );
            }
        }
    }

    Ok(())
}
