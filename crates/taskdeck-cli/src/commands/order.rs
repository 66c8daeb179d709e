//! Ordered task list command.

use std::path::Path;

use taskdeck_core::{categorize, effective_date, ordered_task_list, DayContext, Task};

use crate::taskfile;

pub fn run(file: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (tasks, degraded) = taskfile::load_tasks(file)?;
    if degraded > 0 {
        eprintln!("warning: {degraded} unreadable date(s) treated as no date");
    }

    // One context for the whole pass; completed tasks never reach the engine.
    let ctx = DayContext::now();
    let open: Vec<Task> = tasks.into_iter().filter(|t| !t.is_completed).collect();
    let ordered = ordered_task_list(open, &ctx);

    if json {
        println!("{}", serde_json::to_string_pretty(&ordered)?);
        return Ok(());
    }

    for task in &ordered {
        let category = categorize(task, &ctx);
        let date = effective_date(task, &ctx)
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<10} {:>5}  {:<10}  {}",
            category.to_string(),
            task.points,
            date,
            task.title
        );
    }
    Ok(())
}
