//! Drag-and-drop reorder resolution command.

use std::path::Path;

use taskdeck_core::{reordered_position, Task};

use crate::taskfile;

pub fn run(
    file: &Path,
    from: usize,
    to: usize,
    parent: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (tasks, _) = taskfile::load_tasks(file)?;

    // The sibling group: root tasks, or one parent's subtasks.
    let mut group: Vec<Task> = tasks
        .into_iter()
        .filter(|t| t.parent_id.as_deref() == parent)
        .collect();
    group.sort_by(|a, b| b.position.cmp(&a.position));

    let new_position = reordered_position(&group, from, to)?;

    // Persisting the value is the storage layer's job; this just resolves it.
    println!("{new_position}");
    Ok(())
}
