//! JSON task file loading.
//!
//! Task files come from the product's export format, so dates arrive as
//! strings and may be malformed. A bad date downgrades that one task to
//! dateless instead of failing the whole load; the caller reports how many
//! were degraded.

use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveTime, Utc};
use serde::Deserialize;
use taskdeck_core::{compute_points, parse_date, Task};

/// Task record as stored on disk, before date parsing.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTask {
    id: String,
    title: String,
    importance: i64,
    complexity: i64,
    #[serde(default)]
    planned_date: Option<String>,
    #[serde(default)]
    due_date: Option<String>,
    #[serde(default)]
    is_completed: bool,
    #[serde(default)]
    position: i64,
    #[serde(default)]
    parent_id: Option<String>,
}

/// Load a task file, returning the tasks and the number of unreadable dates
/// that were degraded to "no date".
pub fn load_tasks(path: &Path) -> Result<(Vec<Task>, usize), Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    let raw: Vec<RawTask> = serde_json::from_str(&contents)?;

    let mut degraded = 0;
    let tasks = raw
        .into_iter()
        .map(|r| {
            let planned_date = resolve_date(r.planned_date.as_deref(), &mut degraded);
            let due_date = resolve_date(r.due_date.as_deref(), &mut degraded);
            Task {
                id: r.id,
                title: r.title,
                importance: r.importance,
                complexity: r.complexity,
                // Stored points are a derived value; recompute so the
                // score invariant holds even for stale files.
                points: compute_points(r.importance, r.complexity),
                planned_date,
                due_date,
                is_completed: r.is_completed,
                position: r.position,
                parent_id: r.parent_id,
            }
        })
        .collect();

    Ok((tasks, degraded))
}

fn resolve_date(input: Option<&str>, degraded: &mut usize) -> Option<DateTime<Utc>> {
    let input = input?;
    match parse_date(input) {
        Ok(day) => Some(day.and_time(NaiveTime::MIN).and_utc()),
        Err(_) => {
            *degraded += 1;
            None
        }
    }
}
