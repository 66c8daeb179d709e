//! Task record types.
//!
//! The engine reads a subset of the product's task entity, delivered fully
//! materialized by the persistence layer. Nothing here is mutated in place:
//! scores, categories and positions are derived values the caller persists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::points::default_task_values;

/// A task as seen by the ordering engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    /// User-assigned importance, 0..=50
    pub importance: i64,
    /// User-assigned complexity, 1..=9
    pub complexity: i64,
    /// Derived score, 0..=500; recomputed whenever importance or complexity
    /// change, never stored stale
    pub points: i64,
    /// Day the user plans to work on the task
    #[serde(default)]
    pub planned_date: Option<DateTime<Utc>>,
    /// Hard deadline
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_completed: bool,
    /// Sibling ordering key; higher sorts earlier. `0` means uninitialized.
    #[serde(default)]
    pub position: i64,
    /// Parent task id; `None` for root tasks
    #[serde(default)]
    pub parent_id: Option<String>,
}

impl Task {
    /// Create a task with the fully-prioritized creation defaults.
    ///
    /// The position stays at the uninitialized sentinel until the caller
    /// seeds it with [`crate::position::initial_position`].
    pub fn new(title: impl Into<String>) -> Self {
        let defaults = default_task_values();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            importance: defaults.importance,
            complexity: defaults.complexity,
            points: defaults.points,
            planned_date: None,
            due_date: None,
            is_completed: false,
            position: 0,
            parent_id: None,
        }
    }
}
