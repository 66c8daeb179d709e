//! Day-relative task classification.
//!
//! Each task is placed in exactly one of six categories relative to the
//! captured day context. The category drives both grouping in the UI and the
//! primary sort key of the display order.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::day_context::{is_date_urgent, normalize_date, DayContext};
use crate::points::is_collected_defaults;
use crate::task::Task;

/// Day-relative category of a task.
///
/// Variants are declared in display order; [`Category::rank`] maps them
/// bijectively onto 1..=6.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Untriaged inbox task: sentinel scoring and no effective date
    Collected,
    /// Effective date in the past
    Overdue,
    /// Effective date is the reference day
    Today,
    /// Effective date is the day after the reference day
    Tomorrow,
    /// No effective date
    NoDate,
    /// Effective date after tomorrow
    Future,
}

impl Category {
    /// Display rank: 1 sorts first, 6 sorts last.
    pub fn rank(&self) -> u8 {
        match self {
            Category::Collected => 1,
            Category::Overdue => 2,
            Category::Today => 3,
            Category::Tomorrow => 4,
            Category::NoDate => 5,
            Category::Future => 6,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Collected => "collected",
            Category::Overdue => "overdue",
            Category::Today => "today",
            Category::Tomorrow => "tomorrow",
            Category::NoDate => "no date",
            Category::Future => "future",
        };
        write!(f, "{label}")
    }
}

/// Resolve the one date that governs a task's category.
///
/// An urgent due date overrides the planned date: an imminent deadline should
/// not be hidden by a casual plan. A distant due date defers to the planned
/// date, and with no planned date set the task reads as dateless even though
/// a deadline nominally exists.
pub fn effective_date(task: &Task, ctx: &DayContext) -> Option<NaiveDate> {
    if let Some(due) = task.due_date {
        let due = normalize_date(due);
        if is_date_urgent(due, ctx) {
            return Some(due);
        }
    }
    task.planned_date.map(normalize_date)
}

/// True for tasks still carrying the untriaged sentinel scoring and never
/// given an effective date.
pub fn is_collected_task(task: &Task, ctx: &DayContext) -> bool {
    is_collected_defaults(task.importance, task.complexity)
        && effective_date(task, ctx).is_none()
}

/// Classify a task relative to the context's day boundaries.
pub fn categorize(task: &Task, ctx: &DayContext) -> Category {
    if is_collected_task(task, ctx) {
        return Category::Collected;
    }
    match effective_date(task, ctx) {
        None => Category::NoDate,
        Some(d) if d < ctx.today => Category::Overdue,
        Some(d) if d == ctx.today => Category::Today,
        Some(d) if d == ctx.tomorrow => Category::Tomorrow,
        Some(_) => Category::Future,
    }
}
