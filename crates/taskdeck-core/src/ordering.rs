//! Deterministic task ordering.
//!
//! The comparator defines a total preorder: category rank first, then the
//! overdue-date tiebreak, then points. Tasks tied on every key keep the order
//! the input presented them in, so ordering must run through a stable sort.
//! This module is the single authority for display order; presentation code
//! is not allowed to re-sort its output.

use std::cmp::Ordering;

use crate::category::{categorize, effective_date, Category};
use crate::day_context::DayContext;
use crate::task::Task;

/// Compare two tasks for display priority under one day context.
///
/// Keys, in order: category rank ascending; for two overdue tasks the
/// chronologically earlier effective date first (more overdue wins); then
/// points descending.
pub fn compare_priority(a: &Task, b: &Task, ctx: &DayContext) -> Ordering {
    let category_a = categorize(a, ctx);
    let category_b = categorize(b, ctx);

    let by_rank = category_a.rank().cmp(&category_b.rank());
    if by_rank != Ordering::Equal {
        return by_rank;
    }

    if category_a == Category::Overdue {
        let by_date = effective_date(a, ctx).cmp(&effective_date(b, ctx));
        if by_date != Ordering::Equal {
            return by_date;
        }
    }

    b.points.cmp(&a.points)
}

/// Sort tasks into final display order.
///
/// `slice::sort_by` is stable, which the comparator's tie behavior relies on:
/// sorting the same input twice under the same context yields identical
/// output. Completed tasks are the caller's job to filter out beforehand.
pub fn ordered_task_list(mut tasks: Vec<Task>, ctx: &DayContext) -> Vec<Task> {
    tasks.sort_by(|a, b| compare_priority(a, b, ctx));
    tasks
}
