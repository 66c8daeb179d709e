//! Sibling position maintenance.
//!
//! Every sibling under one parent (root tasks form their own group) carries a
//! numeric position; rendering by descending position reproduces the display
//! order. A drag-and-drop move resolves to exactly one new key for the
//! dragged task; the other siblings are never renumbered.
//!
//! Keys are spaced integers (seed 10000, step 100) with midpoint bisection on
//! contention. There is no rebalancing pass: repeated insertions squeezed
//! between the same two neighbours eventually exhaust the integer gap, at
//! which point the fallback key may land outside the neighbour interval.

use crate::error::ValidationError;
use crate::task::Task;

/// Seed position for the first task of a sibling group.
pub const POSITION_SEED: i64 = 10_000;
/// Spacing between neighbouring positions on seeding and edge moves.
pub const POSITION_STEP: i64 = 100;
// Offset applied when the integer gap between two neighbours is exhausted.
const EXHAUSTED_GAP_STEP: i64 = 50;
// Smallest position ever produced; 0 is reserved as the uninitialized
// sentinel of a freshly created record.
const POSITION_FLOOR: i64 = 1;

/// Position for a task created at the top of a sibling group.
///
/// `siblings_desc` is the existing group ordered by descending position.
/// The first sibling seeds a fresh baseline; later ones land one step above
/// the current top.
pub fn initial_position(siblings_desc: &[Task]) -> i64 {
    match siblings_desc.first() {
        Some(top) if top.position > 0 => top.position + POSITION_STEP,
        _ => POSITION_SEED,
    }
}

/// Compute the single new position after moving one sibling.
///
/// `siblings_desc` is the group ordered by descending position; `old_index`
/// and `new_index` are the display indices before and after the drag. The
/// returned key is the only value the caller persists.
///
/// Landing between two neighbours whose keys differ by more than one takes
/// their floored midpoint. A gap of one or less falls back to `above + 50`,
/// which can escape the neighbour interval; the group is still not
/// renumbered.
pub fn reordered_position(
    siblings_desc: &[Task],
    old_index: usize,
    new_index: usize,
) -> Result<i64, ValidationError> {
    let len = siblings_desc.len();
    if old_index >= len {
        return Err(ValidationError::OutOfBounds {
            collection: "siblings",
            index: old_index,
            len,
        });
    }
    if new_index >= len {
        return Err(ValidationError::OutOfBounds {
            collection: "siblings",
            index: new_index,
            len,
        });
    }

    let current = siblings_desc[old_index].position;
    if old_index == new_index {
        return Ok(current);
    }

    // The group as it reads with the dragged task lifted out.
    let rest: Vec<i64> = siblings_desc
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != old_index)
        .map(|(_, task)| task.position)
        .collect();

    if new_index == 0 {
        let top = rest[0];
        return Ok(if top > 0 { top + POSITION_STEP } else { POSITION_SEED });
    }

    if new_index == rest.len() {
        let bottom = rest[rest.len() - 1];
        return Ok(if bottom > 0 {
            (bottom - POSITION_STEP).max(POSITION_FLOOR)
        } else {
            POSITION_FLOOR
        });
    }

    let above = rest[new_index - 1];
    let below = rest[new_index];
    if above - below > 1 {
        Ok((above + below).div_euclid(2))
    } else {
        Ok(above + EXHAUSTED_GAP_STEP)
    }
}
