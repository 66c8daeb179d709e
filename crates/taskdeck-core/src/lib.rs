//! # Taskdeck Core Library
//!
//! This library implements the ordering and prioritization engine of the
//! Taskdeck task manager. The surrounding product (request handling,
//! persistence, rendering) calls into it as plain in-process functions;
//! nothing here performs I/O, blocks, or reads the clock more than once per
//! ordering pass.
//!
//! ## Key Components
//!
//! - [`points`]: bounded priority score derived from importance/complexity
//! - [`DayContext`]: single captured instant driving all day-relative logic
//! - [`Category`] / [`categorize`]: six-way day-relative classification
//! - [`ordered_task_list`]: the one authority for final display order
//! - [`reordered_position`]: sparse sibling ordering keys, one write per move
//!
//! Every function is pure and safe to call concurrently. Serializing
//! concurrent reorders of the same sibling group is the caller's job.

pub mod category;
pub mod day_context;
pub mod error;
pub mod ordering;
pub mod points;
pub mod position;
pub mod task;

pub use category::{categorize, effective_date, is_collected_task, Category};
pub use day_context::{is_date_urgent, normalize_date, parse_date, DayContext};
pub use error::{DateError, EngineError, Result, ValidationError};
pub use ordering::{compare_priority, ordered_task_list};
pub use points::{
    compute_points, default_task_values, is_collected_defaults, validate_complexity,
    validate_importance, validated_task_values, TaskValues,
};
pub use position::{initial_position, reordered_position, POSITION_SEED, POSITION_STEP};
pub use task::Task;
