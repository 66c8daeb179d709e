pub mod order;
pub mod points;
pub mod reorder;
