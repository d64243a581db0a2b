//! View helpers — what a table renderer needs per cell.
//!
//! Like the rest of the crate these are pure functions: data in, data out.
//! Selection state belongs to the caller; [`Selection`] only describes it.

mod cells;
mod selection;

pub use cells::{Cell, cell, grid, row_cells};
pub use selection::{Highlight, Selection};
