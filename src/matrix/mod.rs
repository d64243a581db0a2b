//! The solubility matrix — cation × anion → solubility class.
//!
//! - [`SolubilityStatus`] - The closed set of cell values, with table glyphs
//! - [`LEGEND`] - Display legend for the rendered statuses
//! - [`SolubilityEntry`] - One anion row
//! - [`SolubilityMatrix`] - The validated, immutable grid

mod entry;
mod status;
mod table;

pub use entry::SolubilityEntry;
pub use status::{LEGEND, LegendEntry, SolubilityStatus};
pub use table::SolubilityMatrix;
