//! # solubility-core
//!
//! Core library behind a solubility reference table: the cation × anion
//! solubility matrix, per-compound detail cards, and the tokenizer that
//! splits chemical formula labels for display.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! view         → Cells, selection highlighting for a table renderer
//!   ↓
//! data         → Built-in reference dataset, validated as a whole
//!   ↓
//! detail       → Compound keys, detail cards, key resolver
//! matrix       → Solubility statuses, rows, the grid
//!   ↓
//! formula      → Ion-label and reaction tokenizers, rendering
//!   ↓
//! base         → Primitives (IonLabel)
//! ```
//!
//! `interchange` (feature `interchange`) loads and saves a dataset as JSON.
//!
//! ## Quick start
//!
//! ```
//! use stq::{Dataset, SolubilityStatus, tokenize};
//!
//! let dataset = Dataset::builtin().expect("built-in data is valid");
//! assert_eq!(dataset.lookup("Ag+", "Cl-"), SolubilityStatus::Insoluble);
//! assert!(dataset.detail_for("Na+", "Cl-").is_none());
//!
//! let tokens = tokenize("PO4 3-");
//! assert_eq!(tokens.len(), 3);
//! ```

/// Foundation types: IonLabel
pub mod base;

/// Formula tokenizers and token rendering
pub mod formula;

/// Solubility matrix model
pub mod matrix;

/// Compound keys and detail cards
pub mod detail;

/// Built-in reference dataset
pub mod data;

/// Presentation helpers
pub mod view;

mod error;

#[cfg(feature = "interchange")]
pub mod interchange;

pub use base::IonLabel;
pub use data::{ActivitySeries, Dataset};
pub use detail::{CompoundDetail, CompoundKey, CompoundKeyResolver, KeyStyle, key_for};
pub use error::DatasetError;
pub use formula::{Token, TokenKind, tokenize, tokenize_reaction};
pub use matrix::{LEGEND, SolubilityEntry, SolubilityMatrix, SolubilityStatus};
