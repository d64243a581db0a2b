//! Per-compound detail cards and the composite keys that address them.
//!
//! A detail card is found by concatenating the cation label and the anion
//! label (cation first) into a [`CompoundKey`]. Most cells have no card;
//! that is a normal `None`, not an error.
//!
//! Keys are built in one of two [`KeyStyle`]s. The default, `Compact`,
//! removes whitespace from both labels first, so the table's `"PO4 3-"` and
//! a hand-typed `"PO43-"` address the same card.

mod key;
mod record;
mod resolver;

pub use key::{CompoundKey, KeyStyle, key_for};
pub use record::CompoundDetail;
pub use resolver::CompoundKeyResolver;
