//! Chemical formula notation — splitting labels into display tokens.
//!
//! Two tokenizers share one [`Token`] type:
//!
//! - [`tokenize`] reads ion labels (`Ba2+`, `PO4 3-`, `Li+PO4 3-`) and
//!   recognises element text, stoichiometric subscripts and charges.
//! - [`tokenize_reaction`] reads reaction equations
//!   (`BaCl2 + Na2SO4 → BaSO4↓ + 2NaCl`) and only ever splits out digit
//!   runs. It has no notion of charge, so `+` between reactants stays text.
//!
//! Neither function fails. Input that does not follow the notation is
//! under-segmented: it comes back as coarser symbol tokens.
//!
//! [`render`] turns token sequences into display strings.

mod ion;
mod reaction;
pub mod render;
mod token;

pub use ion::tokenize;
pub use reaction::tokenize_reaction;
pub use token::{Token, TokenKind, concat};
