//! Foundation types for the solubility toolkit.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`IonLabel`] - An ion or compound label as written in the table
//!
//! This module has NO dependencies on other stq modules.

mod label;

pub use label::IonLabel;
pub(crate) use label::compact;

// Re-export smol_str for convenience
pub use smol_str;
