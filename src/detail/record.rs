//! Detail card contents.

use std::sync::Arc;

use crate::formula::{Token, tokenize, tokenize_reaction};

/// Reference card for one compound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompoundDetail {
    /// Display name, e.g. "Күміс хлориді".
    pub name: Arc<str>,
    /// Formula in ion-label notation, e.g. `Mg(OH)2`.
    pub formula: Arc<str>,
    /// Image location. Opaque to this crate.
    pub image_ref: Arc<str>,
    /// How the compound is prepared, in prose.
    pub preparation_method: Arc<str>,
    /// Preparation reaction, e.g. `AgNO3 + NaCl → AgCl↓ + NaNO3`.
    pub preparation_reaction: Arc<str>,
    pub description: Arc<str>,
}

impl CompoundDetail {
    /// The formula split for display.
    pub fn formula_tokens(&self) -> Vec<Token> {
        tokenize(&self.formula)
    }

    /// The preparation reaction split for display. Uses the reaction
    /// tokenizer, so `+` between reactants stays plain text.
    pub fn reaction_tokens(&self) -> Vec<Token> {
        tokenize_reaction(&self.preparation_reaction)
    }
}
