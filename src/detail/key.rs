//! Composite cation+anion keys.

use smol_str::SmolStr;
use std::fmt;

/// How labels are turned into a key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(rename_all = "lowercase"))]
pub enum KeyStyle {
    /// Whitespace is removed from both labels before concatenation.
    #[default]
    Compact,
    /// Labels are concatenated exactly as given.
    Exact,
}

/// The concatenation of a cation label and an anion label.
///
/// Building a key never checks that it is unambiguous. That property
/// belongs to the axis lists and is checked once, by
/// [`CompoundKeyResolver::validate_against`](super::CompoundKeyResolver::validate_against).
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct CompoundKey(SmolStr);

impl CompoundKey {
    pub fn new(cation: &str, anion: &str, style: KeyStyle) -> Self {
        let joined: SmolStr = match style {
            KeyStyle::Compact => cation
                .chars()
                .chain(anion.chars())
                .filter(|c| !c.is_whitespace())
                .collect(),
            KeyStyle::Exact => {
                let mut joined = String::with_capacity(cation.len() + anion.len());
                joined.push_str(cation);
                joined.push_str(anion);
                SmolStr::from(joined)
            }
        };
        Self(joined)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Key for (`cation`, `anion`) in the default [`KeyStyle`].
///
/// ```
/// assert_eq!(stq::detail::key_for("Ag+", "Cl-").as_str(), "Ag+Cl-");
/// ```
pub fn key_for(cation: &str, anion: &str) -> CompoundKey {
    CompoundKey::new(cation, anion, KeyStyle::default())
}

impl fmt::Debug for CompoundKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompoundKey({:?})", self.0.as_str())
    }
}

impl fmt::Display for CompoundKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::borrow::Borrow<str> for CompoundKey {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<CompoundKey> for SmolStr {
    fn from(key: CompoundKey) -> Self {
        key.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_cation_first() {
        assert_eq!(key_for("Ag+", "Cl-").as_str(), "Ag+Cl-");
        assert_ne!(key_for("Ag+", "Cl-"), key_for("Cl-", "Ag+"));
    }

    #[test]
    fn test_compact_style_strips_whitespace() {
        assert_eq!(key_for("Li+", "PO4 3-").as_str(), "Li+PO43-");
        assert_eq!(key_for("Li+", "PO4 3-"), key_for("Li+", "PO43-"));
    }

    #[test]
    fn test_exact_style_keeps_text() {
        let key = CompoundKey::new("Li+", "PO4 3-", KeyStyle::Exact);
        assert_eq!(key.as_str(), "Li+PO4 3-");
    }
}
