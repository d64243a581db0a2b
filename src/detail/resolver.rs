//! Resolving (cation, anion) pairs to detail cards.

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};
use smol_str::SmolStr;

use super::{CompoundDetail, CompoundKey, KeyStyle};
use crate::base::IonLabel;
use crate::error::DatasetError;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Index of detail cards by [`CompoundKey`].
///
/// Built once; lookups are plain map reads. Cards keep the order they
/// were supplied in.
#[derive(Clone, Debug, Default)]
pub struct CompoundKeyResolver {
    style: KeyStyle,
    details: FxIndexMap<CompoundKey, CompoundDetail>,
}

impl CompoundKeyResolver {
    /// Build a resolver with the default [`KeyStyle`].
    ///
    /// Each record is `(cation, anion, detail)`. Two records landing on the
    /// same key are rejected.
    pub fn new<C, A>(
        records: impl IntoIterator<Item = (C, A, CompoundDetail)>,
    ) -> Result<Self, DatasetError>
    where
        C: AsRef<str>,
        A: AsRef<str>,
    {
        Self::with_style(KeyStyle::default(), records)
    }

    pub fn with_style<C, A>(
        style: KeyStyle,
        records: impl IntoIterator<Item = (C, A, CompoundDetail)>,
    ) -> Result<Self, DatasetError>
    where
        C: AsRef<str>,
        A: AsRef<str>,
    {
        let mut details = FxIndexMap::default();
        for (cation, anion, detail) in records {
            let key = CompoundKey::new(cation.as_ref(), anion.as_ref(), style);
            if details.contains_key(&key) {
                let err = DatasetError::DuplicateDetail(key.into());
                tracing::warn!(error = %err, "rejected detail records");
                return Err(err);
            }
            details.insert(key, detail);
        }

        tracing::debug!(details = details.len(), ?style, "built compound key resolver");
        Ok(Self { style, details })
    }

    pub fn style(&self) -> KeyStyle {
        self.style
    }

    /// The key this resolver uses for (`cation`, `anion`).
    pub fn key_for(&self, cation: &str, anion: &str) -> CompoundKey {
        CompoundKey::new(cation, anion, self.style)
    }

    /// The card for (`cation`, `anion`), if there is one.
    pub fn detail_for(&self, cation: &str, anion: &str) -> Option<&CompoundDetail> {
        let key = self.key_for(cation, anion);
        let found = self.details.get(&key);
        if found.is_none() {
            tracing::trace!(%key, "no detail record");
        }
        found
    }

    pub fn has_detail(&self, cation: &str, anion: &str) -> bool {
        self.details.contains_key(&self.key_for(cation, anion))
    }

    /// Iterate `(key, detail)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&CompoundKey, &CompoundDetail)> + '_ {
        self.details.iter()
    }

    pub fn len(&self) -> usize {
        self.details.len()
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    /// Check the key scheme against the table axes.
    ///
    /// Fails if two distinct (cation, anion) pairs produce the same key, or
    /// if a card's key is not produced by any pair (it could never be
    /// shown).
    pub fn validate_against(
        &self,
        cations: &[IonLabel],
        anions: &[IonLabel],
    ) -> Result<(), DatasetError> {
        let mut produced: FxHashMap<CompoundKey, (&str, &str)> = FxHashMap::default();
        produced.reserve(cations.len() * anions.len());

        for cation in cations {
            for anion in anions {
                let key = self.key_for(cation.as_str(), anion.as_str());
                let pair = (cation.as_str(), anion.as_str());
                if let Some(&first) = produced.get(&key) {
                    let err = DatasetError::ambiguous(key.as_str(), first, pair);
                    tracing::warn!(error = %err, "ambiguous compound key");
                    return Err(err);
                }
                produced.insert(key, pair);
            }
        }

        if let Some(orphan) = self.details.keys().find(|key| !produced.contains_key(*key)) {
            let err = DatasetError::DetailOutsideAxes(SmolStr::new(orphan.as_str()));
            tracing::warn!(error = %err, "unreachable detail record");
            return Err(err);
        }

        tracing::debug!(pairs = produced.len(), "compound keys are unambiguous");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str) -> CompoundDetail {
        CompoundDetail {
            name: name.into(),
            formula: name.into(),
            image_ref: "".into(),
            preparation_method: "".into(),
            preparation_reaction: "".into(),
            description: "".into(),
        }
    }

    fn labels(items: &[&str]) -> Vec<IonLabel> {
        items.iter().copied().map(IonLabel::from).collect()
    }

    #[test]
    fn test_detail_for() {
        let resolver = CompoundKeyResolver::new([("Ag+", "Cl-", card("AgCl"))]).unwrap();
        assert_eq!(resolver.detail_for("Ag+", "Cl-").map(|d| &*d.name), Some("AgCl"));
        assert!(resolver.detail_for("Na+", "Cl-").is_none());
        assert!(resolver.detail_for("Cl-", "Ag+").is_none());
    }

    #[test]
    fn test_compact_style_tolerates_spacing() {
        let resolver = CompoundKeyResolver::new([("Li+", "PO4 3-", card("Li3PO4"))]).unwrap();
        assert!(resolver.has_detail("Li+", "PO4 3-"));
        assert!(resolver.has_detail("Li+", "PO43-"));
        assert!(resolver.has_detail("Li +", " PO4  3-"));
    }

    #[test]
    fn test_exact_style_is_strict() {
        let resolver =
            CompoundKeyResolver::with_style(KeyStyle::Exact, [("Li+", "PO4 3-", card("Li3PO4"))])
                .unwrap();
        assert!(resolver.has_detail("Li+", "PO4 3-"));
        assert!(!resolver.has_detail("Li+", "PO43-"));
    }

    #[test]
    fn test_duplicate_detail_rejected() {
        let err = CompoundKeyResolver::new([
            ("Li+", "PO4 3-", card("a")),
            ("Li+", "PO43-", card("b")),
        ])
        .unwrap_err();
        assert_eq!(err, DatasetError::DuplicateDetail("Li+PO43-".into()));
    }

    #[test]
    fn test_validate_detects_ambiguity() {
        let resolver = CompoundKeyResolver::default();
        let err = resolver
            .validate_against(&labels(&["A", "AB"]), &labels(&["BC", "C"]))
            .unwrap_err();
        assert!(matches!(err, DatasetError::AmbiguousKey { ref key, .. } if key == "ABC"));
    }

    #[test]
    fn test_validate_detects_orphan_detail() {
        let resolver = CompoundKeyResolver::new([("K+", "Cl-", card("KCl"))]).unwrap();
        let err = resolver
            .validate_against(&labels(&["Na+"]), &labels(&["Cl-"]))
            .unwrap_err();
        assert_eq!(err, DatasetError::DetailOutsideAxes("K+Cl-".into()));
    }

    #[test]
    fn test_validate_accepts_real_axes() {
        let resolver = CompoundKeyResolver::new([("Ag+", "Cl-", card("AgCl"))]).unwrap();
        resolver
            .validate_against(&labels(&["Na+", "Ag+", "Ba2+"]), &labels(&["Cl-", "SO4 2-"]))
            .unwrap();
    }
}
