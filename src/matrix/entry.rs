//! One anion row of the matrix.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::SolubilityStatus;
use crate::base::IonLabel;
use crate::error::DatasetError;

/// A row of the table: the statuses of one anion against every cation.
///
/// Rows built with [`SolubilityEntry::new`] may be sparse. Once a row is
/// part of a [`SolubilityMatrix`](super::SolubilityMatrix) it holds exactly
/// one status per cation, in axis order, with `Empty` for the gaps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolubilityEntry {
    anion: IonLabel,
    results: IndexMap<IonLabel, SolubilityStatus>,
}

impl SolubilityEntry {
    /// Create a row. A cation listed twice with the same spelling keeps its
    /// last status; spellings that differ only in whitespace are rejected
    /// when the row joins a matrix.
    pub fn new<C>(
        anion: impl Into<IonLabel>,
        results: impl IntoIterator<Item = (C, SolubilityStatus)>,
    ) -> Self
    where
        C: Into<IonLabel>,
    {
        Self {
            anion: anion.into(),
            results: results.into_iter().map(|(c, s)| (c.into(), s)).collect(),
        }
    }

    pub fn anion(&self) -> &IonLabel {
        &self.anion
    }

    /// Status for `cation`, or `Empty` when the row has none.
    ///
    /// Matches the raw label first, then the whitespace-free form.
    pub fn status(&self, cation: &str) -> SolubilityStatus {
        if let Some(&status) = self.results.get(cation) {
            return status;
        }
        let wanted = crate::base::compact(cation);
        self.results
            .iter()
            .find(|(label, _)| label.compact() == wanted)
            .map(|(_, &status)| status)
            .unwrap_or_default()
    }

    /// Iterate `(cation, status)` pairs in row order.
    pub fn results(&self) -> impl Iterator<Item = (&IonLabel, SolubilityStatus)> + '_ {
        self.results.iter().map(|(cation, &status)| (cation, status))
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    #[inline]
    pub(crate) fn status_at(&self, column: usize) -> SolubilityStatus {
        self.results
            .get_index(column)
            .map(|(_, &status)| status)
            .unwrap_or_default()
    }

    /// Rebuild the row with one status per axis cation, in axis order.
    pub(crate) fn aligned(
        self,
        cations: &[IonLabel],
        cation_index: &FxHashMap<SmolStr, usize>,
    ) -> Result<Self, DatasetError> {
        let mut statuses = vec![SolubilityStatus::Empty; cations.len()];
        let mut filled: Vec<Option<&IonLabel>> = vec![None; cations.len()];
        for (cation, status) in &self.results {
            let Some(&column) = cation_index.get(&cation.compact()) else {
                return Err(DatasetError::UnknownCation {
                    anion: SmolStr::new(self.anion.as_str()),
                    cation: SmolStr::new(cation.as_str()),
                });
            };
            if let Some(first) = filled[column] {
                return Err(DatasetError::DuplicateResult {
                    anion: SmolStr::new(self.anion.as_str()),
                    first: SmolStr::new(first.as_str()),
                    second: SmolStr::new(cation.as_str()),
                });
            }
            filled[column] = Some(cation);
            statuses[column] = *status;
        }

        Ok(Self {
            anion: self.anion,
            results: cations.iter().cloned().zip(statuses).collect(),
        })
    }
}
