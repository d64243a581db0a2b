//! The reference dataset: matrix, detail cards and activity series.
//!
//! A [`Dataset`] is validated once when it is built and never changes
//! afterwards. Build it at startup and share it by reference; every query
//! on it is a pure read.

mod activity;
mod details;
mod table;

pub use activity::{ActivitySeries, HYDROGEN, METAL_ACTIVITY};
pub use table::{CATIONS, ROWS};

use crate::base::IonLabel;
use crate::detail::{CompoundDetail, CompoundKey, CompoundKeyResolver};
use crate::error::DatasetError;
use crate::matrix::{SolubilityEntry, SolubilityMatrix, SolubilityStatus};

/// The complete, validated reference data.
#[derive(Clone, Debug)]
pub struct Dataset {
    matrix: SolubilityMatrix,
    resolver: CompoundKeyResolver,
    activity: ActivitySeries,
}

impl Dataset {
    /// Combine the parts, checking that the detail keys are unambiguous
    /// over the matrix axes and that every card belongs to a cell.
    pub fn new(
        matrix: SolubilityMatrix,
        resolver: CompoundKeyResolver,
        activity: ActivitySeries,
    ) -> Result<Self, DatasetError> {
        resolver.validate_against(matrix.cations(), matrix.anions())?;
        tracing::debug!(
            cations = matrix.cations().len(),
            anions = matrix.anions().len(),
            details = resolver.len(),
            "dataset ready"
        );
        Ok(Self {
            matrix,
            resolver,
            activity,
        })
    }

    /// The embedded reference table.
    pub fn builtin() -> Result<Self, DatasetError> {
        let rows = ROWS.iter().map(|(anion, statuses)| {
            SolubilityEntry::new(*anion, CATIONS.iter().copied().zip(*statuses))
        });
        let matrix = SolubilityMatrix::new(CATIONS, rows)?;
        let resolver = CompoundKeyResolver::new(details::records())?;
        Self::new(matrix, resolver, ActivitySeries::builtin())
    }

    pub fn matrix(&self) -> &SolubilityMatrix {
        &self.matrix
    }

    pub fn resolver(&self) -> &CompoundKeyResolver {
        &self.resolver
    }

    pub fn activity_series(&self) -> &ActivitySeries {
        &self.activity
    }

    /// `(cations, anions)` in display order.
    pub fn axes(&self) -> (&[IonLabel], &[IonLabel]) {
        self.matrix.axes()
    }

    pub fn lookup(&self, cation: &str, anion: &str) -> SolubilityStatus {
        self.matrix.lookup(cation, anion)
    }

    pub fn row_for(&self, anion: &str) -> Option<&SolubilityEntry> {
        self.matrix.row_for(anion)
    }

    pub fn key_for(&self, cation: &str, anion: &str) -> CompoundKey {
        self.resolver.key_for(cation, anion)
    }

    pub fn detail_for(&self, cation: &str, anion: &str) -> Option<&CompoundDetail> {
        self.resolver.detail_for(cation, anion)
    }

    pub fn has_detail(&self, cation: &str, anion: &str) -> bool {
        self.resolver.has_detail(cation, anion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let dataset = Dataset::builtin().unwrap();
        let (cations, anions) = dataset.axes();
        assert_eq!(cations.len(), CATIONS.len());
        assert_eq!(anions.len(), ROWS.len());
        assert_eq!(dataset.resolver().len(), 6);
    }

    #[test]
    fn test_detail_cells_are_precipitates() {
        let dataset = Dataset::builtin().unwrap();
        for (cation, anion, _) in details::records() {
            assert_eq!(
                dataset.lookup(cation, anion),
                SolubilityStatus::Insoluble,
                "{cation}{anion}"
            );
        }
    }

    #[test]
    fn test_orphan_detail_rejected() {
        let row = SolubilityEntry::new("Cl-", [("Na+", SolubilityStatus::Soluble)]);
        let matrix = SolubilityMatrix::new(["Na+"], [row]).unwrap();
        let resolver = CompoundKeyResolver::new(details::records()).unwrap();
        let err = Dataset::new(matrix, resolver, ActivitySeries::builtin()).unwrap_err();
        assert!(matches!(err, DatasetError::DetailOutsideAxes(_)));
    }
}
