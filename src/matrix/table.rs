//! The validated solubility grid.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::{SolubilityEntry, SolubilityStatus};
use crate::base::{IonLabel, compact};
use crate::error::DatasetError;

/// Cation × anion grid of [`SolubilityStatus`] values.
///
/// Immutable once built. Both axes keep the order they were given in, and
/// every row holds exactly one status per cation. Labels are matched on
/// their whitespace-free form, so `lookup("Li+", "PO43-")` and
/// `lookup("Li+", "PO4 3-")` read the same cell.
#[derive(Clone, Debug)]
pub struct SolubilityMatrix {
    cations: Vec<IonLabel>,
    anions: Vec<IonLabel>,
    rows: Vec<SolubilityEntry>,
    /// Compact cation label → column
    cation_index: FxHashMap<SmolStr, usize>,
    /// Compact anion label → row
    anion_index: FxHashMap<SmolStr, usize>,
}

impl SolubilityMatrix {
    /// Build and validate a matrix.
    ///
    /// Rows may be sparse; missing cations become `Empty`. Fails on a blank
    /// or repeated label, or on a row naming a cation not on the axis.
    pub fn new<C>(
        cations: impl IntoIterator<Item = C>,
        rows: impl IntoIterator<Item = SolubilityEntry>,
    ) -> Result<Self, DatasetError>
    where
        C: Into<IonLabel>,
    {
        let cations: Vec<IonLabel> = cations.into_iter().map(Into::into).collect();
        let mut cation_index = FxHashMap::default();
        for (column, cation) in cations.iter().enumerate() {
            if cation.is_blank() {
                return Err(reject(DatasetError::BlankLabel { axis: "cation" }));
            }
            if cation_index.insert(cation.compact(), column).is_some() {
                return Err(reject(DatasetError::DuplicateCation(cation.compact())));
            }
        }

        let mut anions = Vec::new();
        let mut aligned = Vec::new();
        let mut anion_index = FxHashMap::default();
        for row in rows {
            if row.anion().is_blank() {
                return Err(reject(DatasetError::BlankLabel { axis: "anion" }));
            }
            if anion_index.insert(row.anion().compact(), aligned.len()).is_some() {
                return Err(reject(DatasetError::DuplicateAnion(row.anion().compact())));
            }
            anions.push(row.anion().clone());
            aligned.push(row.aligned(&cations, &cation_index).map_err(reject)?);
        }

        tracing::debug!(
            cations = cations.len(),
            anions = anions.len(),
            "built solubility matrix"
        );

        Ok(Self {
            cations,
            anions,
            rows: aligned,
            cation_index,
            anion_index,
        })
    }

    /// Cation axis, in column order.
    pub fn cations(&self) -> &[IonLabel] {
        &self.cations
    }

    /// Anion axis, in row order.
    pub fn anions(&self) -> &[IonLabel] {
        &self.anions
    }

    /// Both axes: `(cations, anions)`.
    pub fn axes(&self) -> (&[IonLabel], &[IonLabel]) {
        (&self.cations, &self.anions)
    }

    pub fn rows(&self) -> &[SolubilityEntry] {
        &self.rows
    }

    /// The row for `anion`, or `None` if it is not on the axis.
    pub fn row_for(&self, anion: &str) -> Option<&SolubilityEntry> {
        let row = *self.anion_index.get(&compact(anion))?;
        self.rows.get(row)
    }

    /// Status of the (`cation`, `anion`) cell.
    ///
    /// Defined for every pair of strings: anything off the axes is `Empty`.
    pub fn lookup(&self, cation: &str, anion: &str) -> SolubilityStatus {
        let Some(column) = self.cation_index.get(&compact(cation)) else {
            return SolubilityStatus::Empty;
        };
        self.row_for(anion)
            .map(|row| row.status_at(*column))
            .unwrap_or_default()
    }

    /// All `(anion, status)` pairs for one cation, in row order.
    ///
    /// Empty when the cation is not on the axis.
    pub fn column_for(&self, cation: &str) -> Vec<(&IonLabel, SolubilityStatus)> {
        let Some(&column) = self.cation_index.get(&compact(cation)) else {
            return Vec::new();
        };
        self.rows
            .iter()
            .map(|row| (row.anion(), row.status_at(column)))
            .collect()
    }

    /// Number of cells holding `status`.
    pub fn count(&self, status: SolubilityStatus) -> usize {
        self.rows
            .iter()
            .flat_map(SolubilityEntry::results)
            .filter(|(_, s)| *s == status)
            .count()
    }

    pub fn contains_cation(&self, cation: &str) -> bool {
        self.cation_index.contains_key(&compact(cation))
    }

    pub fn contains_anion(&self, anion: &str) -> bool {
        self.anion_index.contains_key(&compact(anion))
    }
}

fn reject(err: DatasetError) -> DatasetError {
    tracing::warn!(error = %err, "rejected solubility matrix");
    err
}
