//! Table cells with their status and detail card.

use smol_str::SmolStr;

use crate::data::Dataset;
use crate::detail::CompoundDetail;
use crate::matrix::SolubilityStatus;

/// One cell of the rendered table.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell<'a> {
    pub cation: SmolStr,
    pub anion: SmolStr,
    pub status: SolubilityStatus,
    pub detail: Option<&'a CompoundDetail>,
}

impl Cell<'_> {
    pub fn has_detail(&self) -> bool {
        self.detail.is_some()
    }

    /// A cell opens a detail card only if it is drawn and has one.
    pub fn is_clickable(&self) -> bool {
        self.status.is_rendered() && self.has_detail()
    }
}

/// The cell for (`cation`, `anion`). Defined for any pair of strings.
pub fn cell<'a>(dataset: &'a Dataset, cation: &str, anion: &str) -> Cell<'a> {
    Cell {
        cation: SmolStr::new(cation),
        anion: SmolStr::new(anion),
        status: dataset.lookup(cation, anion),
        detail: dataset.detail_for(cation, anion),
    }
}

/// Cells of one anion row in cation order; empty if the anion is unknown.
pub fn row_cells<'a>(dataset: &'a Dataset, anion: &str) -> Vec<Cell<'a>> {
    let Some(row) = dataset.row_for(anion) else {
        return Vec::new();
    };
    row.results()
        .map(|(cation, status)| Cell {
            cation: SmolStr::new(cation.as_str()),
            anion: SmolStr::new(row.anion().as_str()),
            status,
            detail: dataset.detail_for(cation.as_str(), row.anion().as_str()),
        })
        .collect()
}

/// Every row of cells, in anion order.
pub fn grid(dataset: &Dataset) -> Vec<Vec<Cell<'_>>> {
    let (_, anions) = dataset.axes();
    anions
        .iter()
        .map(|anion| row_cells(dataset, anion.as_str()))
        .collect()
}
