//! Serde mirror of a [`Dataset`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Error;
use crate::data::{ActivitySeries, Dataset};
use crate::detail::{CompoundDetail, CompoundKeyResolver, KeyStyle};
use crate::matrix::{SolubilityEntry, SolubilityMatrix, SolubilityStatus};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetDocument {
    pub cations: Vec<String>,
    pub rows: Vec<RowDocument>,
    #[serde(default)]
    pub details: Vec<DetailDocument>,
    /// Key style of the detail resolver; `compact` when absent.
    #[serde(default)]
    pub key_style: KeyStyle,
    /// Falls back to the built-in series when absent or empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub activity: Vec<String>,
}

/// One anion row. Cells are table glyphs; missing cations are empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowDocument {
    pub anion: String,
    #[serde(default)]
    pub results: IndexMap<String, String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailDocument {
    pub cation: String,
    pub anion: String,
    pub name: String,
    pub formula: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub reaction: String,
    #[serde(default)]
    pub description: String,
}

impl DatasetDocument {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let (cations, _) = dataset.axes();
        let rows = dataset
            .matrix()
            .rows()
            .iter()
            .map(|row| RowDocument {
                anion: row.anion().to_string(),
                results: row
                    .results()
                    .filter(|(_, status)| status.is_rendered())
                    .map(|(cation, status)| (cation.to_string(), status.symbol().to_owned()))
                    .collect(),
            })
            .collect();

        // Detail keys are derived, so recover each card's pair from the axes.
        let mut details = Vec::new();
        for cation in cations {
            for row in dataset.matrix().rows() {
                let anion = row.anion().as_str();
                if let Some(detail) = dataset.detail_for(cation.as_str(), anion) {
                    details.push(DetailDocument::from_detail(cation.as_str(), anion, detail));
                }
            }
        }

        Self {
            cations: cations.iter().map(ToString::to_string).collect(),
            rows,
            details,
            key_style: dataset.resolver().style(),
            activity: dataset
                .activity_series()
                .metals()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    pub fn into_dataset(self) -> Result<Dataset, Error> {
        let mut rows = Vec::with_capacity(self.rows.len());
        for row in self.rows {
            let mut results = Vec::with_capacity(row.results.len());
            for (cation, glyph) in row.results {
                let Some(status) = SolubilityStatus::parse_symbol(&glyph) else {
                    return Err(Error::UnknownStatus {
                        anion: row.anion,
                        cation,
                        glyph,
                    });
                };
                results.push((cation, status));
            }
            rows.push(SolubilityEntry::new(row.anion, results));
        }

        let matrix = SolubilityMatrix::new(self.cations, rows)?;
        let resolver = CompoundKeyResolver::with_style(
            self.key_style,
            self.details
                .into_iter()
                .map(|d| (d.cation.clone(), d.anion.clone(), d.into_detail())),
        )?;
        let activity = if self.activity.is_empty() {
            ActivitySeries::builtin()
        } else {
            ActivitySeries::new(self.activity)
        };

        Ok(Dataset::new(matrix, resolver, activity)?)
    }
}

impl DetailDocument {
    fn from_detail(cation: &str, anion: &str, detail: &CompoundDetail) -> Self {
        Self {
            cation: cation.to_owned(),
            anion: anion.to_owned(),
            name: detail.name.to_string(),
            formula: detail.formula.to_string(),
            image: detail.image_ref.to_string(),
            method: detail.preparation_method.to_string(),
            reaction: detail.preparation_reaction.to_string(),
            description: detail.description.to_string(),
        }
    }

    fn into_detail(self) -> CompoundDetail {
        CompoundDetail {
            name: self.name.into(),
            formula: self.formula.into(),
            image_ref: self.image.into(),
            preparation_method: self.method.into(),
            preparation_reaction: self.reaction.into(),
            description: self.description.into(),
        }
    }
}
