//! JSON interchange for the reference dataset.
//!
//! Enabled with the `interchange` feature. Loading runs the same
//! validation as [`Dataset::new`](crate::data::Dataset::new), so a document
//! that would produce an ambiguous key or a stray detail card is refused.
//!
//! ```ignore
//! let json = stq::interchange::to_json(&dataset)?;
//! let copy = stq::interchange::from_json(&json)?;
//! ```

mod document;

pub use document::{DatasetDocument, DetailDocument, RowDocument};

use crate::data::Dataset;
use crate::error::DatasetError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid dataset document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unrecognised solubility status '{glyph}' for {cation} / {anion}")]
    UnknownStatus {
        anion: String,
        cation: String,
        glyph: String,
    },

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Serialise a dataset as pretty-printed JSON.
pub fn to_json(dataset: &Dataset) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(&DatasetDocument::from_dataset(dataset))?)
}

/// Parse and validate a dataset from JSON.
pub fn from_json(json: &str) -> Result<Dataset, Error> {
    let document: DatasetDocument = serde_json::from_str(json)?;
    document.into_dataset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ActivitySeries;
    use crate::detail::{CompoundKeyResolver, KeyStyle};
    use crate::matrix::SolubilityStatus;

    #[test]
    fn test_builtin_survives_json() {
        let dataset = Dataset::builtin().unwrap();
        let json = to_json(&dataset).unwrap();
        let loaded = from_json(&json).unwrap();

        assert_eq!(loaded.axes(), dataset.axes());
        assert_eq!(loaded.lookup("Ba2+", "SO4 2-"), SolubilityStatus::Insoluble);
        assert_eq!(loaded.lookup("H+", "OH-"), SolubilityStatus::Empty);
        assert_eq!(loaded.detail_for("Ag+", "Cl-"), dataset.detail_for("Ag+", "Cl-"));
        assert_eq!(loaded.activity_series(), dataset.activity_series());
    }

    #[test]
    fn test_exact_key_style_survives_json() {
        let builtin = Dataset::builtin().unwrap();
        let details = builtin
            .resolver()
            .iter()
            .map(|(_, detail)| ("Li+", "PO4 3-", detail.clone()))
            .take(1);
        let resolver = CompoundKeyResolver::with_style(KeyStyle::Exact, details).unwrap();
        let dataset =
            Dataset::new(builtin.matrix().clone(), resolver, ActivitySeries::builtin()).unwrap();
        assert!(!dataset.has_detail("Li+", "PO43-"));

        let loaded = from_json(&to_json(&dataset).unwrap()).unwrap();
        assert_eq!(loaded.resolver().style(), KeyStyle::Exact);
        assert!(loaded.has_detail("Li+", "PO4 3-"));
        assert!(!loaded.has_detail("Li+", "PO43-"));
    }

    #[test]
    fn test_missing_key_style_defaults_to_compact() {
        let json = r#"{ "cations": ["Na+"], "rows": [] }"#;
        let loaded = from_json(json).unwrap();
        assert_eq!(loaded.resolver().style(), KeyStyle::Compact);
    }

    #[test]
    fn test_unknown_glyph_rejected() {
        let json = r#"{
            "cations": ["Na+"],
            "rows": [{ "anion": "Cl-", "results": { "Na+": "X" } }]
        }"#;
        let err = from_json(json).unwrap_err();
        assert!(matches!(err, Error::UnknownStatus { ref glyph, .. } if glyph == "X"));
    }

    #[test]
    fn test_invalid_dataset_rejected() {
        let json = r#"{
            "cations": ["Na+"],
            "rows": [
                { "anion": "Cl-", "results": {} },
                { "anion": "Cl-", "results": {} }
            ]
        }"#;
        let err = from_json(json).unwrap_err();
        assert!(matches!(err, Error::Dataset(DatasetError::DuplicateAnion(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(from_json("{"), Err(Error::Json(_))));
    }
}
