//! Regression tests against the built-in reference dataset.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rstest::rstest;
use stq::view::{self, Highlight, Selection};
use stq::{Dataset, IonLabel, KeyStyle, LEGEND, SolubilityStatus, key_for};

static DATASET: Lazy<Dataset> = Lazy::new(|| Dataset::builtin().expect("built-in dataset is valid"));

#[test]
fn test_axes_have_no_duplicates() {
    let (cations, anions) = DATASET.axes();
    let mut seen = std::collections::HashSet::new();
    assert!(cations.iter().all(|c| seen.insert(c.compact())));
    seen.clear();
    assert!(anions.iter().all(|a| seen.insert(a.compact())));
}

#[test]
fn test_every_row_covers_every_cation() {
    let (cations, _) = DATASET.axes();
    for row in DATASET.matrix().rows() {
        let row_cations: Vec<&IonLabel> = row.results().map(|(c, _)| c).collect();
        assert_eq!(row_cations.len(), cations.len(), "row {}", row.anion());
        assert!(row_cations.iter().zip(cations).all(|(a, b)| *a == b));
    }
}

#[test]
fn test_compound_keys_are_unambiguous() {
    let (cations, anions) = DATASET.axes();
    for style in [KeyStyle::Compact, KeyStyle::Exact] {
        let mut produced = HashMap::new();
        for cation in cations {
            for anion in anions {
                let key = stq::CompoundKey::new(cation.as_str(), anion.as_str(), style);
                let previous = produced.insert(key.clone(), (cation, anion));
                assert!(previous.is_none(), "{key} produced twice ({style:?})");
            }
        }
        assert_eq!(produced.len(), cations.len() * anions.len());
    }
}

#[rstest]
#[case("Ag+", "Cl-", SolubilityStatus::Insoluble)]
#[case("Na+", "Cl-", SolubilityStatus::Soluble)]
#[case("Pb2+", "Cl-", SolubilityStatus::SlightlySoluble)]
#[case("Ag+", "OH-", SolubilityStatus::Decomposes)]
#[case("Cr3+", "I-", SolubilityStatus::Unknown)]
#[case("H+", "OH-", SolubilityStatus::Empty)]
#[case("Ba2+", "SO4 2-", SolubilityStatus::Insoluble)]
#[case("Ba2+", "SO42-", SolubilityStatus::Insoluble)]
#[case("NH4+", "NO3-", SolubilityStatus::Soluble)]
fn test_lookup(#[case] cation: &str, #[case] anion: &str, #[case] status: SolubilityStatus) {
    assert_eq!(DATASET.lookup(cation, anion), status);
}

#[rstest]
#[case("Xx+", "Cl-")]
#[case("Na+", "Xx-")]
#[case("", "")]
#[case("Cl-", "Na+")]
fn test_lookup_off_axes_is_empty(#[case] cation: &str, #[case] anion: &str) {
    assert_eq!(DATASET.lookup(cation, anion), SolubilityStatus::Empty);
}

#[test]
fn test_key_for_concatenates() {
    assert_eq!(key_for("Ag+", "Cl-").as_str(), "Ag+Cl-");
    assert_eq!(DATASET.key_for("Ag+", "Cl-").as_str(), "Ag+Cl-");
}

#[rstest]
#[case("Ag+", "Cl-", "AgCl")]
#[case("Li+", "PO4 3-", "Li3PO4")]
#[case("Ba2+", "SO4 2-", "BaSO4")]
#[case("Pb2+", "I-", "PbI2")]
#[case("Mg2+", "OH-", "Mg(OH)2")]
#[case("Ca2+", "CO3 2-", "CaCO3")]
fn test_detail_for(#[case] cation: &str, #[case] anion: &str, #[case] formula: &str) {
    let detail = DATASET.detail_for(cation, anion).expect("detail card");
    assert_eq!(&*detail.formula, formula);
}

#[test]
fn test_silver_chloride_card() {
    let detail = DATASET.detail_for("Ag+", "Cl-").expect("detail card");
    assert_eq!(&*detail.name, "Күміс хлориді");
    assert_eq!(&*detail.preparation_reaction, "AgNO3 + NaCl → AgCl↓ + NaNO3");
}

#[test]
fn test_absent_detail() {
    assert!(DATASET.detail_for("Na+", "Cl-").is_none());
    assert!(DATASET.detail_for("Cl-", "Ag+").is_none());
    assert!(!DATASET.has_detail("K+", "NO3-"));
}

#[test]
fn test_queries_are_idempotent() {
    let (cations, anions) = DATASET.axes();
    for cation in cations {
        for anion in anions {
            let (c, a) = (cation.as_str(), anion.as_str());
            assert_eq!(DATASET.lookup(c, a), DATASET.lookup(c, a));
            assert_eq!(DATASET.detail_for(c, a), DATASET.detail_for(c, a));
        }
    }
}

#[test]
fn test_dataset_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| DATASET.lookup("Ag+", "Cl-")))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), SolubilityStatus::Insoluble);
    }
}

#[test]
fn test_every_detail_reaction_tokenizes_without_charges() {
    for (_, detail) in DATASET.resolver().iter() {
        assert!(detail.reaction_tokens().iter().all(|t| !t.is_charge()));
        assert!(!detail.formula_tokens().is_empty());
    }
}

#[test]
fn test_legend_statuses_appear_in_table() {
    for entry in LEGEND {
        assert!(DATASET.matrix().count(entry.status) > 0, "{:?}", entry.status);
    }
}

#[test]
fn test_view_selection_over_grid() {
    let mut selection = Selection::new();
    selection.toggle_cation("Ag+");
    selection.toggle_anion("Cl-");

    let grid = view::grid(&DATASET);
    let crossings = grid
        .iter()
        .flatten()
        .filter(|c| selection.highlight(&c.cation, &c.anion) == Highlight::Intersection)
        .count();
    assert_eq!(crossings, 1);
}

#[test]
fn test_activity_series() {
    let series = DATASET.activity_series();
    assert_eq!(series.displaces_hydrogen("Zn"), Some(true));
    assert_eq!(series.displaces_hydrogen("Ag"), Some(false));
    assert_eq!(series.is_more_active("K", "Na"), Some(true));
}
