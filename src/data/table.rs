//! Built-in axes and solubility grid.

use crate::matrix::SolubilityStatus;

const R: SolubilityStatus = SolubilityStatus::Soluble;
const M: SolubilityStatus = SolubilityStatus::SlightlySoluble;
const N: SolubilityStatus = SolubilityStatus::Insoluble;
const D: SolubilityStatus = SolubilityStatus::Decomposes;
const U: SolubilityStatus = SolubilityStatus::Unknown;
const E: SolubilityStatus = SolubilityStatus::Empty;

pub const CATIONS: [&str; 22] = [
    "H+", "Li+", "K+", "Na+", "NH4 +", "Ba2+", "Ca2+", "Mg2+", "Sr2+", "Al3+", "Cr3+", "Fe2+",
    "Fe3+", "Ni2+", "Co2+", "Mn2+", "Zn2+", "Ag+", "Hg2+", "Pb2+", "Sn2+", "Cu2+",
];

/// One row per anion; statuses follow [`CATIONS`] column by column.
#[rustfmt::skip]
pub const ROWS: [(&str, [SolubilityStatus; 22]); 20] = [
    //              H  Li K  Na NH4 Ba Ca Mg Sr Al Cr Fe2 Fe3 Ni Co Mn Zn Ag Hg Pb Sn Cu
    ("OH-",       [E, R, R, R, R, R, M, N, M, N, N, N, N, N, N, N, N, D, D, N, N, N]),
    ("F-",        [R, M, R, R, R, M, N, M, M, M, N, N, N, R, R, M, M, R, D, N, R, R]),
    ("Cl-",       [R, R, R, R, R, R, R, R, R, R, R, R, R, R, R, R, R, N, R, M, R, R]),
    ("Br-",       [R, R, R, R, R, R, R, R, R, R, R, R, R, R, R, R, R, N, M, M, R, R]),
    ("I-",        [R, R, R, R, R, R, R, R, R, R, U, R, U, R, R, R, R, N, N, N, M, U]),
    ("S2-",       [R, R, R, R, R, R, M, D, R, D, D, N, D, N, N, N, N, N, N, N, N, N]),
    ("HS-",       [R, R, R, R, R, R, R, R, R, D, D, N, D, N, N, N, N, N, N, N, N, N]),
    ("SO3 2-",    [R, R, R, R, R, N, N, M, N, D, D, M, D, N, N, N, M, N, N, N, U, N]),
    ("HSO3 -",    [R, R, R, R, R, R, R, R, R, U, U, R, U, U, U, U, U, U, U, R, U, U]),
    ("SO4 2-",    [R, R, R, R, R, N, M, R, N, R, R, R, R, R, R, R, R, M, D, N, R, R]),
    ("HSO4 -",    [R, R, R, R, R, U, U, U, U, U, U, U, U, U, U, U, U, U, U, M, U, U]),
    ("NO3 -",     [R, R, R, R, R, R, R, R, R, R, R, R, R, R, R, R, R, R, R, R, U, R]),
    ("NO2 -",     [R, R, R, R, R, R, R, R, R, U, U, U, U, M, M, U, U, M, U, U, U, U]),
    ("PO4 3-",    [R, N, R, R, R, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N]),
    ("HPO4 2-",   [R, U, R, R, R, N, N, M, N, U, U, N, U, U, U, U, U, U, U, M, N, U]),
    ("H2PO4 -",   [R, R, R, R, R, R, R, R, R, U, U, R, U, U, U, U, U, U, U, U, U, U]),
    ("CO3 2-",    [D, R, R, R, R, N, N, N, N, D, D, N, D, N, N, N, N, N, D, N, D, D]),
    ("HCO3 -",    [D, R, R, R, R, R, R, R, R, U, U, R, U, U, U, U, U, U, U, R, U, U]),
    ("CH3COO-",   [R, R, R, R, R, R, R, R, R, M, R, R, D, R, R, R, R, R, R, R, D, R]),
    ("SiO3 2-",   [N, R, R, R, D, N, N, N, N, U, U, N, U, U, U, N, N, U, U, N, U, U]),
];
