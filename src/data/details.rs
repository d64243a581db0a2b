//! Built-in detail cards for notable precipitates.

use crate::detail::CompoundDetail;

const IMAGE: &str = "https://images2.imgbox.com/71/6a/949ArOXg_o.jpg";

fn card(
    name: &str,
    formula: &str,
    method: &str,
    reaction: &str,
    description: &str,
) -> CompoundDetail {
    CompoundDetail {
        name: name.into(),
        formula: formula.into(),
        image_ref: IMAGE.into(),
        preparation_method: method.into(),
        preparation_reaction: reaction.into(),
        description: description.into(),
    }
}

/// `(cation, anion, card)` triples, labels spelled as on the table axes.
pub fn records() -> Vec<(&'static str, &'static str, CompoundDetail)> {
    vec![
        (
            "Li+",
            "PO4 3-",
            card(
                "Литий фосфаты",
                "Li3PO4",
                "Литий тұзының ерітіндісін фосфат иондарымен әрекеттестіру:",
                "3LiCl + Na3PO4 → Li3PO4↓ + 3NaCl",
                "Ақ түсті кристалдық ұнтақ. Суда нашар ериді, бірақ қышқылдарда жақсы ериді.",
            ),
        ),
        (
            "Ba2+",
            "SO4 2-",
            card(
                "Барий сульфаты",
                "BaSO4",
                "Барий иондары мен сульфат иондарының реакциясы:",
                "BaCl2 + Na2SO4 → BaSO4↓ + 2NaCl",
                "Ақ түсті, ауыр кристалдық зат. Қышқылдар мен суда мүлдем ерімейді деуге болады.",
            ),
        ),
        (
            "Ag+",
            "Cl-",
            card(
                "Күміс хлориді",
                "AgCl",
                "Күміс нитраты мен хлоридтердің әрекеттесуі:",
                "AgNO3 + NaCl → AgCl↓ + NaNO3",
                "Ақ түсті ірімшік тәрізді тұнба. Жарық әсерінен қараяды.",
            ),
        ),
        (
            "Pb2+",
            "I-",
            card(
                "Қорғасын (II) иодиді",
                "PbI2",
                "Қорғасын тұздары мен калий иодидінің реакциясы:",
                "Pb(NO3)2 + 2KI → PbI2↓ + 2KNO3",
                "Ашық сары түсті кристалдар. \"Алтын жаңбыр\" реакциясы ретінде белгілі.",
            ),
        ),
        (
            "Mg2+",
            "OH-",
            card(
                "Магний гидроксиді",
                "Mg(OH)2",
                "Магний тұздарының сілтілермен әрекеттесуі:",
                "MgCl2 + 2NaOH → Mg(OH)2↓ + 2NaCl",
                "Ақ түсті тұнба. Антиацидтік қасиеттері бар.",
            ),
        ),
        (
            "Ca2+",
            "CO3 2-",
            card(
                "Кальций карбонаты",
                "CaCO3",
                "Әк суы арқылы көмірқышқыл газын жіберу:",
                "Ca(OH)2 + CO2 → CaCO3↓ + H2O",
                "Ақ түсті бор немесе мәрмәрдің негізгі құрамдас бөлігі.",
            ),
        ),
    ]
}
