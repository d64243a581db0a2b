//! Solubility classes and their table glyphs.

use std::fmt;

/// The value of one matrix cell.
///
/// `Empty` means no cell is drawn at all. `Unknown` is a drawn cell marked
/// `?` because no reliable data exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SolubilityStatus {
    /// More than 1 g per 100 g of water.
    Soluble,
    /// Between 0.01 and 1 g per 100 g of water.
    SlightlySoluble,
    /// Less than 0.01 g per 100 g of water.
    Insoluble,
    /// Not stable in aqueous solution.
    Decomposes,
    Unknown,
    #[default]
    Empty,
}

impl SolubilityStatus {
    /// All statuses, rendered ones first.
    pub const ALL: [SolubilityStatus; 6] = [
        SolubilityStatus::Soluble,
        SolubilityStatus::SlightlySoluble,
        SolubilityStatus::Insoluble,
        SolubilityStatus::Decomposes,
        SolubilityStatus::Unknown,
        SolubilityStatus::Empty,
    ];

    /// The glyph printed in the table cell (Cyrillic letters for the
    /// solubility classes, an en dash for decomposition).
    pub const fn symbol(self) -> &'static str {
        match self {
            SolubilityStatus::Soluble => "Р",
            SolubilityStatus::SlightlySoluble => "М",
            SolubilityStatus::Insoluble => "Н",
            SolubilityStatus::Decomposes => "–",
            SolubilityStatus::Unknown => "?",
            SolubilityStatus::Empty => "",
        }
    }

    /// Parse a table glyph. ASCII look-alikes (`R`, `M`, `N`, `-`) are
    /// accepted too.
    pub fn parse_symbol(symbol: &str) -> Option<Self> {
        let status = match symbol.trim() {
            "Р" | "R" => SolubilityStatus::Soluble,
            "М" | "M" => SolubilityStatus::SlightlySoluble,
            "Н" | "N" => SolubilityStatus::Insoluble,
            "–" | "-" => SolubilityStatus::Decomposes,
            "?" => SolubilityStatus::Unknown,
            "" => SolubilityStatus::Empty,
            _ => return None,
        };
        Some(status)
    }

    /// Like [`parse_symbol`](Self::parse_symbol), mapping anything
    /// unrecognised to `Empty`.
    pub fn from_symbol(symbol: &str) -> Self {
        Self::parse_symbol(symbol).unwrap_or_default()
    }

    /// False only for `Empty`.
    #[inline]
    pub const fn is_rendered(self) -> bool {
        !matches!(self, SolubilityStatus::Empty)
    }
}

impl fmt::Display for SolubilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One line of the legend shown next to the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegendEntry {
    pub status: SolubilityStatus,
    pub label: &'static str,
    pub description: &'static str,
}

/// Legend for every rendered status, in display order.
pub const LEGEND: [LegendEntry; 5] = [
    LegendEntry {
        status: SolubilityStatus::Soluble,
        label: "Ериді",
        description: "(>1г/100г)",
    },
    LegendEntry {
        status: SolubilityStatus::SlightlySoluble,
        label: "Аз ериді",
        description: "(0.01-1г/100г)",
    },
    LegendEntry {
        status: SolubilityStatus::Insoluble,
        label: "Ерімейді",
        description: "(<0.01г/100г)",
    },
    LegendEntry {
        status: SolubilityStatus::Decomposes,
        label: "Ыдырайды",
        description: "Сулы ортада тұрақсыз",
    },
    LegendEntry {
        status: SolubilityStatus::Unknown,
        label: "Деректер жоқ",
        description: "Сенімді мәлімет жоқ",
    },
];
