//! Electrochemical activity series of metals.

use smol_str::SmolStr;

/// Marker for hydrogen's place in the series.
pub const HYDROGEN: &str = "(H2)";

/// Most active first.
pub const METAL_ACTIVITY: [&str; 22] = [
    "Li", "K", "Ba", "Ca", "Na", "Mg", "Al", "Mn", "Zn", "Cr", "Fe", "Cd", "Co", "Ni", "Sn", "Pb",
    HYDROGEN, "Cu", "Hg", "Ag", "Pt", "Au",
];

/// An ordered activity series, most active metal first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivitySeries {
    metals: Vec<SmolStr>,
}

impl ActivitySeries {
    pub fn new<S: Into<SmolStr>>(metals: impl IntoIterator<Item = S>) -> Self {
        Self {
            metals: metals.into_iter().map(Into::into).collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(METAL_ACTIVITY)
    }

    /// Entries as displayed, hydrogen marker included.
    pub fn metals(&self) -> &[SmolStr] {
        &self.metals
    }

    /// Position of `metal`, most active = 0.
    ///
    /// Brackets and whitespace are ignored, so `H2` finds `(H2)`.
    pub fn position(&self, metal: &str) -> Option<usize> {
        let wanted = bare(metal);
        if wanted.is_empty() {
            return None;
        }
        self.metals.iter().position(|m| bare(m) == wanted)
    }

    /// Whether `a` is more active than `b`; `None` if either is missing.
    pub fn is_more_active(&self, a: &str, b: &str) -> Option<bool> {
        Some(self.position(a)? < self.position(b)?)
    }

    /// Whether `metal` stands before hydrogen, i.e. displaces it from
    /// acids. `None` if the metal or the hydrogen marker is missing.
    pub fn displaces_hydrogen(&self, metal: &str) -> Option<bool> {
        self.is_more_active(metal, HYDROGEN)
    }

    pub fn is_hydrogen(entry: &str) -> bool {
        bare(entry) == bare(HYDROGEN)
    }

    pub fn len(&self) -> usize {
        self.metals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metals.is_empty()
    }
}

impl Default for ActivitySeries {
    fn default() -> Self {
        Self::builtin()
    }
}

fn bare(entry: &str) -> String {
    entry
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '(' && *c != ')')
        .collect()
}
