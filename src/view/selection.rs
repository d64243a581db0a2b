//! Row/column selection highlighting.

use smol_str::SmolStr;

/// How a cell relates to the current selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight {
    None,
    /// In the selected anion row.
    Row,
    /// In the selected cation column.
    Column,
    /// Where the selected row and column cross.
    Intersection,
}

impl Highlight {
    pub fn is_highlighted(self) -> bool {
        self != Highlight::None
    }
}

/// The caller's current cation/anion selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub cation: Option<SmolStr>,
    pub anion: Option<SmolStr>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `cation`, or clear the column selection if it was already
    /// selected.
    pub fn toggle_cation(&mut self, cation: &str) {
        toggle(&mut self.cation, cation);
    }

    pub fn toggle_anion(&mut self, anion: &str) {
        toggle(&mut self.anion, anion);
    }

    pub fn highlight(&self, cation: &str, anion: &str) -> Highlight {
        let in_column = self.cation.as_deref() == Some(cation);
        let in_row = self.anion.as_deref() == Some(anion);
        match (in_row, in_column) {
            (true, true) => Highlight::Intersection,
            (true, false) => Highlight::Row,
            (false, true) => Highlight::Column,
            (false, false) => Highlight::None,
        }
    }
}

fn toggle(slot: &mut Option<SmolStr>, value: &str) {
    if slot.as_deref() == Some(value) {
        *slot = None;
    } else {
        *slot = Some(SmolStr::new(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut selection = Selection::new();
        selection.toggle_cation("Ag+");
        assert_eq!(selection.cation.as_deref(), Some("Ag+"));
        selection.toggle_cation("Ag+");
        assert_eq!(selection.cation, None);
        selection.toggle_anion("Cl-");
        selection.toggle_anion("I-");
        assert_eq!(selection.anion, Some(SmolStr::new("I-")));
    }

    #[test]
    fn test_highlight() {
        let mut selection = Selection::new();
        selection.toggle_cation("Ag+");
        selection.toggle_anion("Cl-");

        assert_eq!(selection.highlight("Ag+", "Cl-"), Highlight::Intersection);
        assert_eq!(selection.highlight("Na+", "Cl-"), Highlight::Row);
        assert_eq!(selection.highlight("Ag+", "I-"), Highlight::Column);
        assert_eq!(selection.highlight("Na+", "I-"), Highlight::None);
        assert!(!Highlight::None.is_highlighted());
    }
}
