//! Ion labels as they appear on the table axes.

use smol_str::SmolStr;
use std::fmt;

/// A label for a single ion or simple compound, e.g. `Ba2+` or `PO4 3-`.
///
/// `IonLabel` keeps the text exactly as authored (including any internal
/// spacing inside a charge annotation). Comparisons are on the raw text;
/// use [`IonLabel::compact`] when two spellings should meet.
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct IonLabel(SmolStr);

impl IonLabel {
    /// Create a label from its raw text.
    #[inline]
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(SmolStr::new(text.as_ref()))
    }

    /// The raw label text.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The label with every whitespace character removed.
    ///
    /// `"PO4 3-"` and `"PO43-"` share the compact form `"PO43-"`.
    pub fn compact(&self) -> SmolStr {
        compact(self.as_str())
    }

    /// True if the label contains nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// Strip all whitespace from `text`.
///
/// Returns the input unchanged (without reallocating into a longer buffer)
/// when it has no whitespace.
pub(crate) fn compact(text: &str) -> SmolStr {
    if !text.chars().any(char::is_whitespace) {
        return SmolStr::new(text);
    }
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

impl fmt::Debug for IonLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IonLabel({:?})", self.0.as_str())
    }
}

impl fmt::Display for IonLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for IonLabel {
    #[inline]
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for IonLabel {
    #[inline]
    fn from(text: String) -> Self {
        Self(SmolStr::from(text))
    }
}

impl From<SmolStr> for IonLabel {
    #[inline]
    fn from(text: SmolStr) -> Self {
        Self(text)
    }
}

impl AsRef<str> for IonLabel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::borrow::Borrow<str> for IonLabel {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}
