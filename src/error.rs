//! Construction-time dataset errors.
//!
//! Queries never fail. These errors can only come out of building a
//! matrix, a resolver or a [`Dataset`](crate::data::Dataset), which happens
//! once at startup.

use smol_str::SmolStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("{axis} label must not be blank")]
    BlankLabel { axis: &'static str },

    #[error("cation '{0}' appears more than once on the axis")]
    DuplicateCation(SmolStr),

    #[error("anion '{0}' has more than one row")]
    DuplicateAnion(SmolStr),

    #[error("row '{anion}' has a result for '{cation}', which is not on the cation axis")]
    UnknownCation { anion: SmolStr, cation: SmolStr },

    #[error("row '{anion}' has results for both '{first}' and '{second}', which name the same cation")]
    DuplicateResult {
        anion: SmolStr,
        first: SmolStr,
        second: SmolStr,
    },

    #[error("more than one detail record for compound key '{0}'")]
    DuplicateDetail(SmolStr),

    #[error(
        "compound key '{key}' is produced by both '{first_cation}' + '{first_anion}' \
         and '{second_cation}' + '{second_anion}'"
    )]
    AmbiguousKey {
        key: SmolStr,
        first_cation: SmolStr,
        first_anion: SmolStr,
        second_cation: SmolStr,
        second_anion: SmolStr,
    },

    #[error("detail record '{0}' does not match any cation/anion pair on the axes")]
    DetailOutsideAxes(SmolStr),
}

impl DatasetError {
    pub(crate) fn ambiguous(
        key: &str,
        first: (&str, &str),
        second: (&str, &str),
    ) -> Self {
        Self::AmbiguousKey {
            key: key.into(),
            first_cation: first.0.into(),
            first_anion: first.1.into(),
            second_cation: second.0.into(),
            second_anion: second.1.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_labels() {
        let err = DatasetError::UnknownCation {
            anion: "Cl-".into(),
            cation: "Xx+".into(),
        };
        assert_eq!(
            err.to_string(),
            "row 'Cl-' has a result for 'Xx+', which is not on the cation axis"
        );

        let err = DatasetError::ambiguous("AB", ("A", "B"), ("AB", ""));
        assert!(err.to_string().contains("'A' + 'B'"));
    }
}
