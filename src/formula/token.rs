//! The token type shared by both tokenizers.

use smol_str::SmolStr;
use std::fmt;
use text_size::{TextRange, TextSize};

/// How a token is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Plain text: element symbols, brackets, arrows, operators.
    Symbol,
    /// A stoichiometric count, rendered below the baseline.
    Subscript,
    /// An ionic charge with optional magnitude, rendered above the baseline.
    Charge,
}

/// A typed slice of a formula string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: SmolStr,
    /// Byte range of `text` in the tokenized input.
    ///
    /// Offsets are `u32`; past `u32::MAX` bytes they saturate at that value
    /// while `text` stays exact.
    pub range: TextRange,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, text: &str, start: usize) -> Self {
        Self {
            kind,
            text: SmolStr::new(text),
            range: span(start, text.len()),
        }
    }

    /// Shorthand for a symbol token, mostly useful in tests.
    pub fn symbol(text: &str, start: usize) -> Self {
        Self::new(TokenKind::Symbol, text, start)
    }

    /// Shorthand for a subscript token.
    pub fn subscript(text: &str, start: usize) -> Self {
        Self::new(TokenKind::Subscript, text, start)
    }

    /// Shorthand for a charge token.
    pub fn charge(text: &str, start: usize) -> Self {
        Self::new(TokenKind::Charge, text, start)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    #[inline]
    pub fn is_symbol(&self) -> bool {
        self.kind == TokenKind::Symbol
    }

    #[inline]
    pub fn is_subscript(&self) -> bool {
        self.kind == TokenKind::Subscript
    }

    #[inline]
    pub fn is_charge(&self) -> bool {
        self.kind == TokenKind::Charge
    }

    /// Extend a symbol token with text that directly follows it.
    pub(crate) fn absorb(&mut self, text: &str) {
        let mut joined = String::with_capacity(self.text.len() + text.len());
        joined.push_str(&self.text);
        joined.push_str(text);
        self.text = SmolStr::from(joined);
        self.range = span(usize::from(self.range.start()), self.text.len());
    }
}

/// Range covering `len` bytes from `start`, saturating at `u32::MAX`.
fn span(start: usize, len: usize) -> TextRange {
    TextRange::new(offset(start), offset(start.saturating_add(len)))
}

fn offset(at: usize) -> TextSize {
    TextSize::try_from(at).unwrap_or(TextSize::from(u32::MAX))
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})@{:?}", self.kind, self.text.as_str(), self.range)
    }
}

/// Concatenate the text of every token.
pub fn concat(tokens: &[Token]) -> String {
    tokens.iter().map(Token::as_str).collect()
}
