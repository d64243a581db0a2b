//! Ion label tokenizer.
//!
//! Grammar (informal):
//!
//! ```text
//! charge    = digits sign | sign          ; bare sign only where an ion ends
//! subscript = digits                      ; any digit run not followed by a sign
//! symbol    = anything else               ; element text, brackets, stray signs
//! ```
//!
//! Whitespace separates tokens and is dropped.

use logos::Logos;

use super::token::{Token, TokenKind};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
enum RawIon {
    #[regex(r"[0-9]+[+-]")]
    SignedDigits,

    #[regex(r"[0-9]+")]
    Digits,

    #[regex(r"[+-]")]
    Sign,

    #[regex(r"[^0-9+\-\s]+")]
    Text,
}

/// Split an ion label into symbol, subscript and charge tokens.
///
/// A digit run directly followed by `+` or `-` is a charge (`2+`, `3-`).
/// A bare sign is a charge with implicit magnitude 1 when it closes an ion:
/// at the end of the label, before whitespace, or before the capital letter
/// that starts the next ion (`Li+PO4 3-`). Any other digit run is a
/// subscript. A sign in any other position is kept as symbol text.
///
/// ```
/// use stq::formula::{tokenize, TokenKind};
///
/// let kinds: Vec<_> = tokenize("Ba2+").iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [TokenKind::Symbol, TokenKind::Charge]);
/// ```
pub fn tokenize(label: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut lexer = RawIon::lexer(label);

    while let Some(raw) = lexer.next() {
        let span = lexer.span();
        let text = lexer.slice();
        match raw {
            Ok(RawIon::SignedDigits) => tokens.push(Token::new(TokenKind::Charge, text, span.start)),
            Ok(RawIon::Digits) => tokens.push(Token::new(TokenKind::Subscript, text, span.start)),
            Ok(RawIon::Sign) if closes_ion(lexer.remainder()) => {
                tokens.push(Token::new(TokenKind::Charge, text, span.start))
            }
            // Stray signs and anything the lexer rejects fall back to text.
            Ok(RawIon::Sign) | Ok(RawIon::Text) | Err(()) => {
                push_symbol(&mut tokens, text, span.start)
            }
        }
    }

    tokens
}

/// Whether a bare sign followed by `rest` terminates an ion.
fn closes_ion(rest: &str) -> bool {
    match rest.chars().next() {
        None => true,
        Some(c) => c.is_whitespace() || c.is_ascii_uppercase(),
    }
}

/// Append symbol text, merging with a directly adjacent symbol token.
fn push_symbol(tokens: &mut Vec<Token>, text: &str, start: usize) {
    if let Some(last) = tokens.last_mut() {
        if last.is_symbol() && usize::from(last.range.end()) == start {
            last.absorb(text);
            return;
        }
    }
    tokens.push(Token::new(TokenKind::Symbol, text, start));
}
