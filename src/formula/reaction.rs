//! Reaction equation tokenizer.

use logos::Logos;

use super::token::{Token, TokenKind};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawReaction {
    #[regex(r"[0-9]+")]
    Digits,

    #[regex(r"[^0-9]+")]
    Text,
}

/// Split a reaction equation into text and subscript tokens.
///
/// Every digit run becomes a [`TokenKind::Subscript`], coefficients
/// included; everything else, whitespace and `+`/`→`/`↓` included, is
/// symbol text. Charges are never produced. Concatenating the tokens gives
/// back the input exactly.
pub fn tokenize_reaction(equation: &str) -> Vec<Token> {
    let mut lexer = RawReaction::lexer(equation);
    let mut tokens = Vec::new();

    while let Some(raw) = lexer.next() {
        let kind = match raw {
            Ok(RawReaction::Digits) => TokenKind::Subscript,
            Ok(RawReaction::Text) | Err(()) => TokenKind::Symbol,
        };
        tokens.push(Token::new(kind, lexer.slice(), lexer.span().start));
    }

    tokens
}
