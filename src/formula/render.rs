//! Rendering token sequences for display.

use super::token::{Token, TokenKind};

/// Render tokens as plain Unicode, with subscript digits and superscript
/// charges.
///
/// ```
/// use stq::formula::{render, tokenize};
///
/// assert_eq!(render::to_unicode(&tokenize("Li+PO4 3-")), "Li⁺PO₄³⁻");
/// ```
pub fn to_unicode(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token.kind {
            TokenKind::Symbol => out.push_str(token.as_str()),
            TokenKind::Subscript => out.extend(token.as_str().chars().map(subscript_char)),
            TokenKind::Charge => out.extend(token.as_str().chars().map(superscript_char)),
        }
    }
    out
}

/// Render tokens as HTML-style markup: `<sub>` for subscripts, `<sup>` for
/// charges. Symbol text is escaped.
pub fn to_markup(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token.kind {
            TokenKind::Symbol => escape_into(&mut out, token.as_str()),
            TokenKind::Subscript => {
                out.push_str("<sub>");
                out.push_str(token.as_str());
                out.push_str("</sub>");
            }
            TokenKind::Charge => {
                out.push_str("<sup>");
                out.push_str(token.as_str());
                out.push_str("</sup>");
            }
        }
    }
    out
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }
}

fn subscript_char(c: char) -> char {
    match c {
        '0' => '₀',
        '1' => '₁',
        '2' => '₂',
        '3' => '₃',
        '4' => '₄',
        '5' => '₅',
        '6' => '₆',
        '7' => '₇',
        '8' => '₈',
        '9' => '₉',
        other => other,
    }
}

fn superscript_char(c: char) -> char {
    match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '+' => '⁺',
        '-' => '⁻',
        other => other,
    }
}
