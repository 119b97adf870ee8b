use logos::Logos;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The different kinds of tokens that can be produced by the tokenizer.
///
/// Only [`TokenKind::Whitespace`], [`TokenKind::Name`] and [`TokenKind::Symbol`] are never valid
/// in an equation; they exist so that the tokenizer can point at them in an error.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Pow,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("exp")]
    Exp,

    #[token("xi")]
    Xi,

    #[token("mi")]
    Mi,

    #[token("di")]
    Di,

    /// The reference to the previous iteration, `phi(i-1)`.
    #[token("phi(i-1)")]
    Previous,

    /// A numeric literal. `,` is accepted as a decimal separator.
    #[regex(r"[0-9.,]+")]
    Number,

    #[regex(r"[a-zA-Z_]+")]
    Name,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns the fixed text of this token kind, or [`None`] if the kind matches variable text.
    pub fn literal(self) -> Option<&'static str> {
        match self {
            Self::Add => Some("+"),
            Self::Sub => Some("-"),
            Self::Mul => Some("*"),
            Self::Div => Some("/"),
            Self::Pow => Some("^"),
            Self::OpenParen => Some("("),
            Self::CloseParen => Some(")"),
            Self::Exp => Some("exp"),
            Self::Xi => Some("xi"),
            Self::Mi => Some("mi"),
            Self::Di => Some("di"),
            Self::Previous => Some("phi(i-1)"),
            Self::Whitespace | Self::Number | Self::Name | Self::Symbol => None,
        }
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}
