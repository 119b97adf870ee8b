//! Errors produced while splitting the source text into tokens.

use ariadne::Fmt;
use phi_attrs::ErrorKind;
use phi_error::{ErrorKind, EXPR};

/// A run of digits and decimal separators that is not a valid number, such as `1.2.3`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid number `{}`", lexeme),
    labels = ["this number"],
    help = format!("numbers may contain at most one decimal separator, such as {}", "2.5".fg(EXPR)),
)]
pub struct InvalidNumber {
    /// The text of the number.
    pub lexeme: String,
}

/// A name that is not one of the known names.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown name `{}`", name),
    labels = ["this name"],
    help = if suggestions.is_empty() {
        format!("the known names are {}", "xi, mi, di, exp, phi(i-1)".fg(EXPR))
    } else {
        format!(
            "did you mean {}?",
            suggestions.iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", "),
        )
    },
)]
pub struct UnknownName {
    /// The name that was found.
    pub name: String,

    /// Known names similar to the one that was found.
    pub suggestions: Vec<&'static str>,
}

/// Whitespace is not allowed anywhere in an equation.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected whitespace",
    labels = ["remove this whitespace"],
)]
pub struct UnexpectedWhitespace;

/// A character that is not part of any token.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected symbol `{}`", symbol),
    labels = ["this symbol"],
    help = format!("equations may only use {}", "+ - * / ^ ( )".fg(EXPR)),
)]
pub struct UnexpectedSymbol {
    /// The text that could not be tokenized.
    pub symbol: String,
}
