//! Errors produced while reducing the token sequence into nested groups.

use ariadne::Fmt;
use phi_attrs::ErrorKind;
use phi_error::{ErrorKind, EXPR};
use crate::tokenizer::TokenKind;

/// Formats a list of token kinds for display in an error message.
fn describe(kinds: &[TokenKind]) -> String {
    kinds
        .iter()
        .map(|kind| match kind.literal() {
            Some(text) => format!("`{}`", text),
            None => format!("{:?}", kind).to_lowercase(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of equation",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of equation",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
    help = format!("operands must be joined by one of {}", "+ - * / ^".fg(EXPR)),
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", describe(expected))],
    help = format!("found {}", describe(&[*found])),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;

/// The `exp` function was not followed by a parenthesized argument.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected a parenthesized argument after `exp`",
    labels = ["this function", "add an argument here"],
    help = format!("write the argument in parentheses, such as {}", "exp(xi)".fg(EXPR)),
)]
pub struct ExpectedExpCall;
