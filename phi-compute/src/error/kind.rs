//! Errors produced while building, differentiating, or evaluating operator trees.

use ariadne::Fmt;
use phi_attrs::ErrorKind;
use phi_error::{ErrorKind, EXPR};
use crate::symbolic::operator::Variable;
use phi_parser::parser::{group::GroupKind, token::Symbol};

/// A group does not have the children its kind requires.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("malformed {} group", kind.name()),
    labels = ["this group"],
    help = format!("a {} group must have the children {}", kind.name(), kind.shape().fg(EXPR)),
)]
pub struct MalformedGroup {
    /// The kind of the malformed group.
    pub kind: GroupKind,
}

/// A token that is not an operand was found where an operand was expected.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` cannot be used as an operand", token),
    labels = ["expected an operand here"],
)]
pub struct UnexpectedGroupToken {
    /// The text of the token.
    pub token: String,
}

/// `phi(i-1)` was used by an equation that has no previous iteration.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "there is no previous iteration to refer to",
    labels = [format!("{} is not bound to an equation", "phi(i-1)".fg(EXPR))],
    help = "parse this equation as a step of an iteration, with the previous equation bound",
    note = "phi(i-1) stands for the whole equation of the previous iteration",
)]
pub struct UnboundPlaceholder;

/// The exponent of a power depends on the variable the power is being differentiated by.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!(
        "cannot differentiate by {}: the exponent `{}` depends on it",
        Variable::new(*symbol, *depth).fg(EXPR),
        exponent,
    ),
    help = "only powers with a constant exponent can be differentiated",
)]
pub struct VariableExponent {
    /// The symbol being differentiated by.
    pub symbol: Symbol,

    /// The depth of the symbol being differentiated by.
    pub depth: u32,

    /// The rendered exponent.
    pub exponent: String,
}

/// The exponent of a power is neither a constant nor dependent on the differentiation target.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot differentiate a power with the non-constant exponent `{}`", exponent),
    help = format!("the exponent may only contain numbers, such as {}", "xi^(1/2)".fg(EXPR)),
)]
pub struct UnsupportedExponent {
    /// The rendered exponent.
    pub exponent: String,
}

/// An equation was used before anything was parsed into it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "the equation has not been parsed",
    help = "call `Equation::parse` first",
)]
pub struct NotParsed;
