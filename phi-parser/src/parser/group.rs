//! The nested group tree that the reducer produces from a flat token sequence.
//!
//! Every grouping construct has a fixed child shape:
//!
//! | Kind                      | Children               |
//! | ------------------------- | ---------------------- |
//! | [`GroupKind::Bracket`]    | `[inner]`              |
//! | [`GroupKind::ExpCall`]    | `[exp, bracket]`       |
//! | [`GroupKind::UnaryMinus`] | `[-, operand]`         |
//! | every binary kind         | `[lhs, operator, rhs]` |
//!
//! The tree builder relies on these shapes, and so does the [`Display`](fmt::Display)
//! implementation, which renders a group as `[kind child child ...]`.

use crate::{parser::{literal::LitNum, token::op::BinOp}, tokenizer::{Token, TokenKind}};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of a [`Group`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GroupKind {
    /// A parenthesized subexpression, `(inner)`.
    Bracket,

    /// A call to `exp` with a parenthesized argument.
    ExpCall,

    /// `lhs ^ rhs`.
    Power,

    /// `lhs * rhs`.
    Product,

    /// `lhs / rhs`.
    Quotient,

    /// `lhs + rhs`.
    Sum,

    /// `lhs - rhs`.
    Difference,

    /// A leading minus applied to an operand, `-operand`.
    UnaryMinus,
}

impl GroupKind {
    /// Returns the name of the group kind, as used in the shape notation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bracket => "bracket",
            Self::ExpCall => "exp-call",
            Self::Power => "power",
            Self::Product => "product",
            Self::Quotient => "quotient",
            Self::Sum => "sum",
            Self::Difference => "difference",
            Self::UnaryMinus => "unary-minus",
        }
    }

    /// Returns the child shape of the group kind, in the notation of the module documentation.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Bracket => "[inner]",
            Self::ExpCall => "[exp, bracket]",
            Self::UnaryMinus => "[-, operand]",
            Self::Power | Self::Product | Self::Quotient | Self::Sum | Self::Difference => "[lhs, operator, rhs]",
        }
    }

    /// Returns the number of children a group of this kind has.
    pub fn arity(&self) -> usize {
        match self {
            Self::Bracket => 1,
            Self::ExpCall | Self::UnaryMinus => 2,
            Self::Power | Self::Product | Self::Quotient | Self::Sum | Self::Difference => 3,
        }
    }
}

/// A token kept as-is in the group tree, such as an operator, a symbol, or `phi(i-1)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lexeme {
    /// The kind of token.
    pub kind: TokenKind,

    /// The region of the source code that this token was parsed from.
    pub span: Range<usize>,
}

impl From<Token<'_>> for Lexeme {
    fn from(token: Token<'_>) -> Self {
        Self { kind: token.kind, span: token.span }
    }
}

impl From<BinOp> for Lexeme {
    fn from(op: BinOp) -> Self {
        Self { kind: op.kind.token(), span: op.span }
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind.literal() {
            Some(text) => f.write_str(text),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

/// A composite of tokens representing a grouping construct.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Group {
    /// The kind of group.
    pub kind: GroupKind,

    /// The children of the group, in the shape given by the kind.
    pub children: Vec<GroupToken>,

    /// The region of the source code that this group was parsed from.
    pub span: Range<usize>,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}", self.kind.name())?;
        for child in &self.children {
            write!(f, " {}", child)?;
        }
        write!(f, "]")
    }
}

/// A node of the reduced token tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GroupToken {
    /// A number literal.
    Literal(LitNum),

    /// A token that is not a number.
    Lexeme(Lexeme),

    /// A grouping construct.
    Group(Group),
}

impl GroupToken {
    /// Creates a bracket group from the given inner token, spanning both parentheses.
    pub fn bracket(inner: GroupToken, span: Range<usize>) -> Self {
        Self::Group(Group { kind: GroupKind::Bracket, children: vec![inner], span })
    }

    /// Creates an `exp` call group from the `exp` token and its bracketed argument.
    pub fn exp_call(exp: Lexeme, bracket: GroupToken) -> Self {
        let span = exp.span.start..bracket.span().end;
        Self::Group(Group {
            kind: GroupKind::ExpCall,
            children: vec![GroupToken::Lexeme(exp), bracket],
            span,
        })
    }

    /// Creates a unary minus group from the `-` token and its operand.
    pub fn unary_minus(minus: Lexeme, operand: GroupToken) -> Self {
        let span = minus.span.start..operand.span().end;
        Self::Group(Group {
            kind: GroupKind::UnaryMinus,
            children: vec![GroupToken::Lexeme(minus), operand],
            span,
        })
    }

    /// Creates a binary group joining the two operands with the given operator.
    pub fn binary(lhs: GroupToken, op: BinOp, rhs: GroupToken) -> Self {
        let span = lhs.span().start..rhs.span().end;
        let kind = op.kind.group_kind();
        Self::Group(Group {
            kind,
            children: vec![lhs, GroupToken::Lexeme(op.into()), rhs],
            span,
        })
    }

    /// Returns the span of the token.
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::Literal(literal) => literal.span.clone(),
            Self::Lexeme(lexeme) => lexeme.span.clone(),
            Self::Group(group) => group.span.clone(),
        }
    }

    /// Returns the kind of group this token is, or [`None`] if it is not a group.
    pub fn group_kind(&self) -> Option<GroupKind> {
        match self {
            Self::Group(group) => Some(group.kind),
            _ => None,
        }
    }
}

impl fmt::Display for GroupToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Literal(literal) => write!(f, "{}", literal),
            Self::Lexeme(lexeme) => write!(f, "{}", lexeme),
            Self::Group(group) => write!(f, "{}", group),
        }
    }
}
