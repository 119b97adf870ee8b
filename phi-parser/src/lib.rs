//! Lexer and group reducer for equations of an iterative Gaussian model.
//!
//! An equation is written over the symbols `xi`, `mi` and `di`, number literals, the operators
//! `+ - * / ^`, parentheses, the `exp` function, and `phi(i-1)`, which stands for the equation of
//! the previous iteration. For example:
//!
//! ```text
//! exp((-(xi-mi)^2)/(2*di^2))+phi(i-1)
//! ```
//!
//! Parsing happens in two stages:
//!
//! 1. The [`tokenizer`] splits the source into tokens, reporting every token that cannot appear
//!    in an equation (whitespace included).
//! 2. The [`parser`] reduces the tokens into a tree of [`GroupToken`]s, where every parenthesized
//!    expression, `exp` call, binary operation, and leading minus becomes a [`Group`] with a fixed
//!    child shape.
//!
//! ```
//! use phi_parser::parser::reduce;
//!
//! let root = reduce("xi+2*xi^2").unwrap();
//! assert_eq!(root.to_string(), "[sum xi + [product 2 * [power xi ^ 2]]]");
//! ```
//!
//! Turning the group tree into an evaluable operator tree is the job of the `phi-compute` crate.
//!
//! [`GroupToken`]: parser::group::GroupToken
//! [`Group`]: parser::group::Group

pub mod parser;
pub mod tokenizer;
