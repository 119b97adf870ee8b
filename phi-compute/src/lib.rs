//! Operator trees of iterative Gaussian-model equations, with numerical evaluation and symbolic
//! partial derivatives.
//!
//! An [`Equation`] parses its source with the `phi-parser` crate, and builds an [`Operator`]
//! tree from the reduced group tree. The tree can then be evaluated, rendered back to source with
//! [`Display`], or differentiated with respect to any of the symbols `xi`, `mi` and `di` at a
//! given iteration depth.
//!
//! Equations can be chained with an [`Iteration`], where every step refers to the tree of the step
//! before it through `phi(i-1)`.
//!
//! # Features
//!
//! - `serde`: Derives [`Serialize`] and [`Deserialize`] for the operator tree and its parts.
//!
//! [`Equation`]: equation::Equation
//! [`Operator`]: symbolic::Operator
//! [`Iteration`]: iteration::Iteration
//! [`Display`]: std::fmt::Display
//! [`Serialize`]: https://docs.rs/serde/latest/serde/trait.Serialize.html
//! [`Deserialize`]: https://docs.rs/serde/latest/serde/trait.Deserialize.html

pub mod equation;
pub mod error;
pub mod iteration;
pub mod numerical;
pub mod symbolic;
