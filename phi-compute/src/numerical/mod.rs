//! Numerical evaluation of operator trees.

pub mod ctxt;
pub mod eval;
