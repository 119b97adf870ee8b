#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The context used to evaluate an operator tree.
///
/// A context holds a single value, which every variable evaluates to, whatever its symbol and
/// depth.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// The value bound to every variable.
    value: f64,
}

impl Ctxt {
    /// Creates a context binding every variable to the given value.
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Returns the value bound to every variable.
    pub fn value(&self) -> f64 {
        self.value
    }
}
