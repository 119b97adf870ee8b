//! Operator trees, their construction from reduced group trees, and symbolic differentiation.

pub mod build;
pub mod derivative;
pub mod operator;
pub mod ops;

pub use build::build;
pub use operator::Operator;
