pub mod kind;

pub use phi_error::Error;
