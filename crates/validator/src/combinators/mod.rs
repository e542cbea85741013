//! Combinators for composing validators
//!
//! - [`And`]: both validators must pass
//! - [`WithMessage`]: replace the error message (and optionally the code)

mod and;
mod message;

pub use and::{And, and};
pub use message::{WithMessage, with_message};
