//! Prelude module for convenient imports.
//!
//! ```rust
//! use formsmith_validator::prelude::*;
//!
//! let name = not_blank().and(max_length(100));
//! assert!(name.validate("Intake").is_ok());
//! ```

pub use crate::foundation::{Validate, ValidateExt, ValidationError};

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

pub use crate::combinators::{And, WithMessage, and, with_message};
