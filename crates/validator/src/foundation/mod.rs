//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`]
//!
//! Validators are generic over their input type, so a string validator can
//! never be handed a number by accident:
//!
//! ```rust,ignore
//! use formsmith_validator::foundation::{Validate, ValidationError};
//!
//! struct MaxLength { max: usize }
//!
//! impl Validate for MaxLength {
//!     type Input = str;
//!
//!     fn validate(&self, input: &str) -> Result<(), ValidationError> {
//!         // ...
//!     }
//! }
//! ```

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};
