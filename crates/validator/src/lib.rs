//! # formsmith-validator
//!
//! Small, composable validation primitives used by the formsmith field
//! validators.
//!
//! ## Quick Start
//!
//! ```rust
//! use formsmith_validator::prelude::*;
//!
//! let age = in_range(0.0, 150.0).with_message("Age must be between 0 and 150");
//! assert!(age.validate(&30.0).is_ok());
//! assert_eq!(
//!     age.validate(&200.0).unwrap_err().message,
//!     "Age must be between 0 and 150"
//! );
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators, or implement
//! [`Validate`](foundation::Validate) by hand for anything more involved.
//!
//! ## Built-in Validators
//!
//! - **String**: [`MaxLength`](validators::MaxLength), [`NotBlank`](validators::NotBlank)
//! - **Numeric**: [`InRange`](validators::InRange), [`GreaterThan`](validators::GreaterThan),
//!   [`Finite`](validators::Finite)
//! - **Phone**: [`PhoneDigits`](validators::PhoneDigits)
//! - **Choice**: [`OneOf`](validators::OneOf)

// ValidationError is the fundamental error type for all validators; boxing it
// would add indirection to every validation call.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
