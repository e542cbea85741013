//! Built-in validators
//!
//! # Categories
//!
//! - **String**: length and blankness
//! - **Numeric**: ranges, bounds, finiteness
//! - **Phone**: digit count after stripping formatting
//! - **Choice**: membership in a fixed option list

pub mod choice;
pub mod length;
pub mod phone;
pub mod range;

pub use choice::{OneOf, one_of};
pub use length::{MaxLength, NotBlank, max_length, not_blank};
pub use phone::{PhoneDigits, phone_digits};
pub use range::{Finite, GreaterThan, InRange, finite, greater_than, in_range};
