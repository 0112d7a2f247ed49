//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! names and phone numbers. These value objects validate at construction
//! time, so an invalid name or phone can never be stored on a record.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::{is_digit, Phone, PHONE_DIGITS};
