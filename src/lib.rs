//! Contact Book - an in-memory address book with validated contact data.
//!
//! The library stores contact names and phone numbers and enforces a few
//! invariants on them: names are never blank and every phone number
//! contains exactly ten digits.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`) and the `Field` trait
//! - **models**: The `Record` type holding one contact's phones
//! - **repositories**: The `AddressBook` keyed by contact name
//! - **assistant**: Command parsing and handlers for the CLI loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//!
//! # Example
//!
//! ```
//! use contact_book::{AddressBook, Record};
//!
//! let mut john = Record::named("John").unwrap();
//! john.add_phone("1234567890").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(john);
//!
//! let john = book.find("John").unwrap();
//! assert_eq!(john.to_string(), "Contact name: John, phones: 1234567890");
//! ```

pub mod assistant;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use assistant::{Assistant, Reply};
pub use config::Config;
pub use domain::{Field, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, ContactError};
pub use models::Record;
pub use repositories::AddressBook;
