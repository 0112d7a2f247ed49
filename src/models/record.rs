//! Record model representing one contact in the address book.

use crate::domain::{Field, Name, Phone, ValidationError};
use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// One contact: a name plus an ordered list of phone numbers.
///
/// The name is the record's identity and never changes. Phones keep their
/// insertion order and duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create an empty record for `name`.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
        }
    }

    /// Create an empty record, validating the raw name first.
    pub fn named(name: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(Name::new(name)?))
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `phone` and append it.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone whose stored value equals `phone`.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::PhoneNotFound` if no phone matches.
    pub fn remove_phone(&mut self, phone: &str) -> ContactResult<Phone> {
        let index = self
            .position_of(phone)
            .ok_or_else(|| ContactError::PhoneNotFound(phone.to_string()))?;

        debug!(contact = %self.name, phone, "Removing phone");
        Ok(self.phones.remove(index))
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// A missing `old` is reported before `new` is validated.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::PhoneNotFound` if `old` is not on the record, or
    /// `ContactError::Validation` if `new` is not a valid phone.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        let index = self
            .position_of(old)
            .ok_or_else(|| ContactError::PhoneNotFound(old.to_string()))?;

        let new_phone = Phone::new(new)?;
        debug!(contact = %self.name, old, new, "Editing phone");
        self.phones[index] = new_phone;
        Ok(())
    }

    /// Find the first phone whose stored value equals `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    fn position_of(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact {}, phones: ", self.name.labeled())?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}
