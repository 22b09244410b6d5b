//! A single contact: name, phone numbers and an optional birthday.

use crate::domain::{BirthdayDate, ContactName, PhoneNumber};
use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};

/// One contact in the book.
///
/// Phone numbers keep their insertion order and may repeat. The first one
/// is the primary number shown by `phone` lookups. A birthday can be set
/// once and never overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<BirthdayDate>,
}

impl ContactRecord {
    /// Create an empty record. Only the store creates records.
    pub(crate) fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// All phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The first phone number, if any.
    pub fn primary_phone(&self) -> Option<&PhoneNumber> {
        self.phones.first()
    }

    pub fn birthday_date(&self) -> Option<BirthdayDate> {
        self.birthday
    }

    /// Validate and append a phone number. Duplicates are kept.
    pub fn add_phone(&mut self, phone: &str) -> ContactResult<()> {
        let phone = PhoneNumber::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `phone` and return it.
    pub fn remove_phone(&mut self, phone: &str) -> ContactResult<PhoneNumber> {
        let index = self.position_of(phone)?;
        Ok(self.phones.remove(index))
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// The record is left untouched when `new` is invalid.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        let index = self.position_of(old)?;
        self.phones[index] = PhoneNumber::new(new)?;
        Ok(())
    }

    /// All stored phones equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Vec<&PhoneNumber> {
        self.phones.iter().filter(|p| p.as_str() == phone).collect()
    }

    /// Drop the primary phone and append `new` in its place.
    ///
    /// `new` is validated first; a record without phones just gains `new`.
    pub fn replace_primary_phone(&mut self, new: &str) -> ContactResult<()> {
        let phone = PhoneNumber::new(new)?;
        if !self.phones.is_empty() {
            self.phones.remove(0);
        }
        self.phones.push(phone);
        Ok(())
    }

    pub fn set_birthday(&mut self, birthday: BirthdayDate) -> ContactResult<()> {
        if self.birthday.is_some() {
            return Err(ContactError::AlreadySet("Birthday already set.".to_string()));
        }
        self.birthday = Some(birthday);
        Ok(())
    }

    /// The birthday formatted as `DD.MM.YYYY`.
    pub fn birthday(&self) -> ContactResult<String> {
        self.birthday
            .map(|b| b.format())
            .ok_or_else(|| ContactError::NotFound("No birthday set.".to_string()))
    }

    fn position_of(&self, phone: &str) -> ContactResult<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| ContactError::NotFound(format!("Phone {} not found.", phone)))
    }
}
