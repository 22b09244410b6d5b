//! The in-memory contact store.
//!
//! `ContactStore` owns every record, keyed by name and kept in insertion
//! order. It validates all input through the domain value objects and
//! reports failures as [`ContactError`]. It never prints or logs; rendering
//! and persistence belong to the layers around it.

mod birthdays;

pub use birthdays::DEFAULT_BIRTHDAY_WINDOW_DAYS;

use crate::domain::{BirthdayDate, ContactName, PhoneNumber};
use crate::error::{ContactError, ContactResult};
use crate::models::ContactRecord;

/// Result of [`ContactStore::list_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<'a> {
    /// The store holds no contacts.
    Empty,
    /// Every record, in insertion order.
    Contacts(Vec<&'a ContactRecord>),
}

/// Name to record mapping with the contact book operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    records: Vec<ContactRecord>,
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from persisted records.
    ///
    /// Returns the offending name if two records share one.
    pub fn from_records(records: Vec<ContactRecord>) -> Result<Self, ContactName> {
        let mut store = Self::new();
        for record in records {
            if store.contains(record.name().as_str()) {
                return Err(record.name().clone());
            }
            store.records.push(record);
        }
        Ok(store)
    }

    /// Add `phone` to `name`, creating the contact on first use.
    ///
    /// An invalid phone never leaves a new, empty contact behind.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> ContactResult<()> {
        if let Some(record) = self.find_mut(name) {
            return record.add_phone(phone);
        }

        let mut record = ContactRecord::new(ContactName::new(name)?);
        record.add_phone(phone)?;
        self.records.push(record);
        Ok(())
    }

    /// Replace the primary phone of `name` with `new_phone`.
    pub fn change_contact(&mut self, name: &str, new_phone: &str) -> ContactResult<String> {
        let record = self.require_mut(name)?;
        record.replace_primary_phone(new_phone)?;
        Ok("Phone number updated.".to_string())
    }

    /// The primary phone of `name`.
    pub fn show_phone(&self, name: &str) -> ContactResult<String> {
        let record = self.require(name)?;
        record
            .primary_phone()
            .map(PhoneNumber::to_string)
            .ok_or_else(|| ContactError::NotFound(format!("{} has no phone numbers.", name)))
    }

    /// Replace one specific phone of `name`, keeping its position.
    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> ContactResult<String> {
        self.require_mut(name)?.edit_phone(old, new)?;
        Ok("Phone number edited.".to_string())
    }

    /// Remove one specific phone of `name`.
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> ContactResult<String> {
        self.require_mut(name)?.remove_phone(phone)?;
        Ok("Phone number removed.".to_string())
    }

    /// Set the birthday of `name` from a `DD.MM.YYYY` string.
    pub fn add_birthday(&mut self, name: &str, date: &str) -> ContactResult<String> {
        let record = self.require_mut(name)?;
        let birthday = BirthdayDate::parse(date)?;
        record.set_birthday(birthday)?;
        Ok("Birthday added.".to_string())
    }

    /// The birthday of `name` as `DD.MM.YYYY`.
    pub fn show_birthday(&self, name: &str) -> ContactResult<String> {
        self.find(name)
            .and_then(|record| record.birthday().ok())
            .ok_or_else(|| {
                ContactError::NotFound("Contact not found or no birthday set.".to_string())
            })
    }

    /// Remove `name` if present. Returns whether a contact was removed.
    pub fn delete_contact(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Every contact in insertion order, or [`Listing::Empty`].
    pub fn list_all(&self) -> Listing<'_> {
        if self.records.is_empty() {
            Listing::Empty
        } else {
            Listing::Contacts(self.records.iter().collect())
        }
    }

    pub fn get(&self, name: &str) -> Option<&ContactRecord> {
        self.find(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.iter()
    }

    /// Records in insertion order, for persistence.
    pub fn records(&self) -> &[ContactRecord] {
        &self.records
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }

    fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    fn require(&self, name: &str) -> ContactResult<&ContactRecord> {
        self.find(name).ok_or_else(|| not_found(name))
    }

    fn require_mut(&mut self, name: &str) -> ContactResult<&mut ContactRecord> {
        self.find_mut(name).ok_or_else(|| not_found(name))
    }
}

fn not_found(name: &str) -> ContactError {
    ContactError::NotFound(format!("Contact {} not found.", name))
}
