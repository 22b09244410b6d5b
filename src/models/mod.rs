//! Data models for the contact book.
//!
//! This module contains the contact record owned by the store and the
//! result rows produced by the birthday-window query.

pub mod record;
pub mod upcoming;

pub use record::ContactRecord;
pub use upcoming::UpcomingBirthday;
