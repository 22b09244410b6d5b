//! Contact Book - a command-line contact manager.
//!
//! The library keeps names, phone numbers and birthdays in an in-memory
//! store, answers which birthdays fall in the coming week and persists the
//! whole store to a JSON file between runs.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact record and birthday query rows
//! - **store**: The contact store and its birthday-window query
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Loading and saving the store
//! - **commands**: Parsing and dispatching user commands
//! - **view**: Rendering contacts and help text
//! - **app**: The interactive command loop

pub mod app;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod store;
pub mod view;

// Re-export commonly used types
pub use app::{Application, LineOutcome};
pub use commands::{Command, Dispatcher, Outcome};
pub use config::Config;
pub use domain::{BirthdayDate, ContactName, PhoneNumber, ValidationError};
pub use error::{ConfigError, ContactError, ContactResult, StorageError, StorageResult};
pub use models::{ContactRecord, UpcomingBirthday};
pub use repositories::{JsonFileRepository, StoreRepository};
pub use store::{ContactStore, Listing};
pub use view::{ConsoleView, ContactView};
