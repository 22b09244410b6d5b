use super::{Command, COMMAND_NAMES};
use crate::error::ContactResult;
use crate::store::{ContactStore, Listing, DEFAULT_BIRTHDAY_WINDOW_DAYS};
use crate::view::ContactView;
use chrono::NaiveDate;

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the message and read the next line.
    Reply(String),
    /// Save, print the message and stop.
    Exit(String),
}

/// Executes parsed commands against a store and renders their results.
#[derive(Debug, Clone)]
pub struct Dispatcher<V: ContactView> {
    view: V,
    birthday_window_days: u32,
}

impl<V: ContactView> Dispatcher<V> {
    /// Create a dispatcher with the default seven day birthday window.
    pub fn new(view: V) -> Self {
        Self {
            view,
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
        }
    }

    /// Override the lookahead used by the `birthdays` command.
    pub fn with_birthday_window(mut self, days: u32) -> Self {
        self.birthday_window_days = days;
        self
    }

    /// Run `command`, taking `today` as the reference date for birthdays.
    pub fn execute(
        &self,
        store: &mut ContactStore,
        command: Command,
        today: NaiveDate,
    ) -> ContactResult<Outcome> {
        tracing::debug!(?command, "Executing command");

        let reply = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add { name, phone } => {
                store.add_contact(&name, &phone)?;
                tracing::info!(name = %name, "Contact added");
                "Contact added.".to_string()
            }
            Command::Change { name, phone } => store.change_contact(&name, &phone)?,
            Command::Phone { name } => store.show_phone(&name)?,
            Command::EditPhone { name, old, new } => store.edit_phone(&name, &old, &new)?,
            Command::RemovePhone { name, phone } => store.remove_phone(&name, &phone)?,
            Command::All => match store.list_all() {
                Listing::Empty => "No contacts found.".to_string(),
                Listing::Contacts(records) => self.view.show_contacts(&records),
            },
            Command::AddBirthday { name, date } => store.add_birthday(&name, &date)?,
            Command::ShowBirthday { name } => store.show_birthday(&name)?,
            Command::Birthdays => {
                let upcoming = store.upcoming_birthdays_from(today, self.birthday_window_days);
                if upcoming.is_empty() {
                    "No upcoming birthdays.".to_string()
                } else {
                    upcoming
                        .iter()
                        .map(|u| u.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                }
            }
            Command::Delete { name } => {
                if store.delete_contact(&name) {
                    tracing::info!(name = %name, "Contact deleted");
                    "Contact deleted.".to_string()
                } else {
                    "Contact not found.".to_string()
                }
            }
            Command::Help => self.view.show_commands(COMMAND_NAMES),
            Command::Exit => return Ok(Outcome::Exit("Good bye!".to_string())),
            Command::Unknown(name) => {
                tracing::debug!(command = %name, "Unknown command");
                "Invalid command.".to_string()
            }
        };

        Ok(Outcome::Reply(reply))
    }
}
