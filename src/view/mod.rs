//! Presentation of contacts and command help.
//!
//! Views render to strings; only the binary writes them to the terminal.

use crate::models::ContactRecord;

/// Rendering capability used by the command layer.
pub trait ContactView {
    /// Render a list of contacts.
    fn show_contacts(&self, contacts: &[&ContactRecord]) -> String;

    /// Render the list of available commands.
    fn show_commands(&self, commands: &[&str]) -> String;
}

/// Plain-text view for an interactive terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleView;

impl ContactView for ConsoleView {
    fn show_contacts(&self, contacts: &[&ContactRecord]) -> String {
        contacts
            .iter()
            .map(|record| {
                let phones = record
                    .phones()
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                match record.birthday_date() {
                    Some(birthday) => {
                        format!("{}: {} (birthday {})", record.name(), phones, birthday)
                    }
                    None => format!("{}: {}", record.name(), phones),
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn show_commands(&self, commands: &[&str]) -> String {
        let mut out = String::from("Available commands:");
        for command in commands {
            out.push_str("\n-");
            out.push_str(command);
        }
        out
    }
}
