//! Command parsing and dispatch for the interactive loop.
//!
//! A line is split on whitespace. The first token, lower-cased, selects the
//! command; the remaining tokens are its arguments, passed through as typed.

mod dispatcher;

pub use dispatcher::{Dispatcher, Outcome};

use crate::error::{ContactError, ContactResult};

/// Every command name, in the order `help` lists them.
pub const COMMAND_NAMES: &[&str] = &[
    "hello",
    "add <name> <phone>",
    "change <name> <phone>",
    "phone <name>",
    "edit-phone <name> <old phone> <new phone>",
    "remove-phone <name> <phone>",
    "all",
    "add-birthday <name> <DD.MM.YYYY>",
    "show-birthday <name>",
    "birthdays",
    "delete <name>",
    "help",
    "close",
    "exit",
];

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    Phone { name: String },
    EditPhone { name: String, old: String, new: String },
    RemovePhone { name: String, phone: String },
    All,
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays,
    Delete { name: String },
    Help,
    Exit,
    Unknown(String),
}

impl Command {
    /// Parse one input line.
    ///
    /// Returns `Ok(None)` for a blank line and
    /// [`ContactError::InvalidArguments`] when a known command gets the
    /// wrong number of arguments.
    pub fn parse(line: &str) -> ContactResult<Option<Command>> {
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            return Ok(None);
        };
        let command_name = first.to_lowercase();
        let args: Vec<String> = tokens.map(str::to_string).collect();

        let command = match command_name.as_str() {
            "hello" => {
                expect_args(&args, 0, "hello")?;
                Command::Hello
            }
            "add" => {
                let [name, phone] = take_args::<2>(args, "add <name> <phone>")?;
                Command::Add { name, phone }
            }
            "change" => {
                let [name, phone] = take_args::<2>(args, "change <name> <phone>")?;
                Command::Change { name, phone }
            }
            "phone" => {
                let [name] = take_args::<1>(args, "phone <name>")?;
                Command::Phone { name }
            }
            "edit-phone" => {
                let [name, old, new] =
                    take_args::<3>(args, "edit-phone <name> <old phone> <new phone>")?;
                Command::EditPhone { name, old, new }
            }
            "remove-phone" => {
                let [name, phone] = take_args::<2>(args, "remove-phone <name> <phone>")?;
                Command::RemovePhone { name, phone }
            }
            "all" => {
                expect_args(&args, 0, "all")?;
                Command::All
            }
            "add-birthday" => {
                let [name, date] =
                    take_args::<2>(args, "add-birthday <name> <DD.MM.YYYY>")?;
                Command::AddBirthday { name, date }
            }
            "show-birthday" => {
                let [name] = take_args::<1>(args, "show-birthday <name>")?;
                Command::ShowBirthday { name }
            }
            "birthdays" => {
                expect_args(&args, 0, "birthdays")?;
                Command::Birthdays
            }
            "delete" => {
                let [name] = take_args::<1>(args, "delete <name>")?;
                Command::Delete { name }
            }
            "help" => {
                expect_args(&args, 0, "help")?;
                Command::Help
            }
            "close" | "exit" => {
                expect_args(&args, 0, &command_name)?;
                Command::Exit
            }
            _ => Command::Unknown(command_name.clone()),
        };

        Ok(Some(command))
    }
}

fn expect_args(args: &[String], count: usize, usage: &str) -> ContactResult<()> {
    if args.len() != count {
        return Err(ContactError::InvalidArguments(format!("Usage: {}", usage)));
    }
    Ok(())
}

fn take_args<const N: usize>(args: Vec<String>, usage: &str) -> ContactResult<[String; N]> {
    args.try_into()
        .map_err(|_| ContactError::InvalidArguments(format!("Usage: {}", usage)))
}
