//! The interactive command loop.
//!
//! `Application` owns the store for the lifetime of the session: it is
//! loaded from the repository on construction and written back when the
//! user leaves, whether by `exit`/`close`, Ctrl-C or Ctrl-D.

use crate::commands::{Command, Dispatcher, Outcome};
use crate::error::StorageResult;
use crate::repositories::StoreRepository;
use crate::store::ContactStore;
use crate::view::ContactView;
use anyhow::Result;
use chrono::Local;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const PROMPT: &str = "Enter a command: ";

/// Result of feeding one line to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Keep reading; print the message if there is one.
    Continue(Option<String>),
    /// The user asked to leave; print the farewell after saving.
    Exit(String),
}

pub struct Application<R: StoreRepository, V: ContactView> {
    repository: R,
    dispatcher: Dispatcher<V>,
    store: ContactStore,
}

impl<R: StoreRepository, V: ContactView> Application<R, V> {
    /// Load the store from `repository` and prepare the session.
    pub fn new(repository: R, dispatcher: Dispatcher<V>) -> StorageResult<Self> {
        let store = repository.load()?;
        Ok(Self {
            repository,
            dispatcher,
            store,
        })
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    /// Parse and execute one line of input.
    ///
    /// Contact errors are turned into messages here; they never end the
    /// session.
    pub fn handle_line(&mut self, line: &str) -> LineOutcome {
        let today = Local::now().date_naive();
        let result = Command::parse(line).and_then(|command| match command {
            Some(command) => self
                .dispatcher
                .execute(&mut self.store, command, today)
                .map(Some),
            None => Ok(None),
        });

        match result {
            Ok(Some(Outcome::Reply(message))) => LineOutcome::Continue(Some(message)),
            Ok(Some(Outcome::Exit(message))) => LineOutcome::Exit(message),
            Ok(None) => LineOutcome::Continue(None),
            Err(e) => {
                tracing::debug!(error = ?e, "Command failed");
                LineOutcome::Continue(Some(e.to_string()))
            }
        }
    }

    /// Persist the current store.
    pub fn save(&self) -> StorageResult<()> {
        self.repository.save(&self.store)
    }

    /// Run the interactive loop until the user leaves, then save.
    pub fn run(&mut self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;
        println!("Welcome to the assistant bot!");

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = rl.add_history_entry(line.as_str());
                    }
                    match self.handle_line(&line) {
                        LineOutcome::Continue(Some(message)) => println!("{}", message),
                        LineOutcome::Continue(None) => {}
                        LineOutcome::Exit(message) => {
                            self.save()?;
                            println!("{}", message);
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    tracing::info!("Input closed, saving and exiting");
                    self.save()?;
                    println!("Good bye!");
                    break;
                }
                Err(err) => {
                    tracing::error!("Failed to read input: {:?}", err);
                    self.save()?;
                    return Err(err.into());
                }
            }
        }

        Ok(())
    }
}
