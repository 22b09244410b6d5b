//! The command loop driven line by line against an in-memory repository.

mod mocks;

use contact_book::{Application, ConsoleView, ContactStore, Dispatcher, LineOutcome};
use mocks::MockStoreRepository;

fn app_with(repo: &MockStoreRepository) -> Application<MockStoreRepository, ConsoleView> {
    Application::new(repo.clone(), Dispatcher::new(ConsoleView)).unwrap()
}

fn said(text: &str) -> LineOutcome {
    LineOutcome::Continue(Some(text.to_string()))
}

#[test]
fn test_application_loads_once() {
    let repo = MockStoreRepository::new();
    let app = app_with(&repo);
    assert_eq!(repo.get_call_count("load"), 1);
    assert!(app.store().is_empty());
}

#[test]
fn test_session_flow() {
    let repo = MockStoreRepository::new();
    let mut app = app_with(&repo);

    assert_eq!(app.handle_line("hello"), said("How can I help you?"));
    assert_eq!(app.handle_line("add Ann 1234567890"), said("Contact added."));
    assert_eq!(app.handle_line("phone Ann"), said("1234567890"));
    assert_eq!(app.handle_line("change Ann 5555555555"), said("Phone number updated."));
    assert_eq!(app.handle_line("add-birthday Ann 01.02.1990"), said("Birthday added."));
    assert_eq!(app.handle_line("show-birthday Ann"), said("01.02.1990"));
    assert_eq!(app.handle_line("all"), said("Ann: 5555555555 (birthday 01.02.1990)"));
    assert_eq!(app.handle_line("   "), LineOutcome::Continue(None));
    assert_eq!(app.handle_line("exit"), LineOutcome::Exit("Good bye!".to_string()));
}

#[test]
fn test_errors_become_messages() {
    let repo = MockStoreRepository::new();
    let mut app = app_with(&repo);

    assert_eq!(app.handle_line("add Ann 123"), said("Enter a valid phone number: 123"));
    assert_eq!(app.handle_line("phone"), said("Invalid arguments: Usage: phone <name>"));
    assert_eq!(app.handle_line("change Bob 0000000000"), said("Contact Bob not found."));
    assert_eq!(
        app.handle_line("show-birthday Bob"),
        said("Contact not found or no birthday set.")
    );
    assert_eq!(app.handle_line("dance"), said("Invalid command."));

    app.handle_line("add Ann 1234567890");
    app.handle_line("add-birthday Ann 01.02.1990");
    assert_eq!(
        app.handle_line("add-birthday Ann 03.04.1991"),
        said("Birthday already set.")
    );
}

#[test]
fn test_invalid_birthday_message() {
    let repo = MockStoreRepository::new();
    let mut app = app_with(&repo);
    app.handle_line("add Ann 1234567890");

    assert_eq!(
        app.handle_line("add-birthday Ann 1991-04-03"),
        said("Invalid date format. Use DD.MM.YYYY: 1991-04-03")
    );
}

#[test]
fn test_save_persists_session_state() {
    let repo = MockStoreRepository::new();
    let mut app = app_with(&repo);
    app.handle_line("add Ann 1234567890");
    app.handle_line("add Bob 0987654321");
    app.handle_line("delete Bob");

    app.save().unwrap();
    assert_eq!(repo.get_call_count("save"), 1);

    let stored = repo.stored().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored.show_phone("Ann").unwrap(), "1234567890");
}

#[test]
fn test_restored_store_is_used() {
    let mut store = ContactStore::new();
    store.add_contact("Ann", "1234567890").unwrap();
    let repo = MockStoreRepository::with_store(store);

    let mut app = app_with(&repo);
    assert_eq!(app.handle_line("phone Ann"), said("1234567890"));
}

#[test]
fn test_save_failure_is_reported() {
    let repo = MockStoreRepository::new();
    repo.fail_saves();
    let app = app_with(&repo);

    assert!(app.save().is_err());
    assert!(repo.stored().is_none());
}
