//! Integration tests for the command-line assistant.
//!
//! These drive the assistant the same way the binary does: line by line,
//! through `assistant::run` with in-memory input and output.

use contact_book::assistant::{self, Reply};
use contact_book::Assistant;
use std::io::Cursor;

fn run_session(input: &str) -> (Assistant, String) {
    let mut assistant = Assistant::new();
    let mut output = Vec::new();
    assistant::run(&mut assistant, "> ", Cursor::new(input), &mut output).unwrap();
    (assistant, String::from_utf8(output).unwrap())
}

#[test]
fn test_add_then_show_phone() {
    let mut assistant = Assistant::new();
    assert_eq!(
        assistant.handle("add John 1234567890").message(),
        "Contact added."
    );
    assert_eq!(assistant.handle("phone John").message(), "1234567890");
}

#[test]
fn test_missing_contact_reply() {
    let mut assistant = Assistant::new();
    assert_eq!(
        assistant.handle("phone Nobody").message(),
        "Contact Nobody not found."
    );
}

#[test]
fn test_missing_arguments_reply() {
    let mut assistant = Assistant::new();
    assert_eq!(
        assistant.handle("add John").message(),
        "Not enough arguments. Usage: add <name> <phone>."
    );
}

#[test]
fn test_exit_reply() {
    let mut assistant = Assistant::new();
    assert_eq!(assistant.handle("exit"), Reply::Exit("Good bye!".to_string()));
}

#[test]
fn test_session_stops_at_exit() {
    let input = "hello\nadd John 1234567890\nadd John 555-555-5555\nall\nexit\nadd Jane 9876543210\n";
    let (assistant, output) = run_session(input);

    let expected = "Welcome to the assistant bot!\n\
        > How can I help you?\n\
        > Contact added.\n\
        > Contact updated.\n\
        > Contact name: John, phones: 1234567890; 555-555-5555\n\
        > Good bye!\n";
    assert_eq!(output, expected);

    // Input after exit is never read.
    assert!(assistant.book().find("Jane").is_none());
    assert_eq!(assistant.book().len(), 1);
}

#[test]
fn test_session_stops_at_end_of_input() {
    let (assistant, output) = run_session("add Jane 9876543210\ndelete Jane\nall\n");

    assert!(output.ends_with("> No contacts found.\n> "));
    assert!(assistant.book().is_empty());
}

#[test]
fn test_session_change_and_remove() {
    let input = "add John 1234567890\n\
        change John 1234567890 1112223333\n\
        change John 1112223333 12\n\
        remove John 1112223333\n\
        phone John\n\
        close\n";
    let (_, output) = run_session(input);
    let replies: Vec<&str> = output
        .lines()
        .skip(1)
        .map(|line| line.trim_start_matches("> "))
        .collect();

    assert_eq!(replies[0], "Contact added.");
    assert_eq!(replies[1], "Contact updated.");
    assert!(replies[2].starts_with("Invalid phone number: 12"));
    assert_eq!(replies[3], "Phone 1112223333 removed.");
    assert_eq!(replies[4], "John has no phones.");
    assert_eq!(replies[5], "Good bye!");
}
