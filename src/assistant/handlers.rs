//! Command handlers for the assistant.
//!
//! Each handler takes the command arguments and the address book and
//! returns the reply text. Failures are `CommandError`s, which the
//! dispatcher turns into replies with [`error_message`].

use crate::error::{CommandError, CommandResult, ContactError};
use crate::models::Record;
use crate::repositories::AddressBook;
use tracing::{debug, warn};

pub const ADD_USAGE: &str = "add <name> <phone>";
pub const CHANGE_USAGE: &str = "change <name> <old phone> <new phone>";
pub const PHONE_USAGE: &str = "phone <name>";
pub const REMOVE_USAGE: &str = "remove <name> <phone>";
pub const DELETE_USAGE: &str = "delete <name>";

// Fetch a required positional argument.
fn arg<'a>(args: &'a [String], index: usize, usage: &'static str) -> CommandResult<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(CommandError::MissingArguments { usage })
}

fn record_mut<'a>(book: &'a mut AddressBook, name: &str) -> CommandResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| ContactError::ContactNotFound(name.to_string()).into())
}

/// `add <name> <phone>`: add a phone, creating the contact if needed.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, ADD_USAGE)?;
    let phone = arg(args, 1, ADD_USAGE)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::named(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old phone> <new phone>`: replace one of a contact's phones.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, CHANGE_USAGE)?;
    let old = arg(args, 1, CHANGE_USAGE)?;
    let new = arg(args, 2, CHANGE_USAGE)?;

    record_mut(book, name)?.edit_phone(old, new)?;
    Ok("Contact updated.".to_string())
}

/// `remove <name> <phone>`: drop one phone from a contact.
pub fn remove_phone(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, REMOVE_USAGE)?;
    let phone = arg(args, 1, REMOVE_USAGE)?;

    let removed = record_mut(book, name)?.remove_phone(phone)?;
    Ok(format!("Phone {} removed.", removed.into_inner()))
}

/// `phone <name>`: list a contact's phones.
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, PHONE_USAGE)?;
    let record = book
        .find(name)
        .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))?;

    if record.phones().is_empty() {
        return Ok(format!("{} has no phones.", record.name()));
    }

    let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
    Ok(phones.join("; "))
}

/// `all`: one line per contact.
pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("No contacts found.".to_string());
    }

    let lines: Vec<String> = book.records().map(Record::to_string).collect();
    Ok(lines.join("\n"))
}

/// `delete <name>`: remove a contact.
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, DELETE_USAGE)?;
    book.delete(name)?;
    Ok("Contact deleted.".to_string())
}

/// Turn a failed command into the reply shown to the user.
pub fn error_message(err: &CommandError) -> String {
    match err {
        CommandError::Contact(contact_err) if contact_err.is_not_found() => {
            debug!(error = %err, "Lookup missed")
        }
        _ => warn!(error = %err, "Command failed"),
    }
    format!("{}.", err)
}
