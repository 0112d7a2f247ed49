//! Command-line assistant driving an [`AddressBook`].
//!
//! The assistant reads one command per line, runs it against the book and
//! replies with a single message. Command failures never stop the loop;
//! they are reported as replies.

pub mod handlers;
pub mod parser;

pub use parser::{parse_input, ParsedInput};

use crate::repositories::AddressBook;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Reply to an unrecognized or blank command.
pub const INVALID_COMMAND: &str = "Invalid command.";

/// What the assistant says after handling a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and keep reading commands
    Continue(String),
    /// Print the message and stop
    Exit(String),
}

impl Reply {
    /// The reply text.
    pub fn message(&self) -> &str {
        match self {
            Self::Continue(msg) | Self::Exit(msg) => msg,
        }
    }
}

/// Dispatches parsed commands to the handlers.
#[derive(Debug, Default)]
pub struct Assistant {
    book: AddressBook,
}

impl Assistant {
    /// Create an assistant with an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an assistant around an existing address book.
    pub fn with_book(book: AddressBook) -> Self {
        Self { book }
    }

    /// The address book the assistant works on.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle one line of input.
    pub fn handle(&mut self, line: &str) -> Reply {
        let Some(input) = parse_input(line) else {
            return Reply::Continue(INVALID_COMMAND.to_string());
        };

        debug!(command = %input.command, args = input.args.len(), "Handling command");

        let result = match input.command.as_str() {
            "close" | "exit" => return Reply::Exit("Good bye!".to_string()),
            "hello" => Ok("How can I help you?".to_string()),
            "add" => handlers::add_contact(&input.args, &mut self.book),
            "change" => handlers::change_contact(&input.args, &mut self.book),
            "remove" => handlers::remove_phone(&input.args, &mut self.book),
            "phone" => handlers::show_phone(&input.args, &self.book),
            "all" => handlers::show_all(&self.book),
            "delete" => handlers::delete_contact(&input.args, &mut self.book),
            other => {
                debug!(command = other, "Unknown command");
                Ok(INVALID_COMMAND.to_string())
            }
        };

        Reply::Continue(result.unwrap_or_else(|err| handlers::error_message(&err)))
    }
}

/// Run the read-eval-reply loop until `exit`/`close` or end of input.
pub fn run<R: BufRead, W: Write>(
    assistant: &mut Assistant,
    prompt: &str,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "Welcome to the assistant bot!")?;

    let mut line = String::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("End of input");
            break;
        }

        let reply = assistant.handle(&line);
        writeln!(output, "{}", reply.message())?;
        if let Reply::Exit(_) = reply {
            break;
        }
    }

    Ok(())
}
