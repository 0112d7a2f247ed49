//! Parsing of free-text assistant input.

/// A command word plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// Lowercased command word
    pub command: String,
    /// Remaining whitespace-separated tokens, as typed
    pub args: Vec<String>,
}

/// Split a line into a command and arguments.
///
/// The command is matched case-insensitively, so it is lowercased here.
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();

    Some(ParsedInput { command, args })
}
