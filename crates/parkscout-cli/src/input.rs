//! Explicit command parsing for the two interactive prompts.
//!
//! Every raw input line maps to a command variant; the navigator dispatches
//! on the variant rather than on parse failures.

/// Command entered at the state prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateCommand {
    Exit,
    /// A candidate state name, as typed.
    Lookup(String),
}

/// Command entered at the site-selection prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectCommand {
    Exit,
    Back,
    /// Zero-based index into the current site list.
    Select(usize),
    Invalid,
}

/// `"exit"` is matched exactly and case-sensitively; anything else is a
/// candidate state name.
#[must_use]
pub fn parse_state_command(raw: &str) -> StateCommand {
    let trimmed = raw.trim();
    if trimmed == "exit" {
        StateCommand::Exit
    } else {
        StateCommand::Lookup(trimmed.to_owned())
    }
}

/// Parses a selection against a site list of length `len`. Numeric input
/// is accepted when `1 <= n <= len` and mapped to a zero-based index;
/// everything else that is not `"exit"` or `"back"` is [`SelectCommand::Invalid`].
#[must_use]
pub fn parse_select_command(raw: &str, len: usize) -> SelectCommand {
    match raw.trim() {
        "exit" => SelectCommand::Exit,
        "back" => SelectCommand::Back,
        other => match other.parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => SelectCommand::Select(n - 1),
            _ => SelectCommand::Invalid,
        },
    }
}
