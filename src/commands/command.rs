//! Parsing of session commands
//!
//! Shared by the line-oriented mode and the TUI so both accept exactly the
//! same input.

use crate::core::{Guess, GuessError};
use std::fmt;

/// A single user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hint <word> <colors>`
    Hint(Guess),
    /// `list`
    List,
    /// `info`
    Info,
    /// `new`: start over from the full dictionary
    New,
    /// `help`
    Help,
    /// `quit` / `exit`
    Quit,
}

/// Reasons a command line is rejected
///
/// None of these change the session; the command is simply skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    UnexpectedArgument(String),
    Guess(GuessError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(cmd) => write!(f, "unknown command: {cmd} (try 'help')"),
            Self::MissingArgument { command, argument } => {
                write!(f, "'{command}' is missing the '{argument}' argument")
            }
            Self::UnexpectedArgument(arg) => write!(f, "unexpected argument: {arg}"),
            Self::Guess(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Guess(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GuessError> for CommandError {
    fn from(e: GuessError) -> Self {
        Self::Guess(e)
    }
}

/// Command summary shown by `help`
pub const HELP: &[(&str, &str)] = &[
    (
        "hint <word> <colors>",
        "Add a hint. <word> is the 5 letter guess, <colors> the initial of each box's color",
    ),
    ("", "(G green, Y yellow, B black), e.g. \"hint crane bbggb\""),
    ("list", "Print the remaining candidate words"),
    ("info", "Print dictionary size and the hints so far"),
    ("new", "Forget all hints and start over"),
    ("help", "Print this summary"),
    ("quit", "Leave"),
];

impl Command {
    /// Parse one line of input
    ///
    /// Returns `Ok(None)` for blank lines. Keywords are case-insensitive.
    ///
    /// # Errors
    /// Returns `CommandError` for unknown keywords, missing or surplus
    /// arguments, and malformed hints. A hint is validated as a whole, so an
    /// invalid color anywhere rejects the entire command.
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::commands::Command;
    ///
    /// assert_eq!(Command::parse("LIST").unwrap(), Some(Command::List));
    /// assert!(matches!(Command::parse("hint crane bbggb"), Ok(Some(Command::Hint(_)))));
    /// assert!(Command::parse("hint crane bbgxb").is_err());
    /// assert_eq!(Command::parse("   ").unwrap(), None);
    /// ```
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            return Ok(None);
        };

        let command = match keyword.to_lowercase().as_str() {
            "hint" | "h" => {
                let word = parts.next().ok_or(CommandError::MissingArgument {
                    command: "hint",
                    argument: "word",
                })?;
                let colors = parts.next().ok_or(CommandError::MissingArgument {
                    command: "hint",
                    argument: "colors",
                })?;
                Self::Hint(Guess::parse(word, colors)?)
            }
            "list" | "ls" => Self::List,
            "info" => Self::Info,
            "new" | "reset" => Self::New,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => return Err(CommandError::Unknown(keyword.to_string())),
        };

        if let Some(extra) = parts.next() {
            return Err(CommandError::UnexpectedArgument(extra.to_string()));
        }

        Ok(Some(command))
    }
}
