//! Command implementations

pub mod command;
pub mod filter;
pub mod simple;

pub use command::{Command, CommandError, HELP};
pub use filter::{parse_hint_arg, run_filter};
pub use simple::run_simple;
