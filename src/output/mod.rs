//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_candidates, print_dictionary_info, print_guess_result, print_help, print_session_info,
};
