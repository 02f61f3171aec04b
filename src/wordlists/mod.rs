//! Word lists for Wordle solving
//!
//! The dictionary is read once at startup and shared read-only by every
//! session built from it.

mod dictionary;
pub mod loader;

pub use dictionary::Dictionary;
pub use loader::{load_from_file, load_from_reader};
