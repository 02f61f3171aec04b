//! Wordle Hints
//!
//! Narrows a dictionary down to the words still consistent with the
//! green/yellow/black feedback of earlier guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_hints::core::Guess;
//! use wordle_hints::solver::Solver;
//! use wordle_hints::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_words(["chair", "chart", "board", "giant", "crane"]);
//! let mut solver = Solver::new(&dictionary);
//!
//! // c, r, e black; a, n green
//! solver.apply_guess(Guess::parse("crane", "bbggb").unwrap());
//!
//! let remaining: Vec<&str> = solver.candidates().iter().map(|w| w.text()).collect();
//! assert_eq!(remaining, ["giant"]);
//! ```

// Core domain types
pub mod core;

// Rules and candidate filtering
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
