//! Hint bookkeeping and candidate filtering
//!
//! Rules accumulate from hints, the filter checks single words against them,
//! and a `Solver` session ties both to a shrinking candidate set.

mod candidates;
mod engine;
mod filter;
mod rules;

pub use candidates::CandidateSet;
pub use engine::Solver;
pub use filter::is_consistent;
pub use rules::{HintError, LetterRule, RuleStore};
