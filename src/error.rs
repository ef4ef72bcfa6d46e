//! Fatal error conditions for the solving pipeline.
//!
//! Per the error handling policy, every error in this crate is fatal: there
//! is no recovery path inside the core. Errors are collected into one enum
//! so the CLI can sit as a single top-level handler that prints and exits.

use thiserror::Error;

/// Every way the pipeline can abort.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The lexer produced an empty token (e.g. two adjacent delimiters).
    #[error("empty token")]
    EmptyToken,

    /// A would-be variable name contained a non-alphanumeric character.
    #[error("invalid variable name: {0:?}")]
    InvalidVariableName(String),

    /// An operator was encountered with fewer operands on the parse stack
    /// than it requires.
    #[error("operator {op:?} requires {needed} operand(s), found {available}")]
    InsufficientOperands {
        op: &'static str,
        needed: usize,
        available: usize,
    },

    /// End of input was reached with more than one formula left on the
    /// parse stack.
    #[error("{count} formulas remain on the parse stack at end of input")]
    TrailingOperands { count: usize },

    /// No tokens at all were read.
    #[error("no tokens in input")]
    EmptyInput,

    /// A clause was constructed with all three literal slots empty.
    #[error("cannot construct a clause with no literals")]
    EmptyClause,

    /// `backtrack` was invoked with no `Chosen` entry on the stack.
    ///
    /// The engine is required to detect UNSAT before this can happen; if it
    /// fires, `iterate_step`'s own UNSAT detection has a bug.
    #[error("backtrack requested with no chosen entry on the assignment stack")]
    NoChosenEntry,

    /// Wraps I/O failures from opening/reading an input file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
