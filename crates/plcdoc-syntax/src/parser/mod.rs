//! Parser for Structured Text declarations.
//!
//! A hand-written recursive descent parser with one token of lookahead (plus
//! bounded peeking to tell struct literals and labeled arguments apart from
//! parenthesised expressions). Productions build the typed [`crate::ast`]
//! nodes directly.
//!
//! # Design
//!
//! The parser serves documentation extraction, not editing:
//!
//! - **Fail fast**: the first mismatch aborts with a [`ParseError`]
//! - **Declarations only**: POU bodies and statements are not part of the
//!   grammar
//! - **Bounded recursion**: nesting of expressions and types is capped at
//!   [`MAX_NESTING_DEPTH`]

#![allow(clippy::module_inception)]

mod grammar;
mod parser;
mod source;

pub use parser::{parse, parse_all};
pub(crate) use parser::Parser;

use thiserror::Error;

use crate::lexer::LexError;

/// Maximum nesting of expressions and types before parsing fails.
pub const MAX_NESTING_DEPTH: usize = 64;

/// A parsing error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input could not be tokenized.
    #[error(transparent)]
    Lexical(#[from] LexError),
    /// The tokens do not form a declaration.
    #[error("{message}, found {found} at line {line}, column {column}")]
    Syntax {
        /// What the parser expected.
        message: String,
        /// The offending token.
        found: String,
        /// 1-based line number.
        line: u32,
        /// 1-based column number.
        column: u32,
    },
}

impl ParseError {
    /// Returns the line and column of the error.
    #[must_use]
    pub fn position(&self) -> (u32, u32) {
        match self {
            Self::Lexical(err) => (err.line, err.column),
            Self::Syntax { line, column, .. } => (*line, *column),
        }
    }
}
