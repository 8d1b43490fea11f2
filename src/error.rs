//! Error types, position tracking, and the diagnostics sink
//!
//! Lexical errors are recorded as values and also formatted as one line per
//! error onto an injected writer, so a pass never aborts on bad input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use thiserror::Error;

/// Represents a position in the source buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Position {
    /// Creates a new position at the start of input
    pub fn new() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors detected while validating a [`LexerConfig`](crate::lexer::LexerConfig)
///
/// Configuration problems are reported when the session is built, before any
/// scanning happens, so a running pass never has to deal with them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Two configured keywords hash to the same 64-bit value, which would
    /// make keyword lookup ambiguous
    #[error("keywords \"{first}\" and \"{second}\" share the same hash")]
    KeywordHashCollision { first: String, second: String },

    /// Exactly one of the block comment delimiters is empty
    #[error("block comment start and end delimiters must both be set or both be empty")]
    UnbalancedBlockComment,
}

/// Lexical errors recorded during a pass
///
/// All variants are local: the offending span is skipped, the aggregate
/// success flag goes false, and scanning resumes at the next boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A lexeme that no classification rule accepts
    #[error("unknown \"{lexeme}\"")]
    UnknownCharacter { lexeme: String, position: Position },

    /// A numeric literal whose value does not fit in 64 bits
    #[error("integer overflow \"{lexeme}\"")]
    IntegerOverflow { lexeme: String, position: Position },

    /// Unrecognized trailing bytes after a numeric literal
    #[error("unknown suffix \"{suffix}\"")]
    UnknownNumericSuffix { suffix: String, position: Position },

    /// A packed literal whose raw span exceeds the 64-bit storage width
    #[error("packed literal length({len}) exceeds max length({max}): {lexeme}")]
    PackedLiteralTooLong {
        len: usize,
        max: usize,
        lexeme: String,
        position: Position,
    },
}

impl LexError {
    /// Returns the source position the error was detected at
    pub fn position(&self) -> Position {
        match self {
            LexError::UnknownCharacter { position, .. }
            | LexError::IntegerOverflow { position, .. }
            | LexError::UnknownNumericSuffix { position, .. }
            | LexError::PackedLiteralTooLong { position, .. } => *position,
        }
    }
}

/// Formats errors as `<file>:<line>:<col>: <message>` onto an injected writer
///
/// The sink defaults to standard error. Write failures are ignored: the
/// diagnostics channel is best-effort and must never interrupt a pass.
pub struct Diagnostics {
    file_name: String,
    sink: Box<dyn Write>,
}

impl Diagnostics {
    /// Creates a sink that writes to standard error
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            sink: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to the given writer
    pub fn with_sink(file_name: impl Into<String>, sink: Box<dyn Write>) -> Self {
        Self {
            file_name: file_name.into(),
            sink,
        }
    }

    /// Returns the display file name used in formatted lines
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Writes one formatted line for the error
    pub fn report(&mut self, error: &LexError) {
        let position = error.position();
        let _ = writeln!(
            self.sink,
            "{}:{}:{}: {}",
            self.file_name, position.line, position.column, error
        );
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("file_name", &self.file_name)
            .finish_non_exhaustive()
    }
}
