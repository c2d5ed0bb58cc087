//! Error types for the tokenizer path.
//!
//! The core automata never fail: construction and simulation are total
//! over finite inputs. The only runtime failure is input the lexer does
//! not recognize, reported as a value with a human-readable message and
//! the byte offset where matching stopped. With the `diagnostics`
//! feature enabled, errors integrate with [`miette`] for rich reporting.

use thiserror::Error;

#[cfg(feature = "diagnostics")]
use miette::Diagnostic;

/// A lexical error with its position in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
#[error("{kind} at byte {position}")]
pub struct LexError {
    /// Byte offset in the input where the error occurred.
    pub position: usize,
    #[source]
    pub kind: LexErrorKind,
}

/// Types of lexical errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", derive(Diagnostic))]
pub enum LexErrorKind {
    #[error("unrecognized character {0:?}")]
    #[cfg_attr(feature = "diagnostics", diagnostic(code(lexion::unrecognized_character)))]
    UnrecognizedCharacter(char),
}

impl LexError {
    /// Get the byte offset of this error.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Get the kind of lexical error.
    #[must_use]
    pub const fn kind(&self) -> &LexErrorKind {
        &self.kind
    }
}
