//! Errors raised while turning a regex into an NFA.

use crate::regex::Operator;
use thiserror::Error;

/// Why a regex could not be compiled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegexError {
    /// An operator found fewer operands on the construction stack than it needs.
    /// `position` indexes the postfix token sequence.
    #[error("insufficient operands for '{operator}' at postfix position {position}")]
    MissingOperand { operator: Operator, position: usize },
    /// Evaluation did not reduce to exactly one fragment.
    #[error("malformed expression: {fragments} fragments left after evaluation")]
    MalformedExpression { fragments: usize },
    /// An unmatched `(` or `)` at the given character index of the regex.
    #[error("unbalanced parenthesis at position {position}")]
    UnbalancedParenthesis { position: usize },
    #[error("unsupported character {character:?} at position {position}")]
    UnsupportedCharacter { character: char, position: usize },
}

/// Coarse classification of a [`RegexError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingOperand,
    MalformedExpression,
}

impl RegexError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegexError::MissingOperand { .. } => ErrorKind::MissingOperand,
            RegexError::MalformedExpression { .. }
            | RegexError::UnbalancedParenthesis { .. }
            | RegexError::UnsupportedCharacter { .. } => ErrorKind::MalformedExpression,
        }
    }
}
