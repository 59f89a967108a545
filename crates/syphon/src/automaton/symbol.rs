//! Input symbols for automata transitions.

/// An input symbol: one character of the regex alphabet.
/// The special value `EPSILON` represents an epsilon (empty) transition.
pub type Symbol = char;

/// Special symbol representing epsilon (empty) transitions.
/// NUL is never a regex literal.
pub const EPSILON: Symbol = '\0';

/// Check if a symbol is an epsilon transition.
#[inline]
pub fn is_epsilon(symbol: Symbol) -> bool {
    symbol == EPSILON
}
