//! Regex to NFA compilation.
//!
//! The grammar is deliberately small: ASCII alphanumeric literals, implicit
//! concatenation, `|`, postfix `*` and parentheses. Compilation goes through
//! postfix form and then Thompson's construction.

mod postfix;
mod thompson;

pub use postfix::{Operator, Token, is_literal, to_postfix};

use crate::automaton::Nfa;
use crate::error::RegexError;
use thompson::ThompsonBuilder;

/// Compile `regex` into an NFA.
///
/// State ids are assigned from 0 on every call, so the same regex always yields
/// an identically numbered automaton.
pub fn regex_to_nfa(regex: &str) -> Result<Nfa, RegexError> {
    let postfix = to_postfix(regex)?;
    log::debug!(
        "regex {regex:?} in postfix: {}",
        postfix.iter().map(Token::to_string).collect::<String>()
    );

    let nfa = ThompsonBuilder::new().build(&postfix)?;
    log::debug!(
        "built NFA with {} states for {regex:?}",
        nfa.states().len()
    );
    Ok(nfa)
}

impl Nfa {
    /// Compile `regex` into an NFA. See [`regex_to_nfa`].
    pub fn from_regex(regex: &str) -> Result<Nfa, RegexError> {
        regex_to_nfa(regex)
    }
}
