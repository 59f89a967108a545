//! Regular expressions to minimal DFAs.
//!
//! The pipeline has three stages, each a pure function producing a fresh automaton:
//!
//! 1. [`regex_to_nfa`]: shunting-yard to postfix, then Thompson's construction.
//! 2. [`nfa_to_dfa`]: subset construction over epsilon closures.
//! 3. [`minimize`]: partition refinement.
//!
//! [`compile`] runs all three.

pub mod automaton;
pub mod error;
pub mod regex;

pub use automaton::{
    Dfa, EPSILON, FiniteAutomaton, Nfa, StateId, StateSet, Symbol, TransitionTable, minimize,
    nfa_to_dfa, transition_table,
};
pub use error::{ErrorKind, RegexError};
pub use regex::{regex_to_nfa, to_postfix};

/// Compile `regex` all the way to a minimized DFA.
pub fn compile(regex: &str) -> Result<Dfa, RegexError> {
    let nfa = regex_to_nfa(regex)?;
    let dfa = nfa_to_dfa(&nfa);
    Ok(minimize(&dfa))
}
