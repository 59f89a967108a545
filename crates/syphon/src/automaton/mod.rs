//! Finite automata and the transformations between them.
//!
//! This module provides NFA and DFA implementations with:
//! - Epsilon closure computation
//! - Subset construction (NFA to DFA conversion)
//! - Partition-refinement DFA minimization
//! - Transition table rendering over the read-only [`FiniteAutomaton`] view

mod dfa;
mod minimize;
mod nfa;
mod state;
mod subset_construction;
mod symbol;
mod table;

pub use dfa::Dfa;
pub use minimize::minimize;
pub use nfa::Nfa;
pub use state::{StateId, StateSet};
pub use subset_construction::nfa_to_dfa;
pub use symbol::{EPSILON, Symbol, is_epsilon};
pub use table::{TransitionTable, transition_table};

use std::collections::BTreeSet;

/// Read-only view shared by [`Nfa`] and [`Dfa`].
pub trait FiniteAutomaton {
    /// All states, ascending.
    fn states(&self) -> &StateSet;

    /// Input symbols. Never contains [`EPSILON`].
    fn alphabet(&self) -> &BTreeSet<Symbol>;

    fn start_state(&self) -> Option<StateId>;

    fn accept_states(&self) -> &StateSet;

    /// Whether this is the deterministic representation. A type tag: it does
    /// not inspect the transitions.
    fn is_deterministic(&self) -> bool;

    /// Destinations of `state` on `symbol` (which may be [`EPSILON`] for an NFA).
    /// Empty when there is no transition.
    fn successors(&self, state: StateId, symbol: Symbol) -> StateSet;

    fn is_accepting(&self, state: StateId) -> bool {
        self.accept_states().contains(state)
    }
}
