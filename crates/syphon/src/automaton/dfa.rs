//! Deterministic Finite Automaton (DFA) implementation.

use crate::automaton::FiniteAutomaton;
use crate::automaton::minimize::minimize;
use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::{Symbol, is_epsilon};
use indexmap::IndexMap;
use std::collections::{BTreeSet, HashMap};

/// A Deterministic Finite Automaton.
///
/// The transition function is partial: a missing `(state, symbol)` entry means
/// the input is rejected, not that an explicit dead state exists.
#[derive(Debug, Clone, Default)]
pub struct Dfa {
    /// All registered states
    states: StateSet,
    /// Start state (None if empty)
    start_state: Option<StateId>,
    /// Final (accepting) states
    accept_states: StateSet,
    /// Transitions: (source, symbol) -> destination
    transitions: HashMap<(StateId, Symbol), StateId>,
    /// All symbols used
    alphabet: BTreeSet<Symbol>,
    /// Mapping from DFA states to original NFA states (if created via subset construction)
    state_mapping: Option<HashMap<StateId, Vec<StateId>>>,
}

impl Dfa {
    /// Create a new empty DFA.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a state. Repeated calls may add accept status but never remove it.
    pub fn add_state(&mut self, state: StateId, accept: bool) {
        self.states.insert(state);
        if accept {
            self.accept_states.insert(state);
        }
    }

    /// Add a symbol to the alphabet. EPSILON is ignored.
    pub fn add_symbol(&mut self, symbol: Symbol) {
        if is_epsilon(symbol) {
            log::warn!("ignoring epsilon offered as a DFA alphabet symbol");
            return;
        }
        self.alphabet.insert(symbol);
    }

    /// Set the start state, registering it if unseen.
    pub fn set_start_state(&mut self, state: StateId) {
        self.states.insert(state);
        self.start_state = Some(state);
    }

    /// Add a transition. A second transition for the same `(source, symbol)`
    /// replaces the first. Epsilon transitions are ignored.
    pub fn add_transition(&mut self, source: StateId, symbol: Symbol, destination: StateId) {
        if is_epsilon(symbol) {
            log::warn!("ignoring epsilon transition {source} -> {destination} on a DFA");
            return;
        }
        self.states.insert(source);
        self.states.insert(destination);
        self.alphabet.insert(symbol);
        self.transitions.insert((source, symbol), destination);
    }

    /// Get the transition from a state on a symbol.
    pub fn transition(&self, source: StateId, symbol: Symbol) -> Option<StateId> {
        self.transitions.get(&(source, symbol)).copied()
    }

    /// Get all registered states.
    pub fn states(&self) -> &StateSet {
        &self.states
    }

    /// Get the start state.
    pub fn start_state(&self) -> Option<StateId> {
        self.start_state
    }

    /// Get the final states.
    pub fn accept_states(&self) -> &StateSet {
        &self.accept_states
    }

    /// Get the alphabet.
    pub fn alphabet(&self) -> &BTreeSet<Symbol> {
        &self.alphabet
    }

    /// Get the transition table.
    pub fn transition_table(&self) -> &HashMap<(StateId, Symbol), StateId> {
        &self.transitions
    }

    /// Set the state mapping from original NFA states.
    pub(crate) fn set_state_mapping(&mut self, mapping: HashMap<StateId, Vec<StateId>>) {
        self.state_mapping = Some(mapping);
    }

    /// Get the state mapping.
    pub fn state_mapping(&self) -> Option<&HashMap<StateId, Vec<StateId>>> {
        self.state_mapping.as_ref()
    }

    /// Get all transitions as an iterator.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, Symbol, StateId)> + '_ {
        self.transitions
            .iter()
            .map(|(&(src, sym), &dst)| (src, sym, dst))
    }

    /// Convert to an ordered map representation: source, then symbol, ascending.
    pub fn to_transition_map(&self) -> IndexMap<StateId, IndexMap<Symbol, StateId>> {
        let mut edges: Vec<(StateId, Symbol, StateId)> = self.transitions().collect();
        edges.sort_unstable();

        let mut map: IndexMap<StateId, IndexMap<Symbol, StateId>> = IndexMap::new();
        for (src, sym, dst) in edges {
            map.entry(src).or_default().insert(sym, dst);
        }
        map
    }

    /// Minimize the DFA by partition refinement.
    /// Returns a new minimized DFA.
    pub fn minimize(&self) -> Dfa {
        minimize(self)
    }
}

impl FiniteAutomaton for Dfa {
    fn states(&self) -> &StateSet {
        &self.states
    }

    fn alphabet(&self) -> &BTreeSet<Symbol> {
        &self.alphabet
    }

    fn start_state(&self) -> Option<StateId> {
        self.start_state
    }

    fn accept_states(&self) -> &StateSet {
        &self.accept_states
    }

    fn is_deterministic(&self) -> bool {
        true
    }

    fn successors(&self, state: StateId, symbol: Symbol) -> StateSet {
        self.transition(state, symbol)
            .map(|dst| StateSet::singleton(dst, dst as usize + 1))
            .unwrap_or_default()
    }
}
