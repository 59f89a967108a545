//! Non-deterministic Finite Automaton with epsilon transitions.

use crate::automaton::FiniteAutomaton;
use crate::automaton::dfa::Dfa;
use crate::automaton::state::{StateId, StateSet};
use crate::automaton::subset_construction::nfa_to_dfa;
use crate::automaton::symbol::{EPSILON, Symbol, is_epsilon};
use indexmap::IndexMap;
use std::collections::{BTreeSet, HashMap, VecDeque};

/// A Non-deterministic Finite Automaton.
#[derive(Debug, Clone, Default)]
pub struct Nfa {
    /// All registered states
    states: StateSet,
    /// All symbols used (excluding epsilon)
    alphabet: BTreeSet<Symbol>,
    /// Start state (None until one is set)
    start_state: Option<StateId>,
    /// Final (accepting) states
    accept_states: StateSet,
    /// Transitions: (source, symbol) -> set of destination states
    /// For epsilon transitions, symbol == EPSILON
    transitions: HashMap<(StateId, Symbol), StateSet>,
}

impl Nfa {
    /// Create a new empty NFA.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble an NFA from the pieces of a finished construction fragment.
    /// The transition map is moved in as is; every state it mentions gets registered.
    pub(crate) fn from_parts(
        start_state: StateId,
        accept_states: StateSet,
        transitions: HashMap<(StateId, Symbol), StateSet>,
    ) -> Self {
        let mut nfa = Self::new();
        for (&(source, symbol), destinations) in &transitions {
            nfa.states.insert(source);
            nfa.states.union_with(destinations);
            if !is_epsilon(symbol) {
                nfa.alphabet.insert(symbol);
            }
        }
        nfa.transitions = transitions;
        nfa.set_start_state(start_state);
        for state in accept_states.iter() {
            nfa.add_state(state, true);
        }
        nfa
    }

    /// Register a state. Calling again with `accept == true` makes it accepting;
    /// a later call never removes accept status.
    pub fn add_state(&mut self, state: StateId, accept: bool) {
        self.states.insert(state);
        if accept {
            self.accept_states.insert(state);
        }
    }

    /// Add a symbol to the alphabet. EPSILON is never an alphabet member and is ignored.
    pub fn add_symbol(&mut self, symbol: Symbol) {
        if is_epsilon(symbol) {
            log::warn!("ignoring epsilon offered as an NFA alphabet symbol");
            return;
        }
        self.alphabet.insert(symbol);
    }

    /// Set the start state, registering it if unseen.
    pub fn set_start_state(&mut self, state: StateId) {
        self.states.insert(state);
        self.start_state = Some(state);
    }

    /// Add a transition from source to destination on the given symbol.
    pub fn add_transition(&mut self, source: StateId, symbol: Symbol, destination: StateId) {
        self.states.insert(source);
        self.states.insert(destination);

        if !is_epsilon(symbol) {
            self.alphabet.insert(symbol);
        }

        self.transitions
            .entry((source, symbol))
            .or_default()
            .insert(destination);
    }

    /// Add an epsilon transition from source to destination.
    pub fn add_epsilon_transition(&mut self, source: StateId, destination: StateId) {
        self.add_transition(source, EPSILON, destination);
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

    /// Get the alphabet (all symbols except epsilon).
    pub fn alphabet(&self) -> &BTreeSet<Symbol> {
        &self.alphabet
    }

    /// Get the transition table.
    pub fn transition_table(&self) -> &HashMap<(StateId, Symbol), StateSet> {
        &self.transitions
    }

    /// Destinations of `state` on `symbol`, if there are any.
    pub fn destinations(&self, state: StateId, symbol: Symbol) -> Option<&StateSet> {
        self.transitions.get(&(state, symbol))
    }

    /// Compute the epsilon closure of a single state using BFS.
    pub fn epsilon_closure_single(&self, state: StateId) -> StateSet {
        let mut closure = StateSet::singleton(state, self.capacity());
        let mut queue = VecDeque::from([state]);

        while let Some(s) = queue.pop_front() {
            // Follow epsilon transitions
            if let Some(destinations) = self.transitions.get(&(s, EPSILON)) {
                for dest in destinations.iter() {
                    if closure.insert(dest) {
                        queue.push_back(dest);
                    }
                }
            }
        }

        closure
    }

    /// Get the epsilon closure of a set of states.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut closure = StateSet::with_capacity(self.capacity());
        for state in states.iter() {
            if !closure.contains(state) {
                closure.union_with(&self.epsilon_closure_single(state));
            }
        }
        closure
    }

    /// Get the states reachable from a set of states on a given symbol.
    /// Returns the epsilon closure of the reached states.
    pub fn move_on_symbol(&self, states: &StateSet, symbol: Symbol) -> StateSet {
        debug_assert!(!is_epsilon(symbol), "Use epsilon_closure for epsilon moves");

        let mut reached = StateSet::with_capacity(self.capacity());

        for state in states.iter() {
            if let Some(destinations) = self.transitions.get(&(state, symbol)) {
                reached.union_with(destinations);
            }
        }

        self.epsilon_closure(&reached)
    }

    /// Get all transitions as an iterator.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, Symbol, StateId)> + '_ {
        self.transitions
            .iter()
            .flat_map(|(&(src, sym), dests)| dests.iter().map(move |dst| (src, sym, dst)))
    }

    /// Convert to an ordered map representation: source, then symbol, ascending.
    pub fn to_transition_map(&self) -> IndexMap<StateId, IndexMap<Symbol, Vec<StateId>>> {
        let mut keys: Vec<&(StateId, Symbol)> = self.transitions.keys().collect();
        keys.sort_unstable();

        let mut map: IndexMap<StateId, IndexMap<Symbol, Vec<StateId>>> = IndexMap::new();
        for key in keys {
            let (src, sym) = *key;
            map.entry(src)
                .or_default()
                .entry(sym)
                .or_default()
                .extend(self.transitions[key].iter());
        }

        map
    }

    /// Determinize this NFA. See [`nfa_to_dfa`].
    pub fn to_dfa(&self) -> Dfa {
        nfa_to_dfa(self)
    }

    fn capacity(&self) -> usize {
        self.states.capacity()
    }
}

impl FiniteAutomaton for Nfa {
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
        false
    }

    fn successors(&self, state: StateId, symbol: Symbol) -> StateSet {
        self.destinations(state, symbol).cloned().unwrap_or_default()
    }
}
