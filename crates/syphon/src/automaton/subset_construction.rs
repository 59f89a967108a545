//! Subset construction algorithm for converting an NFA to a DFA.

use crate::automaton::dfa::Dfa;
use crate::automaton::nfa::Nfa;
use crate::automaton::state::{StateId, StateSet};
use indexmap::IndexMap;
use std::collections::{HashMap, VecDeque};

/// Convert an NFA to a DFA using the powerset construction algorithm.
///
/// DFA states are numbered in breadth-first discovery order, the closure of the
/// NFA start state being 0. An NFA without states yields an empty DFA.
pub fn nfa_to_dfa(nfa: &Nfa) -> Dfa {
    // Each DFA state corresponds to a set of NFA states
    // We map sets of NFA states (sorted) to DFA state IDs
    let mut state_mapping: IndexMap<Vec<StateId>, StateId> = IndexMap::new();
    let mut dfa = Dfa::new();

    let Some(nfa_start) = nfa.start_state() else {
        return dfa;
    };
    if nfa.states().is_empty() {
        return dfa;
    }

    for &symbol in nfa.alphabet() {
        dfa.add_symbol(symbol);
    }

    // Initial DFA state is the epsilon closure of the NFA start state
    let initial_set = nfa.epsilon_closure_single(nfa_start);
    let initial_dfa_state: StateId = 0;
    state_mapping.insert(initial_set.to_vec(), initial_dfa_state);
    dfa.add_state(
        initial_dfa_state,
        initial_set.intersects(nfa.accept_states()),
    );
    dfa.set_start_state(initial_dfa_state);

    let mut worklist: VecDeque<(StateId, StateSet)> = VecDeque::new();
    worklist.push_back((initial_dfa_state, initial_set));

    while let Some((current_dfa_state, current_nfa_set)) = worklist.pop_front() {
        for &symbol in nfa.alphabet() {
            let next_nfa_set = nfa.move_on_symbol(&current_nfa_set, symbol);

            if next_nfa_set.is_empty() {
                // No transition on this symbol - skip (DFA will have no transition)
                continue;
            }

            let next_vec = next_nfa_set.to_vec();
            let next_dfa_state = if let Some(&existing) = state_mapping.get(&next_vec) {
                existing
            } else {
                let new_state = state_mapping.len() as StateId;
                state_mapping.insert(next_vec, new_state);
                dfa.add_state(new_state, next_nfa_set.intersects(nfa.accept_states()));
                log::trace!("subset {next_nfa_set:?} became DFA state {new_state}");

                worklist.push_back((new_state, next_nfa_set));
                new_state
            };

            dfa.add_transition(current_dfa_state, symbol, next_dfa_state);
        }
    }

    log::debug!(
        "subset construction: {} NFA states -> {} DFA states",
        nfa.states().len(),
        state_mapping.len()
    );

    // Store the DFA-to-NFA state mapping in the DFA for later use
    let inverse_mapping: HashMap<StateId, Vec<StateId>> = state_mapping
        .into_iter()
        .map(|(nfa_states, dfa_state)| (dfa_state, nfa_states))
        .collect();
    dfa.set_state_mapping(inverse_mapping);

    dfa
}
