//! DFA minimization by iterative partition refinement.
//!
//! States start out split into accepting and non-accepting blocks. Every pass
//! walks all blocks and splits a block whenever two of its members disagree on
//! which block one of their successors lives in, or when only one of them has a
//! transition on some symbol. Passes repeat until nothing splits.

use crate::automaton::dfa::Dfa;
use crate::automaton::state::{StateId, StateSet};
use std::collections::HashMap;

/// Minimize a DFA. Returns a new DFA with one state per equivalence block.
///
/// Blocks (and so the output state ids) are ordered deterministically: each pass
/// keeps the block order of the previous pass and emits split groups in order of
/// their smallest member.
pub fn minimize(dfa: &Dfa) -> Dfa {
    if dfa.start_state().is_none() || dfa.states().is_empty() {
        return Dfa::new();
    }

    // Initial partition: final states and non-final states
    let accepting = dfa.states().intersection(dfa.accept_states());
    let non_accepting = dfa.states().difference(dfa.accept_states());

    let mut partition: Vec<Vec<StateId>> = [accepting, non_accepting]
        .into_iter()
        .filter(|block| !block.is_empty())
        .map(|block| block.to_vec())
        .collect();

    let mut pass = 0;
    loop {
        pass += 1;
        let block_of = block_index(&partition);
        let mut changed = false;
        let mut refined = Vec::with_capacity(partition.len());

        for block in &partition {
            if block.len() <= 1 {
                refined.push(block.clone());
                continue;
            }

            let mut groups: Vec<Vec<StateId>> = vec![vec![block[0]]];
            for &state in &block[1..] {
                match groups
                    .iter_mut()
                    .find(|group| equivalent(dfa, group[0], state, &block_of))
                {
                    Some(group) => group.push(state),
                    None => {
                        groups.push(vec![state]);
                        changed = true;
                    }
                }
            }
            refined.extend(groups);
        }

        log::trace!("refinement pass {pass}: {} blocks", refined.len());
        partition = refined;
        if !changed {
            break;
        }
    }

    let minimized = build_minimized_dfa(dfa, &partition);
    log::debug!(
        "minimized DFA: {} states -> {} states",
        dfa.states().len(),
        minimized.states().len()
    );
    minimized
}

fn block_index(partition: &[Vec<StateId>]) -> HashMap<StateId, usize> {
    partition
        .iter()
        .enumerate()
        .flat_map(|(idx, block)| block.iter().map(move |&state| (state, idx)))
        .collect()
}

/// Whether `a` and `b` are indistinguishable under the current partition.
/// Stops at the first symbol whose successors disagree.
fn equivalent(dfa: &Dfa, a: StateId, b: StateId, block_of: &HashMap<StateId, usize>) -> bool {
    if dfa.accept_states().contains(a) != dfa.accept_states().contains(b) {
        return false;
    }

    dfa.alphabet().iter().all(|&symbol| {
        match (dfa.transition(a, symbol), dfa.transition(b, symbol)) {
            (None, None) => true,
            (Some(dest_a), Some(dest_b)) => block_of.get(&dest_a) == block_of.get(&dest_b),
            _ => false,
        }
    })
}

/// Build a minimized DFA from partitions.
fn build_minimized_dfa(dfa: &Dfa, partition: &[Vec<StateId>]) -> Dfa {
    let mut minimized = Dfa::new();
    let block_of = block_index(partition);

    for &symbol in dfa.alphabet() {
        minimized.add_symbol(symbol);
    }

    for (idx, block) in partition.iter().enumerate() {
        let new_state = idx as StateId;
        // Blocks are ascending, so the first member is the smallest id.
        let representative = block[0];
        minimized.add_state(new_state, dfa.accept_states().contains(representative));

        if dfa.start_state().is_some_and(|start| block.contains(&start)) {
            minimized.set_start_state(new_state);
        }
    }

    // Add transitions (use representative state from each partition)
    for (idx, block) in partition.iter().enumerate() {
        let representative = block[0];
        for &symbol in dfa.alphabet() {
            if let Some(dest) = dfa.transition(representative, symbol) {
                if let Some(&new_dest) = block_of.get(&dest) {
                    minimized.add_transition(idx as StateId, symbol, new_dest as StateId);
                }
            }
        }
    }

    // Build state mapping from minimized states to original NFA states
    if let Some(orig_mapping) = dfa.state_mapping() {
        let mut new_mapping: HashMap<StateId, Vec<StateId>> = HashMap::new();
        for (idx, block) in partition.iter().enumerate() {
            let nfa_states: StateSet = block
                .iter()
                .filter_map(|old| orig_mapping.get(old))
                .flatten()
                .copied()
                .collect();
            new_mapping.insert(idx as StateId, nfa_states.to_vec());
        }
        minimized.set_state_mapping(new_mapping);
    }

    minimized
}
