#![allow(dead_code)]

use syphon::{Dfa, FiniteAutomaton, Nfa, Symbol};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Run `input` through an NFA by tracking the epsilon-closed set of live states.
pub fn nfa_accepts(nfa: &Nfa, input: &str) -> bool {
    let Some(start) = nfa.start_state() else {
        return false;
    };
    let mut current = nfa.epsilon_closure_single(start);
    for symbol in input.chars() {
        current = nfa.move_on_symbol(&current, symbol);
        if current.is_empty() {
            return false;
        }
    }
    current.intersects(nfa.accept_states())
}

/// Run `input` through a DFA; a missing transition rejects.
pub fn dfa_accepts(dfa: &Dfa, input: &str) -> bool {
    let Some(mut state) = dfa.start_state() else {
        return false;
    };
    for symbol in input.chars() {
        match dfa.transition(state, symbol) {
            Some(next) => state = next,
            None => return false,
        }
    }
    dfa.accept_states().contains(state)
}

/// Every string over `alphabet` of length at most `max_len`, shortest first.
pub fn strings_up_to(alphabet: &[Symbol], max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        frontier = frontier
            .iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |&symbol| {
                    let mut next = prefix.clone();
                    next.push(symbol);
                    next
                })
            })
            .collect();
        all.extend(frontier.iter().cloned());
    }
    all
}

/// The automaton's alphabet plus one symbol it has never seen.
pub fn probe_alphabet<A: FiniteAutomaton + ?Sized>(automaton: &A) -> Vec<Symbol> {
    let mut symbols: Vec<Symbol> = automaton.alphabet().iter().copied().collect();
    symbols.push('z');
    symbols.dedup();
    symbols
}
