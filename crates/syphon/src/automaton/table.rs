//! Transition table rendering.

use crate::automaton::symbol::{EPSILON, Symbol};
use crate::automaton::{FiniteAutomaton, StateSet};
use std::fmt;

/// Tab-separated transition table of an automaton, built on [`FiniteAutomaton`] only.
///
/// ```text
/// DFA Transition Table:
/// State	a	Accept?
/// 0(S)	1	No
/// 1	-	Yes
/// ```
///
/// NFA tables carry an extra leading `epsilon` column and print destination sets
/// as `{1,2}`.
pub struct TransitionTable<'a, A: ?Sized> {
    automaton: &'a A,
}

/// Render `automaton` as a [`TransitionTable`].
pub fn transition_table<A: FiniteAutomaton + ?Sized>(automaton: &A) -> TransitionTable<'_, A> {
    TransitionTable { automaton }
}

impl<A: FiniteAutomaton + ?Sized> fmt::Display for TransitionTable<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let automaton = self.automaton;
        let deterministic = automaton.is_deterministic();

        let mut columns: Vec<Symbol> = Vec::with_capacity(automaton.alphabet().len() + 1);
        if !deterministic {
            columns.push(EPSILON);
        }
        columns.extend(automaton.alphabet().iter().copied());

        writeln!(
            f,
            "{} Transition Table:",
            if deterministic { "DFA" } else { "NFA" }
        )?;

        write!(f, "State\t")?;
        for &symbol in &columns {
            if symbol == EPSILON {
                write!(f, "epsilon\t")?;
            } else {
                write!(f, "{symbol}\t")?;
            }
        }
        writeln!(f, "Accept?")?;

        for state in automaton.states().iter() {
            let marker = if automaton.start_state() == Some(state) {
                "(S)"
            } else {
                ""
            };
            write!(f, "{state}{marker}\t")?;

            for &symbol in &columns {
                let successors = automaton.successors(state, symbol);
                if successors.is_empty() {
                    write!(f, "-\t")?;
                } else if deterministic {
                    write_ids(f, &successors)?;
                    write!(f, "\t")?;
                } else {
                    write!(f, "{{")?;
                    write_ids(f, &successors)?;
                    write!(f, "}}\t")?;
                }
            }

            writeln!(
                f,
                "{}",
                if automaton.is_accepting(state) { "Yes" } else { "No" }
            )?;
        }

        Ok(())
    }
}

fn write_ids(f: &mut fmt::Formatter<'_>, ids: &StateSet) -> fmt::Result {
    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{id}")?;
    }
    Ok(())
}
