//! Thompson construction: postfix tokens to an NFA.

use crate::automaton::{EPSILON, Nfa, StateId, StateSet, Symbol};
use crate::error::RegexError;
use crate::regex::postfix::{Operator, Token};
use std::collections::HashMap;

type TransitionMap = HashMap<(StateId, Symbol), StateSet>;

/// A partial automaton for one sub-expression.
#[derive(Debug)]
struct Fragment {
    start: StateId,
    accepts: StateSet,
    transitions: TransitionMap,
}

fn connect(transitions: &mut TransitionMap, from: StateId, symbol: Symbol, to: StateId) {
    transitions.entry((from, symbol)).or_default().insert(to);
}

impl Fragment {
    /// Move every transition of `other` into this fragment.
    fn absorb(&mut self, other: TransitionMap) {
        for (key, destinations) in other {
            self.transitions.entry(key).or_default().union_with(&destinations);
        }
    }
}

/// Evaluates postfix tokens over a stack of fragments. State ids come from a
/// counter owned by the builder, so every build numbers its states from 0.
#[derive(Debug, Default)]
pub(crate) struct ThompsonBuilder {
    next_state: StateId,
    stack: Vec<Fragment>,
}

impl ThompsonBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Consume the whole postfix sequence and materialize the NFA.
    pub(crate) fn build(mut self, postfix: &[Token]) -> Result<Nfa, RegexError> {
        for (position, &token) in postfix.iter().enumerate() {
            match token {
                Token::Literal(symbol) => self.literal(symbol),
                Token::Operator(operator) => self.apply(operator, position)?,
            }
        }

        match self.stack.pop() {
            Some(fragment) if self.stack.is_empty() => Ok(Nfa::from_parts(
                fragment.start,
                fragment.accepts,
                fragment.transitions,
            )),
            leftover => Err(RegexError::MalformedExpression {
                fragments: self.stack.len() + usize::from(leftover.is_some()),
            }),
        }
    }

    fn fresh_state(&mut self) -> StateId {
        let id = self.next_state;
        self.next_state += 1;
        id
    }

    fn literal(&mut self, symbol: Symbol) {
        let start = self.fresh_state();
        let end = self.fresh_state();
        let mut fragment = Fragment {
            start,
            accepts: StateSet::singleton(end, end as usize + 1),
            transitions: TransitionMap::new(),
        };
        connect(&mut fragment.transitions, start, symbol, end);
        self.stack.push(fragment);
    }

    /// Pops the operands of `operator` and pushes the combined fragment.
    fn apply(&mut self, operator: Operator, position: usize) -> Result<(), RegexError> {
        let combined = match operator {
            Operator::Star => {
                let inner = self.operand(operator, position)?;
                self.star(inner)
            }
            Operator::Concat => {
                let right = self.operand(operator, position)?;
                let left = self.operand(operator, position)?;
                Self::concat(left, right)
            }
            Operator::Union => {
                let right = self.operand(operator, position)?;
                let left = self.operand(operator, position)?;
                self.union(left, right)
            }
        };
        self.stack.push(combined);
        Ok(())
    }

    fn operand(&mut self, operator: Operator, position: usize) -> Result<Fragment, RegexError> {
        self.stack
            .pop()
            .ok_or(RegexError::MissingOperand { operator, position })
    }

    fn concat(mut left: Fragment, right: Fragment) -> Fragment {
        for accept in left.accepts.iter() {
            connect(&mut left.transitions, accept, EPSILON, right.start);
        }
        left.accepts = right.accepts;
        left.absorb(right.transitions);
        left
    }

    fn union(&mut self, left: Fragment, right: Fragment) -> Fragment {
        let start = self.fresh_state();
        let end = self.fresh_state();
        let mut fragment = Fragment {
            start,
            accepts: StateSet::singleton(end, end as usize + 1),
            transitions: left.transitions,
        };
        fragment.absorb(right.transitions);

        connect(&mut fragment.transitions, start, EPSILON, left.start);
        connect(&mut fragment.transitions, start, EPSILON, right.start);
        for accept in left.accepts.iter().chain(right.accepts.iter()) {
            connect(&mut fragment.transitions, accept, EPSILON, end);
        }
        fragment
    }

    fn star(&mut self, inner: Fragment) -> Fragment {
        let start = self.fresh_state();
        let end = self.fresh_state();
        let Fragment {
            start: inner_start,
            accepts,
            mut transitions,
        } = inner;

        connect(&mut transitions, start, EPSILON, inner_start);
        connect(&mut transitions, start, EPSILON, end);
        for accept in accepts.iter() {
            connect(&mut transitions, accept, EPSILON, inner_start);
            connect(&mut transitions, accept, EPSILON, end);
        }

        Fragment {
            start,
            accepts: StateSet::singleton(end, end as usize + 1),
            transitions,
        }
    }
}
