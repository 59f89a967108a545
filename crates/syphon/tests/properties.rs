mod common;

use common::{dfa_accepts, nfa_accepts, strings_up_to};
use quickcheck::{Arbitrary, Gen, quickcheck};
use std::collections::BTreeSet;
use syphon::{Dfa, EPSILON, Nfa, StateSet, minimize, nfa_to_dfa, regex_to_nfa};

const SYMBOLS: [char; 2] = ['a', 'b'];
const MAX_LEN: usize = 5;

/// A regex syntax tree, rendered fully parenthesized so any tree is valid input.
#[derive(Clone, Debug)]
enum Ast {
    Literal(char),
    Concat(Box<Ast>, Box<Ast>),
    Union(Box<Ast>, Box<Ast>),
    Star(Box<Ast>),
}

impl Ast {
    fn generate(g: &mut Gen, depth: usize) -> Ast {
        let choice = if depth == 0 { 0 } else { u8::arbitrary(g) % 4 };
        match choice {
            1 => Ast::Concat(
                Box::new(Ast::generate(g, depth - 1)),
                Box::new(Ast::generate(g, depth - 1)),
            ),
            2 => Ast::Union(
                Box::new(Ast::generate(g, depth - 1)),
                Box::new(Ast::generate(g, depth - 1)),
            ),
            3 => Ast::Star(Box::new(Ast::generate(g, depth - 1))),
            _ => Ast::Literal(*g.choose(&SYMBOLS).unwrap_or(&'a')),
        }
    }

    fn render(&self) -> String {
        match self {
            Ast::Literal(c) => c.to_string(),
            Ast::Concat(l, r) => format!("({})({})", l.render(), r.render()),
            Ast::Union(l, r) => format!("({}|{})", l.render(), r.render()),
            Ast::Star(inner) => format!("({})*", inner.render()),
        }
    }

    /// Every index `j` such that `input[i..j]` matches this tree.
    fn ends(&self, input: &[char], i: usize) -> BTreeSet<usize> {
        match self {
            Ast::Literal(c) => match input.get(i) {
                Some(x) if x == c => BTreeSet::from([i + 1]),
                _ => BTreeSet::new(),
            },
            Ast::Concat(l, r) => l
                .ends(input, i)
                .into_iter()
                .flat_map(|mid| r.ends(input, mid))
                .collect(),
            Ast::Union(l, r) => {
                let mut ends = l.ends(input, i);
                ends.extend(r.ends(input, i));
                ends
            }
            Ast::Star(inner) => {
                let mut reached = BTreeSet::from([i]);
                let mut frontier = vec![i];
                while let Some(pos) = frontier.pop() {
                    for next in inner.ends(input, pos) {
                        if reached.insert(next) {
                            frontier.push(next);
                        }
                    }
                }
                reached
            }
        }
    }

    fn matches(&self, input: &str) -> bool {
        let chars: Vec<char> = input.chars().collect();
        self.ends(&chars, 0).contains(&chars.len())
    }
}

impl Arbitrary for Ast {
    fn arbitrary(g: &mut Gen) -> Ast {
        Ast::generate(g, 4)
    }
}

/// A random small NFA over {a, b} with epsilon edges.
#[derive(Clone, Debug)]
struct RandomNfa(Nfa);

impl Arbitrary for RandomNfa {
    fn arbitrary(g: &mut Gen) -> RandomNfa {
        let states = u32::from(u8::arbitrary(g) % 6) + 1;
        let edges = usize::from(u8::arbitrary(g) % 12);
        let mut nfa = Nfa::new();
        nfa.set_start_state(0);
        for state in 0..states {
            nfa.add_state(state, bool::arbitrary(g) && bool::arbitrary(g));
        }
        for _ in 0..edges {
            let from = u32::arbitrary(g) % states;
            let to = u32::arbitrary(g) % states;
            let symbol = *g.choose(&[EPSILON, 'a', 'b']).unwrap_or(&EPSILON);
            nfa.add_transition(from, symbol, to);
        }
        RandomNfa(nfa)
    }
}

/// A random, possibly partial, DFA over {a, b}.
#[derive(Clone, Debug)]
struct RandomDfa(Dfa);

impl Arbitrary for RandomDfa {
    fn arbitrary(g: &mut Gen) -> RandomDfa {
        let states = u32::from(u8::arbitrary(g) % 7) + 1;
        let mut dfa = Dfa::new();
        dfa.set_start_state(0);
        for state in 0..states {
            dfa.add_state(state, bool::arbitrary(g));
            for symbol in SYMBOLS {
                if u8::arbitrary(g) % 5 != 0 {
                    dfa.add_transition(state, symbol, u32::arbitrary(g) % states);
                }
            }
        }
        RandomDfa(dfa)
    }
}

fn same_verdicts(left: impl Fn(&str) -> bool, right: impl Fn(&str) -> bool) -> bool {
    strings_up_to(&SYMBOLS, MAX_LEN)
        .iter()
        .all(|input| left(input) == right(input))
}

quickcheck! {
    fn prop_nfa_matches_reference(ast: Ast) -> bool {
        let Ok(nfa) = regex_to_nfa(&ast.render()) else {
            return false;
        };
        same_verdicts(|s| nfa_accepts(&nfa, s), |s| ast.matches(s))
    }

    fn prop_builds_are_reproducible(ast: Ast) -> bool {
        match (regex_to_nfa(&ast.render()), regex_to_nfa(&ast.render())) {
            (Ok(first), Ok(second)) => {
                first.to_transition_map() == second.to_transition_map()
                    && first.start_state() == second.start_state()
            }
            _ => false,
        }
    }

    fn prop_epsilon_closure_is_idempotent(nfa: RandomNfa, seeds: Vec<u8>) -> bool {
        let nfa = nfa.0;
        let bound = nfa.states().len() as u32;
        let seeds: StateSet = seeds.into_iter().map(|s| u32::from(s) % bound).collect();
        let closure = nfa.epsilon_closure(&seeds);
        nfa.epsilon_closure(&closure) == closure
    }

    fn prop_subset_construction_preserves_language(nfa: RandomNfa) -> bool {
        let nfa = nfa.0;
        let dfa = nfa_to_dfa(&nfa);
        same_verdicts(|s| nfa_accepts(&nfa, s), |s| dfa_accepts(&dfa, s))
    }

    fn prop_regex_pipeline_preserves_language(ast: Ast) -> bool {
        let Ok(nfa) = regex_to_nfa(&ast.render()) else {
            return false;
        };
        let minimized = minimize(&nfa_to_dfa(&nfa));
        same_verdicts(|s| dfa_accepts(&minimized, s), |s| ast.matches(s))
    }

    fn prop_minimize_preserves_language(dfa: RandomDfa) -> bool {
        let dfa = dfa.0;
        let minimized = minimize(&dfa);
        minimized.states().len() <= dfa.states().len()
            && same_verdicts(|s| dfa_accepts(&dfa, s), |s| dfa_accepts(&minimized, s))
    }

    fn prop_minimize_is_idempotent(dfa: RandomDfa) -> bool {
        let once = minimize(&dfa.0);
        minimize(&once).states().len() == once.states().len()
    }
}
