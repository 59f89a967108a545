//! Infix to postfix conversion (shunting-yard) with explicit concatenation.

use crate::error::RegexError;
use std::fmt;

/// A regex operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Implicit juxtaposition, written `.` in postfix.
    Concat,
    /// `|`
    Union,
    /// `*`, postfix zero-or-more.
    Star,
}

impl Operator {
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Star => 3,
            Operator::Concat => 2,
            Operator::Union => 1,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Concat => '.',
            Operator::Union => '|',
            Operator::Star => '*',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One postfix token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Literal(char),
    Operator(Operator),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(c) => write!(f, "{c}"),
            Token::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// Literal symbols are ASCII letters and digits.
pub fn is_literal(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

#[derive(Clone, Copy)]
enum Pending {
    Open,
    Operator(Operator),
}

/// Convert an infix regex to postfix tokens.
///
/// A concatenation is inserted wherever an operand ends (literal, `)` or `*`)
/// and the next token starts one (literal or `(`). Operators are ordered by
/// [`Operator::precedence`], left-associative.
pub fn to_postfix(regex: &str) -> Result<Vec<Token>, RegexError> {
    let mut output = Vec::with_capacity(regex.len() * 2);
    let mut pending: Vec<Pending> = Vec::new();
    // Open-paren positions, for error reporting.
    let mut opened: Vec<usize> = Vec::new();
    let mut operand_ended = false;

    for (position, c) in regex.chars().enumerate() {
        let starts_operand = is_literal(c) || c == '(';
        if operand_ended && starts_operand {
            push_operator(&mut output, &mut pending, Operator::Concat);
        }

        match c {
            c if is_literal(c) => {
                output.push(Token::Literal(c));
                operand_ended = true;
            }
            '(' => {
                pending.push(Pending::Open);
                opened.push(position);
                operand_ended = false;
            }
            ')' => {
                if opened.pop().is_none() {
                    return Err(RegexError::UnbalancedParenthesis { position });
                }
                while let Some(top) = pending.pop() {
                    match top {
                        Pending::Open => break,
                        Pending::Operator(op) => output.push(Token::Operator(op)),
                    }
                }
                operand_ended = true;
            }
            '|' => {
                push_operator(&mut output, &mut pending, Operator::Union);
                operand_ended = false;
            }
            '*' => {
                push_operator(&mut output, &mut pending, Operator::Star);
                operand_ended = true;
            }
            character => {
                return Err(RegexError::UnsupportedCharacter {
                    character,
                    position,
                });
            }
        }
    }

    if let Some(&position) = opened.first() {
        return Err(RegexError::UnbalancedParenthesis { position });
    }

    while let Some(top) = pending.pop() {
        if let Pending::Operator(op) = top {
            output.push(Token::Operator(op));
        }
    }

    Ok(output)
}

/// Pop every pending operator of greater or equal precedence, then push `op`.
fn push_operator(output: &mut Vec<Token>, pending: &mut Vec<Pending>, op: Operator) {
    while let Some(&Pending::Operator(top)) = pending.last() {
        if top.precedence() < op.precedence() {
            break;
        }
        output.push(Token::Operator(top));
        pending.pop();
    }
    pending.push(Pending::Operator(op));
}
