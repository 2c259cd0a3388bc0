use super::super::error::{EvalError, ParseError};
use super::super::{op_function, Assignment, Operator, Token};
use super::BooleanExpression;
use super::BooleanExpression::*;
use super::_impl_parser::parse_boolean_expression;
use std::convert::TryFrom;
use std::fmt::{Display, Error, Formatter};

impl TryFrom<&str> for BooleanExpression {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_boolean_expression(value)
    }
}

/// Fully parenthesized, using the same symbols as the input syntax, so the output
/// can be parsed again.
impl Display for BooleanExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Variable(name) => write!(f, "{}", name),
            Not(inner) => write!(f, "{}'", inner),
            And(l, r) => write!(f, "({}*{})", l, r),
            Or(l, r) => write!(f, "({}+{})", l, r),
            Xor(l, r) => write!(f, "({}^{})", l, r),
        }
    }
}

impl BooleanExpression {
    /// Evaluate this expression directly in the given `assignment`.
    pub fn eval_in<A: Assignment + ?Sized>(&self, assignment: &A) -> Result<bool, EvalError> {
        Ok(match self {
            Variable(name) => assignment
                .value_of(name)
                .ok_or_else(|| EvalError::UndefinedVariable(name.clone()))?,
            Not(inner) => op_function::not(inner.eval_in(assignment)?),
            And(l, r) => op_function::and(l.eval_in(assignment)?, r.eval_in(assignment)?),
            Or(l, r) => op_function::or(l.eval_in(assignment)?, r.eval_in(assignment)?),
            Xor(l, r) => op_function::xor(l.eval_in(assignment)?, r.eval_in(assignment)?),
        })
    }

    /// Names of all variables in this expression, in the order of their first appearance.
    pub fn variables(&self) -> Vec<String> {
        let mut result = Vec::new();
        self.push_variables(&mut result);
        result
    }

    /// Produce the postfix notation of this expression (post-order traversal of the tree).
    pub fn to_postfix(&self) -> Vec<Token> {
        let mut result = Vec::new();
        self.push_postfix(&mut result);
        result
    }

    fn push_variables(&self, result: &mut Vec<String>) {
        match self {
            Variable(name) => {
                if !result.contains(name) {
                    result.push(name.clone());
                }
            }
            Not(inner) => inner.push_variables(result),
            And(l, r) | Or(l, r) | Xor(l, r) => {
                l.push_variables(result);
                r.push_variables(result);
            }
        }
    }

    fn push_postfix(&self, result: &mut Vec<Token>) {
        match self {
            Variable(name) => result.push(Token::new(name)),
            Not(inner) => {
                inner.push_postfix(result);
                result.push(Token::from(Operator::Not));
            }
            And(l, r) => Self::push_binary_postfix(l, r, Operator::And, result),
            Or(l, r) => Self::push_binary_postfix(l, r, Operator::Or, result),
            Xor(l, r) => Self::push_binary_postfix(l, r, Operator::Xor, result),
        }
    }

    fn push_binary_postfix(
        l: &BooleanExpression,
        r: &BooleanExpression,
        operator: Operator,
        result: &mut Vec<Token>,
    ) {
        l.push_postfix(result);
        r.push_postfix(result);
        result.push(Token::from(operator));
    }
}
