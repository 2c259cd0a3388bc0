use super::error::EvalError;
use super::{op_function, Assignment, Operator, Token, TokenKind};
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Evaluate a `postfix` token sequence in the given `assignment`.
///
/// The evaluation uses its own value stack, so the same postfix sequence can be evaluated
/// in many assignments (possibly concurrently).
///
/// Fails when a variable has no value, when an operator is missing operands, when the
/// sequence contains a token which is not a variable or operator (this includes
/// parentheses), or when the sequence does not reduce to exactly one value.
pub fn evaluate<A: Assignment + ?Sized>(
    postfix: &[Token],
    assignment: &A,
) -> Result<bool, EvalError> {
    let mut stack: Vec<bool> = Vec::with_capacity(postfix.len());
    for token in postfix {
        match token.kind() {
            Some(TokenKind::Variable) => {
                let value = assignment
                    .value_of(token.as_str())
                    .ok_or_else(|| EvalError::UndefinedVariable(token.to_string()))?;
                stack.push(value);
            }
            Some(TokenKind::Operator(Operator::Not)) => {
                let value = stack.pop().ok_or(EvalError::StackUnderflow)?;
                stack.push(op_function::not(value));
            }
            Some(TokenKind::Operator(operator)) => {
                let function = op_function::binary(operator)
                    .ok_or_else(|| EvalError::UnknownToken(token.to_string()))?;
                // Right operand is on top of the stack.
                let right = stack.pop();
                let left = stack.pop();
                match (left, right) {
                    (Some(left), Some(right)) => stack.push(function(left, right)),
                    _ => return Err(EvalError::StackUnderflow),
                }
            }
            Some(TokenKind::OpenParen) | Some(TokenKind::CloseParen) | None => {
                return Err(EvalError::UnknownToken(token.to_string()));
            }
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(EvalError::MalformedExpression),
    }
}

/// Values are looked up by exact name first, then ignoring ASCII case.
impl<S: BuildHasher> Assignment for HashMap<String, bool, S> {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.get(name).cloned().or_else(|| {
            self.iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| *value)
        })
    }
}
