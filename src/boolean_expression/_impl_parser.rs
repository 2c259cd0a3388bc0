//!
//! Expression parsing proceeds in recursive manner in the order of operator precedence:
//! `+`, `^`, `*` and `'`. For each operator, if there is no occurrence in the root of the
//! token tree, we forward the tree to next operator. If there is an occurrence, we split
//! the token tree at the last such occurrence. Right part goes to the next operator, left
//! part is processed by the same operator to extract additional occurrences. This makes all
//! binary operators left-associative.

use super::super::error::ParseError;
use super::super::{tokenize, Operator, Token, TokenKind};
use super::BooleanExpression;
use super::BooleanExpression::*;
use std::slice::Iter;

/// **(internal)** Tokens that can appear in the boolean expression.
/// The tokens form a token tree defined by parenthesis groups.
#[derive(Debug, Eq, PartialEq)]
enum ExprToken {
    Not,                    // '''
    And,                    // '*'
    Or,                     // '+'
    Xor,                    // '^'
    Id(String),             // 'variable'
    Tokens(Vec<ExprToken>), // A block of tokens inside parentheses
}

/// Takes a `String` and turns it into a `BooleanExpression` or `Error` if the string is not valid.
///
/// Unlike `is_valid`, this checks the structure of parenthesized groups as well.
pub fn parse_boolean_expression(from: &str) -> Result<BooleanExpression, ParseError> {
    let tokens = tokenize(from)?;
    let tree = tokenize_group(&mut tokens.iter(), true)?;
    Ok(*(parse_formula(&tree)?))
}

/// **(internal)** Process an iterator of tokens into a vector of `ExprToken`s.
///
/// The outer method always consumes the opening parenthesis and the recursive call consumes the
/// closing parenthesis. Use `top_level` to indicate that there will be no closing parenthesis.
fn tokenize_group(data: &mut Iter<Token>, top_level: bool) -> Result<Vec<ExprToken>, ParseError> {
    let mut output = Vec::new();
    while let Some(token) = data.next() {
        match token.kind() {
            Some(TokenKind::Variable) => output.push(ExprToken::Id(token.to_string())),
            Some(TokenKind::Operator(Operator::Not)) => output.push(ExprToken::Not),
            Some(TokenKind::Operator(Operator::And)) => output.push(ExprToken::And),
            Some(TokenKind::Operator(Operator::Or)) => output.push(ExprToken::Or),
            Some(TokenKind::Operator(Operator::Xor)) => output.push(ExprToken::Xor),
            Some(TokenKind::CloseParen) => {
                return if !top_level {
                    Ok(output)
                } else {
                    Err(ParseError::UnmatchedCloseParen)
                };
            }
            Some(TokenKind::OpenParen) => {
                // start a nested token group
                let tokens = tokenize_group(data, false)?;
                output.push(ExprToken::Tokens(tokens));
            }
            None => return Err(ParseError::UnexpectedToken(token.to_string())),
        }
    }
    if top_level {
        Ok(output)
    } else {
        Err(ParseError::UnmatchedOpenParen)
    }
}

/// **(internal)** Parse a `ExprToken` tree into a `BooleanExpression` (or error if invalid).
fn parse_formula(data: &[ExprToken]) -> Result<Box<BooleanExpression>, ParseError> {
    if data.len() == 1 && matches!(data[0], ExprToken::Tokens(..)) {
        // A "fast-forward" branch for `(...)` formulas that tend to overflow the parser stack.
        return terminal(data);
    }
    or(data)
}

/// **(internal)** Utility method to find last occurrence of a specific token in the token tree.
fn index_of_last(data: &[ExprToken], token: ExprToken) -> Option<usize> {
    data.iter().rposition(|t| *t == token)
}

/// **(internal)** Recursive parsing step 1: extract `+` operators.
fn or(data: &[ExprToken]) -> Result<Box<BooleanExpression>, ParseError> {
    let or_token = index_of_last(data, ExprToken::Or);
    if let Some(or_token) = or_token {
        Ok(Box::new(Or(
            or(&data[..or_token])?,
            xor(&data[(or_token + 1)..])?,
        )))
    } else {
        xor(data)
    }
}

/// **(internal)** Recursive parsing step 2: extract `^` operators.
fn xor(data: &[ExprToken]) -> Result<Box<BooleanExpression>, ParseError> {
    let xor_token = index_of_last(data, ExprToken::Xor);
    if let Some(xor_token) = xor_token {
        Ok(Box::new(Xor(
            xor(&data[..xor_token])?,
            and(&data[(xor_token + 1)..])?,
        )))
    } else {
        and(data)
    }
}

/// **(internal)** Recursive parsing step 3: extract `*` operators.
fn and(data: &[ExprToken]) -> Result<Box<BooleanExpression>, ParseError> {
    let and_token = index_of_last(data, ExprToken::And);
    if let Some(and_token) = and_token {
        Ok(Box::new(And(
            and(&data[..and_token])?,
            terminal(&data[(and_token + 1)..])?,
        )))
    } else {
        terminal(data)
    }
}

/// **(internal)** Recursive parsing step 4: extract terminals and (postfix) negations.
fn terminal(data: &[ExprToken]) -> Result<Box<BooleanExpression>, ParseError> {
    match data {
        [] => Err(ParseError::MissingOperand),
        [inner @ .., ExprToken::Not] => Ok(Box::new(Not(terminal(inner)?))),
        [ExprToken::Id(name)] => Ok(Box::new(Variable(name.clone()))),
        [ExprToken::Tokens(inner)] => parse_formula(inner),
        [ExprToken::Not, ..] => Err(ParseError::MissingOperand),
        [_, unexpected, ..] => Err(ParseError::UnexpectedToken(describe(unexpected))),
        [_] => unreachable!(
            "Binary operators are matched by remaining functions, nothing else should remain."
        ),
    }
}

/// **(internal)** Short text of a token for error messages.
fn describe(token: &ExprToken) -> String {
    match token {
        ExprToken::Not => "'".to_string(),
        ExprToken::And => "*".to_string(),
        ExprToken::Or => "+".to_string(),
        ExprToken::Xor => "^".to_string(),
        ExprToken::Id(name) => name.clone(),
        ExprToken::Tokens(_) => "(...)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(input: &str) -> String {
        format!("{}", parse_boolean_expression(input).unwrap())
    }

    #[test]
    fn parse_boolean_formula_basic() {
        let inputs = vec![
            "V1",      // just a variable name
            "V1'",     // negation
            "(V1*V2)", // and
            "(V1+V2)", // or
            "(V1^V2)", // xor
        ];
        for input in inputs {
            assert_eq!(input, parsed(input));
        }
    }

    #[test]
    fn parse_boolean_formula_operator_priority() {
        assert_eq!("(((A'*B')^C')+D')", parsed("A' * B' ^ C' + D'"));
        assert_eq!("(A+(B^(C*D)))", parsed("A + B ^ C * D"));
    }

    #[test]
    fn parse_boolean_formula_operator_associativity() {
        assert_eq!("((A*B)*C)", parsed("a * b * c"));
        assert_eq!("((A+B)+C)", parsed("a + b + c"));
        assert_eq!("((A^B)^C)", parsed("a ^ b ^ c"));
        assert_eq!("A''", parsed("a''"));
    }

    #[test]
    fn parse_boolean_formula_complex() {
        assert_eq!(
            "((A*B)'+(C'*(D+E)'))",
            parsed("(a*b)' + c'*((d + e))'")
        );
    }

    #[test]
    fn parse_boolean_formula_invalid() {
        let cases = [
            ("(a", ParseError::UnmatchedOpenParen),
            ("b)", ParseError::UnmatchedCloseParen),
            ("(a * (b)", ParseError::UnmatchedOpenParen),
            ("a * (b))", ParseError::UnmatchedCloseParen),
            ("a * * b", ParseError::MissingOperand),
            ("a +", ParseError::MissingOperand),
            ("()", ParseError::MissingOperand),
            ("'a", ParseError::MissingOperand),
            ("a'b", ParseError::UnexpectedToken("'".to_string())),
            ("(a)(b)", ParseError::UnexpectedToken("(...)".to_string())),
            ("", ParseError::MissingOperand),
        ];
        for (input, error) in cases {
            assert_eq!(Err(error), parse_boolean_expression(input), "{input}");
        }
    }
}
