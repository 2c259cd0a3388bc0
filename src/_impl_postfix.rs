use super::error::ConversionError;
use super::{Operator, Token, TokenKind};

/// **(internal)** Items of the operator stack used by the shunting-yard algorithm.
enum StackItem {
    Operator(Operator),
    OpenParen,
}

/// Convert an infix sequence of `tokens` into postfix (reverse Polish) notation using the
/// shunting-yard algorithm.
///
/// Operators bind in the order `'` > `*` > `^` > `+`. Negation is right-associative, binary
/// operators are left-associative. Parentheses do not appear in the output.
///
/// The tokens are expected to pass `is_valid`, but the conversion still checks parentheses
/// and rejects unknown tokens. It does not check operator arity; a sequence like `A B` is
/// converted without complaint and only fails during evaluation.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, ConversionError> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<StackItem> = Vec::new();

    for token in tokens {
        match token.kind() {
            Some(TokenKind::Variable) => output.push(token.clone()),
            Some(TokenKind::Operator(operator)) => {
                while let Some(StackItem::Operator(top)) = stack.last() {
                    let pop = top.precedence() > operator.precedence()
                        || (top.precedence() == operator.precedence()
                            && operator.is_left_associative());
                    if !pop {
                        break;
                    }
                    output.push(Token::from(*top));
                    stack.pop();
                }
                stack.push(StackItem::Operator(operator));
            }
            Some(TokenKind::OpenParen) => stack.push(StackItem::OpenParen),
            Some(TokenKind::CloseParen) => loop {
                match stack.pop() {
                    Some(StackItem::OpenParen) => break,
                    Some(StackItem::Operator(operator)) => output.push(Token::from(operator)),
                    None => return Err(ConversionError::UnmatchedCloseParen),
                }
            },
            None => return Err(ConversionError::UnknownToken(token.to_string())),
        }
    }

    while let Some(item) = stack.pop() {
        match item {
            StackItem::Operator(operator) => output.push(Token::from(operator)),
            StackItem::OpenParen => return Err(ConversionError::UnmatchedOpenParen),
        }
    }

    Ok(output)
}
