//! Error types of the expression processing pipeline.
//!
//! Only `ValidationFailure` is expected in normal use. The remaining errors are defensive:
//! they signal input which slipped through validation (or a token sequence which was
//! constructed by hand) and must be reported rather than assumed impossible.

use thiserror::Error;

/// The input does not describe a well-formed expression.
///
/// `invalid_substrings` lists the maximal runs of unsupported characters in the input. It
/// can be empty even though the input is invalid, e.g. for `A++B` or `(A+B`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid expression{}", describe_substrings(.invalid_substrings))]
pub struct ValidationFailure {
    invalid_substrings: Vec<String>,
}

/// Errors that can occur while splitting the input into tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// Non-empty input without a single supported character.
    #[error("no recognizable tokens in `{0}`")]
    NoRecognizableTokens(String),
}

/// Errors that can occur during infix to postfix conversion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// An opening parenthesis is never closed.
    #[error("unmatched `(`")]
    UnmatchedOpenParen,

    /// A closing parenthesis has no opening counterpart.
    #[error("unmatched `)`")]
    UnmatchedCloseParen,

    /// The token is not a variable, operator or parenthesis.
    #[error("unknown token `{0}`")]
    UnknownToken(String),
}

/// Errors that can occur when evaluating a postfix token sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The assignment does not provide a value for this variable.
    #[error("undefined variable `{0}`")]
    UndefinedVariable(String),

    /// An operator is missing some of its operands.
    #[error("operator is missing an operand")]
    StackUnderflow,

    /// The token is not a variable or operator (parentheses included).
    #[error("unknown token `{0}`")]
    UnknownToken(String),

    /// The sequence does not reduce to exactly one value.
    #[error("malformed expression")]
    MalformedExpression,
}

/// Errors that can occur when parsing a `BooleanExpression` tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    #[error("unmatched `(`")]
    UnmatchedOpenParen,

    #[error("unmatched `)`")]
    UnmatchedCloseParen,

    /// An operator has nothing on one of its sides.
    #[error("expected variable or (...), found nothing")]
    MissingOperand,

    /// Operands are next to each other without an operator between them.
    #[error("expected operator, found `{0}`")]
    UnexpectedToken(String),
}

/// Failure of the whole processing pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error("invalid expression: {0}")]
    Tokenize(#[from] TokenizeError),

    #[error("invalid expression: {0}")]
    Conversion(#[from] ConversionError),

    /// Caller-level limit, see `ProcessingLimits`.
    #[error("expression has {found} variables, but at most {limit} are allowed")]
    TooManyVariables { found: usize, limit: usize },
}

impl ValidationFailure {
    pub fn new(invalid_substrings: Vec<String>) -> ValidationFailure {
        ValidationFailure { invalid_substrings }
    }

    /// Maximal runs of unsupported characters found in the input, in order of appearance.
    pub fn invalid_substrings(&self) -> &[String] {
        &self.invalid_substrings
    }
}

impl Error {
    /// Unsupported characters of the rejected input, if the failure was caused by them.
    pub fn invalid_substrings(&self) -> &[String] {
        match self {
            Error::Validation(failure) => failure.invalid_substrings(),
            _ => &[],
        }
    }
}

fn describe_substrings(substrings: &[String]) -> String {
    if substrings.is_empty() {
        String::new()
    } else {
        let quoted: Vec<String> = substrings.iter().map(|s| format!("`{s}`")).collect();
        format!(", unsupported characters: {}", quoted.join(", "))
    }
}
