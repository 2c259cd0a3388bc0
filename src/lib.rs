//! # Biodivine/LibTruthTable
//!
//! This crate turns simple Boolean expressions written as text into complete
//! [truth tables](https://en.wikipedia.org/wiki/Truth_table). The expression is validated,
//! split into tokens, converted to postfix (reverse Polish) notation using the
//! [shunting-yard algorithm](https://en.wikipedia.org/wiki/Shunting_yard_algorithm) and then
//! evaluated for every one of the `2^n` valuations of its `n` variables.
//!
//! Supported syntax (whitespace is ignored):
//!
//!  - Variables: a letter followed by letters or digits (`A`, `x1`, `Sensor2`). Variable names
//!    are case-insensitive and always reported in uppercase.
//!  - `'` is negation, written *after* its operand (`A'`, `(A + B)'`).
//!  - `*` is conjunction, `^` is exclusive disjunction and `+` is disjunction.
//!  - Parentheses `(` and `)` group sub-expressions.
//!
//! Operators bind in the order `'`, `*`, `^`, `+` (tightest first). Binary operators are
//! left-associative.
//!
//! The whole pipeline is stateless: every call builds its own working structures, so all
//! types here can be freely shared between threads.
//!
//! ```rust
//! use biodivine_lib_truth_table::*;
//!
//! let table = process(Some("(A * B)' + C'")).unwrap();
//! assert_eq!(vec!["A", "B", "C"], table.variables().names());
//! assert_eq!(8, table.num_rows());
//!
//! // Rows are ordered with the first variable as the most significant bit.
//! assert_eq!(vec!["0", "0", "0", "1"], table.rows()[0].to_strings());
//! assert_eq!(vec!["1", "1", "1", "0"], table.rows()[7].to_strings());
//!
//! // Invalid input produces a diagnostic instead.
//! let error = process(Some("A # B")).unwrap_err();
//! assert_eq!("invalid expression, unsupported characters: `#`", error.to_string());
//! ```
//!
//! The individual stages ([`tokenize`], [`is_valid`], [`invalid_substrings`], [`to_postfix`],
//! [`evaluate`] and [`generate`]) are also available separately. More details can be found
//! in the [tutorial module](./tutorial/index.html).

use std::collections::{HashMap, HashSet};

use fxhash::FxBuildHasher;

pub mod boolean_expression;
pub mod error;
pub mod op_function;
pub mod tutorial;

/// **(internal)** Implementation of the `Token` and `Operator` types.
mod _impl_token;

/// **(internal)** Splitting of raw input strings into `Token`s.
mod _impl_tokenizer;

/// **(internal)** Grammar and character set checks of raw input strings.
mod _impl_validator;

/// **(internal)** Shunting-yard conversion from infix to postfix notation.
mod _impl_postfix;

/// **(internal)** Stack-based evaluation of postfix token sequences.
mod _impl_evaluator;

/// **(internal)** Implementation of the `Variable`.
mod _impl_variable;

/// **(internal)** Implementation of the `VariableSet`.
mod _impl_variable_set;

/// **(internal)** Implementation of the `VariableSetBuilder`.
mod _impl_variable_set_builder;

/// **(internal)** Implementation of the `Valuation`, `BoundValuation` and `ValuationIterator`.
mod _impl_valuation;

/// **(internal)** Truth table generation and the `TruthTable` queries.
mod _impl_truth_table;

/// **(internal)** The complete processing pipeline and the `Session` state machine.
mod _impl_pipeline;

/// **(internal)** Scenario and fuzzing tests of the whole pipeline.
#[cfg(test)]
mod _test_pipeline;

/// Several basic utility methods for testing truth tables.
#[cfg(test)]
mod _test_util;

pub use _impl_evaluator::evaluate;
pub use _impl_pipeline::{process, process_with_limits};
pub use _impl_postfix::to_postfix;
pub use _impl_tokenizer::tokenize;
pub use _impl_truth_table::generate;
pub use _impl_validator::{invalid_substrings, is_valid};
pub use _impl_variable_set::extract_variables;
pub use error::{ConversionError, Error, EvalError, TokenizeError, ValidationFailure};

/// **(internal)** Characters other than ASCII letters and digits that can appear
/// in an expression.
const SYMBOLS: [char; 6] = ['\'', '(', ')', '+', '*', '^'];

/// **(internal)** Symbols of the binary operators.
const BINARY_SYMBOLS: [char; 3] = ['+', '*', '^'];

/// **(internal)** Hard upper bound on the number of variables in one `VariableSet`.
const MAX_VARIABLE_COUNT: usize = (u16::MAX - 1) as usize;

/// Default value of `ProcessingLimits::max_variables`.
///
/// A table over 16 variables already has 65536 rows.
pub const DEFAULT_MAX_VARIABLES: usize = 16;

/// Short description of the accepted syntax, suitable as a help text next to
/// an error message.
pub const OPERATOR_REFERENCE: &str = "\
Variables: a letter followed by letters or digits (case-insensitive).
Operators (tightest first):
  A'     NOT (written after the operand)
  A * B  AND
  A ^ B  XOR
  A + B  OR
Use ( and ) to group sub-expressions.";

/// One atomic lexical unit of an expression: a variable name, an operator or a parenthesis.
///
/// Tokens are canonicalized to uppercase when created, so two tokens are equal exactly when
/// their texts are equal up to ASCII case. A token can be created from any text; tokens
/// which are not recognized (see `Token::kind`) are rejected by the converter and
/// the evaluator.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Token(String);

/// The role of a recognized `Token`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    Variable,
    Operator(Operator),
    OpenParen,
    CloseParen,
}

/// Logical operators that can appear in an expression.
///
/// Declared from the tightest binding operator to the loosest.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Operator {
    /// Postfix negation, `'`.
    Not,
    /// Conjunction, `*`.
    And,
    /// Exclusive disjunction, `^`.
    Xor,
    /// Disjunction, `+`.
    Or,
}

/// Identifies one of the variables (columns) of a `VariableSet`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Variable(u16);

/// Ordered collection of named variables. The order of variables is the order of
/// columns in a truth table.
///
/// Names are stored in uppercase and lookup by name is case-insensitive.
#[derive(Clone, Debug)]
pub struct VariableSet {
    num_vars: u16,
    var_names: Vec<String>,
    var_index_mapping: HashMap<String, u16, FxBuildHasher>,
}

/// Used to safely initialize a `VariableSet`.
///
/// Variable names must be non-empty, unique (up to case) and consist only of ASCII
/// letters and digits, i.e. they must be valid as tokens of an expression.
#[derive(Clone, Debug)]
pub struct VariableSetBuilder {
    var_names: Vec<String>,
    var_names_set: HashSet<String>,
}

/// Exactly describes one assignment of Boolean values to the variables of a `VariableSet`.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Valuation(Vec<bool>);

/// A `Valuation` together with the `VariableSet` it belongs to, so that values can be
/// looked up by variable name.
#[derive(Clone, Copy, Debug)]
pub struct BoundValuation<'a> {
    variables: &'a VariableSet,
    valuation: &'a Valuation,
}

/// Exhaustively iterates over all valuations with a certain number of variables, starting
/// with all variables set to `false`. The first variable is the most significant bit, so
/// the order is the standard order of truth table rows.
///
/// Be aware of the exponential number of iterations!
#[derive(Clone, Debug)]
pub struct ValuationIterator(Option<Valuation>);

/// Anything that can provide a Boolean value for a variable name.
///
/// Lookup is expected to be case-insensitive, since tokens are always uppercase.
pub trait Assignment {
    fn value_of(&self, name: &str) -> Option<bool>;
}

/// One line of a truth table: values of all variables (in `VariableSet` order) followed
/// by the value of the expression.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TruthTableRow {
    values: Vec<bool>,
    result: bool,
}

/// The complete result of processing one expression: its variables, its postfix form and
/// all `2^n` rows of its truth table.
#[derive(Clone, Debug)]
pub struct TruthTable {
    variables: VariableSet,
    postfix: Vec<Token>,
    rows: Vec<TruthTableRow>,
}

/// Caller-level restrictions of the processing pipeline.
///
/// The number of rows grows exponentially with the number of variables, hence
/// expressions with too many variables are rejected before any enumeration starts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProcessingLimits {
    max_variables: usize,
}

/// What should be presented to the user after the last input.
#[derive(Clone, Debug)]
pub enum SessionState {
    /// No input (or blank input) was given.
    Idle,
    /// The last input was processed into a truth table.
    Validated(TruthTable),
    /// The last input was rejected.
    Invalid(Error),
}

/// Drives the `Idle -> Validated | Invalid` transitions for a sequence of inputs.
///
/// Each submitted input replaces the previous state completely; nothing is carried
/// over between inputs.
#[derive(Clone, Debug)]
pub struct Session {
    limits: ProcessingLimits,
    state: SessionState,
}
