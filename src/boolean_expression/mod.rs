//! Boolean expressions are simple structures that represent boolean formulas explicitly.
//!
//! They can be parsed from a string representation (using `TryFrom`) and evaluated directly,
//! without converting them to postfix notation first:
//!
//! ```rust
//! use biodivine_lib_truth_table::boolean_expression::BooleanExpression;
//! use std::collections::HashMap;
//! use std::convert::TryFrom;
//!
//! let expression = BooleanExpression::try_from("a * b' + c").unwrap();
//! assert_eq!("((A*B')+C)", expression.to_string());
//!
//! let mut values = HashMap::new();
//! values.insert("A".to_string(), true);
//! values.insert("B".to_string(), false);
//! values.insert("C".to_string(), false);
//! assert_eq!(Ok(true), expression.eval_in(&values));
//! ```

/// **(internal)** Implements evaluation, display and some utility methods.
mod _impl_boolean_expression;

/// **(internal)** Parsing functions for boolean expressions.
mod _impl_parser;

pub use _impl_parser::parse_boolean_expression;

/// Recursive type for boolean expression tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BooleanExpression {
    Variable(String),
    Not(Box<BooleanExpression>),
    And(Box<BooleanExpression>, Box<BooleanExpression>),
    Or(Box<BooleanExpression>, Box<BooleanExpression>),
    Xor(Box<BooleanExpression>, Box<BooleanExpression>),
}
