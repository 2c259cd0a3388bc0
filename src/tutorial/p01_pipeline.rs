//! # From an expression to a truth table
//!
//! The simplest way to use this crate is the `process` function. It takes the raw text of an
//! expression and, if it is valid, returns the complete `TruthTable`:
//!
//! ```rust
//! use biodivine_lib_truth_table::process;
//!
//! let table = process(Some("A + B")).unwrap();
//! assert_eq!(vec!["A", "B"], table.variables().names());
//! assert_eq!(vec![false, true, true, true], table.result_column());
//! ```
//!
//! The input is optional so that a missing value (for example an empty form field) can be
//! passed in directly. Absent input is treated the same as an empty string, which is not
//! a valid expression.
//!
//! Internally, `process` runs several stages which are also available on their own. This
//! is useful when you only need part of the pipeline, e.g. to check the input while it is
//! being typed.
//!
//! ## Validation
//!
//! `is_valid` decides whether the input follows the expression grammar. When it does not,
//! `invalid_substrings` reports the runs of characters which are not supported at all
//! (whitespace is ignored by both functions):
//!
//! ```rust
//! use biodivine_lib_truth_table::{invalid_substrings, is_valid};
//!
//! assert!(is_valid("(a * b)' ^ c1"));
//! assert!(!is_valid("A + "));
//! assert!(invalid_substrings("A + ").is_empty());
//! assert!(!is_valid("A $$ B & C"));
//! assert_eq!(vec!["$$", "&"], invalid_substrings("A $$ B & C"));
//! ```
//!
//! Note that an input can be invalid even if all of its characters are supported, so an
//! empty list of invalid substrings does not mean the input is fine.
//!
//! ## Tokens and postfix notation
//!
//! `tokenize` splits the input into `Token`s. Variable names are converted to uppercase, so
//! `a` and `A` are the same variable. `to_postfix` then reorders the tokens into postfix
//! notation, where each operator follows its operands and no parentheses are needed:
//!
//! ```rust
//! use biodivine_lib_truth_table::{extract_variables, to_postfix, tokenize};
//!
//! let tokens = tokenize("a * (b + c')").unwrap();
//! let texts: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
//! assert_eq!(vec!["A", "*", "(", "B", "+", "C", "'", ")"], texts);
//!
//! let postfix = to_postfix(&tokens).unwrap();
//! let texts: Vec<&str> = postfix.iter().map(|t| t.as_str()).collect();
//! assert_eq!(vec!["A", "B", "C", "'", "+", "*"], texts);
//!
//! // Variables are listed in the order of their first appearance.
//! assert_eq!(vec!["B", "A"], extract_variables(&tokenize("b + a * b'").unwrap()));
//! ```
//!
//! ## Evaluation
//!
//! A postfix sequence can be evaluated in anything that implements `Assignment`. A
//! `HashMap<String, bool>` is the most direct option:
//!
//! ```rust
//! use biodivine_lib_truth_table::{evaluate, to_postfix, tokenize, EvalError};
//! use std::collections::HashMap;
//!
//! let postfix = to_postfix(&tokenize("a * (b + c')").unwrap()).unwrap();
//!
//! let mut values = HashMap::new();
//! values.insert("A".to_string(), true);
//! values.insert("B".to_string(), false);
//! values.insert("C".to_string(), false);
//! assert_eq!(Ok(true), evaluate(&postfix, &values));
//!
//! values.remove("C");
//! assert_eq!(
//!     Err(EvalError::UndefinedVariable("C".to_string())),
//!     evaluate(&postfix, &values)
//! );
//! ```
//!
//! Finally, `generate` evaluates the expression for every valuation of a `VariableSet`. This
//! is what `process` does as its last step.
