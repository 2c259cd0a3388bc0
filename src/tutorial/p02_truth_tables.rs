//! # Working with `TruthTable`s and valuations
//!
//! A `TruthTable` keeps the `VariableSet` of the expression, its postfix form and all of its
//! rows. The rows are ordered like in a textbook: the first variable is the most significant
//! bit, so row `i` assigns the binary digits of `i` to the variables.
//!
//! ```rust
//! use biodivine_lib_truth_table::{process, Valuation};
//!
//! let table = process(Some("A ^ B'")).unwrap();
//! assert_eq!(4, table.num_rows());
//!
//! let row = &table.rows()[2];
//! assert_eq!(&[true, false], row.values());
//! assert_eq!(Valuation::from_index(2, 2), row.valuation());
//! assert!(!row.result());
//! assert_eq!("[1,0,0]", row.to_string());
//! ```
//!
//! The table can be queried as a whole, too:
//!
//! ```rust
//! use biodivine_lib_truth_table::process;
//!
//! let table = process(Some("A * B")).unwrap();
//! assert_eq!(1, table.cardinality());
//! assert!(!table.is_tautology());
//!
//! let satisfying: Vec<String> = table.sat_valuations().map(|v| v.to_string()).collect();
//! assert_eq!(vec!["[1,1]"], satisfying);
//!
//! assert!(process(Some("A + A'")).unwrap().is_tautology());
//! assert!(process(Some("A * A'")).unwrap().is_contradiction());
//! ```
//!
//! Printing a table produces a small text rendering with a header:
//!
//! ```rust
//! use biodivine_lib_truth_table::process;
//!
//! let table = process(Some("A + B")).unwrap();
//! assert_eq!("A B | =\n0 0 | 0\n0 1 | 1\n1 0 | 1\n1 1 | 1\n", table.to_string());
//! ```
//!
//! ## Variables and valuations
//!
//! You can also build a `VariableSet` yourself, either directly or using a
//! `VariableSetBuilder` which checks that the names are valid variable tokens. Names are
//! stored in uppercase and looked up without regard to case:
//!
//! ```rust
//! use biodivine_lib_truth_table::{VariableSet, VariableSetBuilder};
//!
//! let mut builder = VariableSetBuilder::new();
//! let x = builder.make_variable("x");
//! let yz = builder.make_variables(&["y", "z"]);
//! let variables = builder.build();
//!
//! assert_eq!(Some(x), variables.var_by_name("X"));
//! assert_eq!(Some(yz[1]), variables.var_by_name("z"));
//! assert_eq!("Y", variables.name_of(yz[0]));
//! assert_eq!(3, VariableSet::new(&["a", "b", "c"]).num_vars());
//! ```
//!
//! `ValuationIterator` enumerates all valuations in row order. A `Valuation` bound to its
//! `VariableSet` is an `Assignment`, so it can be used to evaluate a postfix sequence:
//!
//! ```rust
//! use biodivine_lib_truth_table::*;
//!
//! let variables = VariableSet::new(&["A", "B"]);
//! let postfix = to_postfix(&tokenize("A * B'").unwrap()).unwrap();
//!
//! let results: Vec<bool> = ValuationIterator::new(variables.num_vars())
//!     .map(|valuation| evaluate(&postfix, &variables.bind(&valuation)).unwrap())
//!     .collect();
//! assert_eq!(vec![false, false, true, false], results);
//! ```
//!
//! Be aware that the number of rows doubles with every variable. For this reason, `process`
//! refuses expressions with more than `DEFAULT_MAX_VARIABLES` variables. Use
//! `process_with_limits` to choose a different bound:
//!
//! ```rust
//! use biodivine_lib_truth_table::{process_with_limits, Error, ProcessingLimits};
//!
//! let limits = ProcessingLimits::new(2);
//! assert!(process_with_limits(Some("A + B"), &limits).is_ok());
//! assert_eq!(
//!     Err(Error::TooManyVariables { found: 3, limit: 2 }),
//!     process_with_limits(Some("A + B + C"), &limits).map(|t| t.num_rows())
//! );
//! ```
