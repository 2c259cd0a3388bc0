//! # Handling invalid input with a `Session`
//!
//! Interactive front-ends typically process one input after another and show either the
//! table or an error for the latest one. `Session` implements exactly this: each call to
//! `submit` replaces the previous `SessionState`.
//!
//! ```rust
//! use biodivine_lib_truth_table::{Session, SessionState};
//!
//! let mut session = Session::new();
//! assert!(matches!(session.state(), SessionState::Idle));
//!
//! session.submit(Some("A * B"));
//! assert_eq!(4, session.table().unwrap().num_rows());
//! assert_eq!(None, session.error_message());
//!
//! session.submit(Some("A % B"));
//! assert!(session.table().is_none());
//! assert_eq!(vec!["%"], session.invalid_substrings());
//! assert_eq!(
//!     Some("invalid expression, unsupported characters: `%`".to_string()),
//!     session.error_message()
//! );
//!
//! // Blank input simply resets the session.
//! session.submit(Some("   "));
//! assert!(matches!(session.state(), SessionState::Idle));
//! ```
//!
//! The error itself is available through `SessionState::Invalid`. Most rejected inputs fail
//! validation, but a few pass the grammar check and are only caught by the postfix
//! conversion, for example when the parentheses of two groups are swapped:
//!
//! ```rust
//! use biodivine_lib_truth_table::{ConversionError, Error, Session, SessionState};
//!
//! let mut session = Session::new();
//! match session.submit(Some("(A))+((B)")) {
//!     SessionState::Invalid(error) => {
//!         assert_eq!(&Error::Conversion(ConversionError::UnmatchedCloseParen), error);
//!     }
//!     _ => panic!("Expected an invalid state."),
//! }
//! ```
//!
//! Use `Session::with_limits` to change the maximal number of variables, and `clear` to
//! return to the `Idle` state explicitly.
