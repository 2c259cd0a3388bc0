//! This is a documentation-only module with several sub-modules describing how to use
//! this crate.
//!
//! Table of contents:
//!  - [From an expression to a truth table](./p01_pipeline/index.html)
//!  - [Working with `TruthTable`s and valuations](./p02_truth_tables/index.html)
//!  - [Handling invalid input with a `Session`](./p03_sessions/index.html)
//!

pub mod p01_pipeline;
pub mod p02_truth_tables;
pub mod p03_sessions;
