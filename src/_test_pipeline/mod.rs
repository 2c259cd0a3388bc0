/// **(internal)** End-to-end scenarios: input strings and their expected truth tables
/// or diagnostics.
mod _test_pipeline_scenarios;

/// **(internal)** Generate pseudo-random expressions, process them and exhaustively
/// verify that the truth table matches a direct evaluation of the expression tree.
mod _test_pipeline_fuzzing;
