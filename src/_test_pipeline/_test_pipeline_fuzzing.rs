//!
//! Here, we have a small toolbox for fuzzing the processing pipeline.
//! It generates random expressions following the input grammar: each expression is
//! a chain of terms joined by random binary operators, and each term is either a random
//! variable or a nested expression in parentheses, possibly negated.
//!
//! Each generated expression is processed into a truth table and every row is compared
//! with a direct evaluation of the same text parsed as a `BooleanExpression` tree. To get
//! predictable test cases, we use a predefined set of randomness seeds.

use crate::boolean_expression::BooleanExpression;
use crate::*;
use rand::prelude::StdRng;
use rand::{RngCore, SeedableRng};
use std::convert::TryFrom;

/// Mixed case on purpose, names are normalized by the tokenizer.
const VARIABLE_POOL: [&str; 8] = ["A", "b", "C1", "d", "E", "f2", "G", "h"];

struct ExpressionGenerator {
    rand: StdRng,
    num_vars: usize,
}

impl ExpressionGenerator {
    fn new(num_vars: usize, seed: u64) -> ExpressionGenerator {
        ExpressionGenerator {
            rand: StdRng::seed_from_u64(seed),
            num_vars,
        }
    }

    /// A random expression with at most `depth` levels of nested parentheses.
    fn expression(&mut self, depth: u8) -> String {
        let terms = 1 + self.rand.next_u32() % 3;
        let mut result = self.term(depth);
        for _ in 1..terms {
            let operator = match self.rand.next_u32() % 3 {
                0 => " + ",
                1 => " * ",
                _ => " ^ ",
            };
            result.push_str(operator);
            result.push_str(&self.term(depth));
        }
        result
    }

    fn term(&mut self, depth: u8) -> String {
        let mut operand = if depth > 0 && self.rand.next_u32() % 3 != 0 {
            format!("({})", self.expression(depth - 1))
        } else {
            let index = self.rand.next_u32() as usize % self.num_vars;
            VARIABLE_POOL[index].to_string()
        };
        if self.rand.next_u32() % 3 == 0 {
            operand.push('\'');
        }
        operand
    }
}

const FUZZ_SEEDS: [u64; 10] = [
    1, 12, 123, 1234, 12345, 123456, 1234567, 12345678, 123456789, 1234567890,
];

/// Returns `true` if the generated expression was not a tautology or a contradiction.
fn fuzz_test(num_vars: usize, depth: u8, seed: u64) -> bool {
    let input = ExpressionGenerator::new(num_vars, seed).expression(depth);
    assert!(is_valid(&input), "Generated invalid expression `{input}`.");
    assert!(invalid_substrings(&input).is_empty());

    let limits = ProcessingLimits::new(VARIABLE_POOL.len());
    let table = process_with_limits(Some(&input), &limits).unwrap();
    let expression = BooleanExpression::try_from(input.as_str()).unwrap();

    assert_eq!(expression.variables(), table.variables().names());
    assert_eq!(expression.to_postfix(), table.postfix());
    assert_eq!(1usize << table.variables().num_vars(), table.num_rows());

    for (index, row) in table.rows().iter().enumerate() {
        let valuation = row.valuation();
        assert_eq!(
            Valuation::from_index(index as u64, table.variables().num_vars()),
            valuation
        );
        let expected = expression
            .eval_in(&table.variables().bind(&valuation))
            .unwrap();
        assert_eq!(
            expected,
            row.result(),
            "Error in `{input}` for valuation {valuation}"
        );
    }

    !table.is_tautology() && !table.is_contradiction()
}

fn fuzz_vars(num_vars: usize) {
    let mut non_trivial = 0;

    for depth in 0..5 {
        for seed in FUZZ_SEEDS.iter() {
            if fuzz_test(num_vars, depth, *seed) {
                non_trivial += 1;
            }
        }
    }

    println!(
        "Check {}/{} non-trivial truth tables.",
        non_trivial,
        5 * FUZZ_SEEDS.len()
    );
}

#[test]
fn fuzz_var_1() {
    fuzz_vars(1);
}

#[test]
fn fuzz_var_2() {
    fuzz_vars(2);
}

#[test]
fn fuzz_var_4() {
    fuzz_vars(4);
}

#[test]
fn fuzz_var_8() {
    fuzz_vars(8);
}
