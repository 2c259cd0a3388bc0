use super::_impl_valuation::write_bits;
use super::{evaluate, Token, TruthTable, TruthTableRow, Valuation, ValuationIterator, VariableSet};
use log::warn;
use std::fmt::{Display, Error, Formatter};

/// Evaluate `postfix` in every valuation of `variables` and collect the truth table rows.
///
/// There are exactly `2^n` rows for `n` variables (one row for an empty set). Row `i`
/// corresponds to `Valuation::from_index(i, n)`, so the first variable is the most
/// significant bit and the all-false row comes first.
///
/// If the evaluation fails in some valuation, the row result is `false` and a warning is
/// logged. The error is not propagated.
pub fn generate(variables: &VariableSet, postfix: &[Token]) -> Vec<TruthTableRow> {
    let mut rows = Vec::new();
    for valuation in ValuationIterator::new(variables.num_vars()) {
        let result = match evaluate(postfix, &variables.bind(&valuation)) {
            Ok(value) => value,
            Err(error) => {
                warn!(
                    "Evaluation failed in valuation {}: {}. Using 0 as the result.",
                    valuation, error
                );
                false
            }
        };
        rows.push(TruthTableRow::new(valuation.vector(), result));
    }

    if cfg!(feature = "shields_up") {
        let expected = 1usize << variables.num_vars();
        if rows.len() != expected {
            panic!("Expected {} rows, but generated {}.", expected, rows.len());
        }
        let width = usize::from(variables.num_vars());
        if let Some(row) = rows.iter().find(|row| row.values.len() != width) {
            panic!("Row {} does not have {} values.", row, width);
        }
    }

    rows
}

impl TruthTableRow {
    pub fn new(values: Vec<bool>, result: bool) -> TruthTableRow {
        TruthTableRow { values, result }
    }

    /// Values of the variables, in `VariableSet` order.
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// Value of the expression in this row.
    pub fn result(&self) -> bool {
        self.result
    }

    /// The valuation of this row.
    pub fn valuation(&self) -> Valuation {
        Valuation::new(self.values.clone())
    }

    /// The row as `"0"`/`"1"` strings: one per variable, followed by the result.
    pub fn to_strings(&self) -> Vec<String> {
        self.values
            .iter()
            .chain(std::iter::once(&self.result))
            .map(|value| u8::from(*value).to_string())
            .collect()
    }
}

impl Display for TruthTableRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let mut all = self.values.clone();
        all.push(self.result);
        write_bits(f, &all)
    }
}

impl TruthTable {
    pub(crate) fn new(
        variables: VariableSet,
        postfix: Vec<Token>,
        rows: Vec<TruthTableRow>,
    ) -> TruthTable {
        TruthTable {
            variables,
            postfix,
            rows,
        }
    }

    /// Variables of the expression; the column order of the table.
    pub fn variables(&self) -> &VariableSet {
        &self.variables
    }

    /// The expression in postfix notation.
    pub fn postfix(&self) -> &[Token] {
        &self.postfix
    }

    /// All rows, in truth table order.
    pub fn rows(&self) -> &[TruthTableRow] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Values of the expression, in row order.
    pub fn result_column(&self) -> Vec<bool> {
        self.rows.iter().map(|row| row.result).collect()
    }

    /// Iterate over valuations in which the expression is true.
    pub fn sat_valuations(&self) -> impl Iterator<Item = Valuation> + '_ {
        self.rows
            .iter()
            .filter(|row| row.result)
            .map(|row| row.valuation())
    }

    /// Number of valuations in which the expression is true.
    pub fn cardinality(&self) -> usize {
        self.rows.iter().filter(|row| row.result).count()
    }

    /// True if the expression is true in every valuation.
    pub fn is_tautology(&self) -> bool {
        self.rows.iter().all(|row| row.result)
    }

    /// True if the expression is false in every valuation.
    pub fn is_contradiction(&self) -> bool {
        self.rows.iter().all(|row| !row.result)
    }
}

/// Renders the table with a header of variable names, e.g.:
///
/// ```text
/// A B | =
/// 0 0 | 0
/// 0 1 | 1
/// 1 0 | 1
/// 1 1 | 1
/// ```
impl Display for TruthTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let names = self.variables.names();
        for name in &names {
            write!(f, "{} ", name)?;
        }
        writeln!(f, "| =")?;
        for row in &self.rows {
            for (value, name) in row.values.iter().zip(&names) {
                write!(f, "{:<width$} ", u8::from(*value), width = name.len())?;
            }
            writeln!(f, "| {}", u8::from(row.result))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::_test_util::rows_as_bits;
    use crate::{to_postfix, tokenize};
    use test_log::test;

    fn postfix(input: &str) -> Vec<Token> {
        to_postfix(&tokenize(input).unwrap()).unwrap()
    }

    #[test]
    fn generate_row_order() {
        let variables = VariableSet::new(&["A", "B"]);
        let rows = generate(&variables, &postfix("A+B"));
        assert_eq!(
            vec![vec![0, 0, 0], vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 1]],
            rows_as_bits(&rows)
        );
    }

    #[test]
    fn generate_row_count() {
        for n in 0..8u16 {
            let names: Vec<String> = (0..n).map(|i| format!("X{i}")).collect();
            let variables = VariableSet::new(&names);
            let expression = if names.is_empty() {
                "A".to_string()
            } else {
                names.join("^")
            };
            let rows = generate(&variables, &postfix(&expression));
            assert_eq!(1usize << n, rows.len());
            for (index, row) in rows.iter().enumerate() {
                assert_eq!(usize::from(n) + 1, row.to_strings().len());
                for (i, value) in row.values().iter().enumerate() {
                    let expected = (index >> (usize::from(n) - i - 1)) & 1 == 1;
                    assert_eq!(expected, *value);
                }
            }
        }
    }

    #[test]
    fn generate_without_variables() {
        let variables = VariableSet::new::<&str>(&[]);
        // Nothing to evaluate, so the only row defaults to 0.
        let rows = generate(&variables, &[]);
        assert_eq!(vec![vec![0]], rows_as_bits(&rows));
        assert_eq!(vec!["0"], rows[0].to_strings());
    }

    #[test]
    fn generate_defaults_failed_rows_to_zero() {
        // `B` is not part of the variable set, so every evaluation fails.
        let variables = VariableSet::new(&["A"]);
        let rows = generate(&variables, &postfix("A+B"));
        assert_eq!(vec![vec![0, 0], vec![1, 0]], rows_as_bits(&rows));
    }

    #[test]
    fn truth_table_queries() {
        let variables = VariableSet::new(&["A", "B"]);
        let rows = generate(&variables, &postfix("A*B"));
        let table = TruthTable::new(variables, postfix("A*B"), rows);
        assert_eq!(4, table.num_rows());
        assert_eq!(vec![false, false, false, true], table.result_column());
        assert_eq!(1, table.cardinality());
        assert_eq!(
            vec![Valuation::new(vec![true, true])],
            table.sat_valuations().collect::<Vec<_>>()
        );
        assert!(!table.is_tautology());
        assert!(!table.is_contradiction());
        assert_eq!("[1,1,1]", table.rows()[3].to_string());
    }

    #[test]
    fn truth_table_display() {
        let variables = VariableSet::new(&["A", "Bc"]);
        let rows = generate(&variables, &postfix("A^Bc"));
        let table = TruthTable::new(variables, postfix("A^Bc"), rows);
        let expected = "A BC | =\n0 0  | 0\n0 1  | 1\n1 0  | 1\n1 1  | 0\n";
        assert_eq!(expected, table.to_string());
    }
}
