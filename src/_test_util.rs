use super::*;

/// Rows of a truth table as numbers, e.g. `[[0, 0, 0], [0, 1, 1], ...]`.
pub fn rows_as_bits(rows: &[TruthTableRow]) -> Vec<Vec<u8>> {
    rows.iter()
        .map(|row| {
            row.values()
                .iter()
                .chain(std::iter::once(&row.result()))
                .map(|value| u8::from(*value))
                .collect()
        })
        .collect()
}

/// Texts of the given tokens.
pub fn token_texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|token| token.as_str()).collect()
}

/// Process `input`, panicking if it is not a valid expression.
pub fn table_of(input: &str) -> TruthTable {
    process(Some(input)).unwrap_or_else(|e| panic!("Cannot process `{}`: {}", input, e))
}
