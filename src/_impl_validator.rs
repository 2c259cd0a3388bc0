//! Expression grammar (after removing whitespace):
//!
//! ```text
//! expression := term ( ('+' | '*' | '^') term )*
//! term       := operand "'"?
//! operand    := [A-Za-z][A-Za-z0-9]* | '(' [A-Za-z0-9'+*^()]+ ')'
//! ```
//!
//! The interior of a parenthesized group is only checked for its character set, not for
//! its structure. Since the interior may contain parentheses as well, a group can end at
//! any `)` reachable through allowed characters, and the input is valid if at least one
//! such choice leads to a full match. The converter performs the remaining structural
//! checks.

use super::{BINARY_SYMBOLS, SYMBOLS};

/// Check whether the whole `input` matches the expression grammar.
///
/// Returns `false` for input which is empty after removing whitespace.
pub fn is_valid(input: &str) -> bool {
    let data: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
    if data.is_empty() {
        return false;
    }

    // `term_start[i]` is true when some prefix `data[..i]` matches `expression` followed
    // by a binary operator, i.e. a new term can begin at `i`.
    let mut term_start = vec![false; data.len() + 1];
    term_start[0] = true;
    for start in 0..data.len() {
        if !term_start[start] {
            continue;
        }
        for operand_end in operand_ends(&data, start) {
            let term_end = if data.get(operand_end) == Some(&'\'') {
                operand_end + 1
            } else {
                operand_end
            };
            match data.get(term_end) {
                None => return true,
                Some(c) if BINARY_SYMBOLS.contains(c) => term_start[term_end + 1] = true,
                Some(_) => {}
            }
        }
    }
    false
}

/// Find all maximal runs of unsupported characters in the `input`, in order of appearance.
///
/// Whitespace is removed first, so it is never reported and it does not split runs. This
/// check is independent of `is_valid`: a string with no unsupported characters can still
/// be invalid.
pub fn invalid_substrings(input: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();
    for c in input.chars().filter(|c| !c.is_whitespace()) {
        if is_allowed(c) {
            if !current.is_empty() {
                result.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        result.push(current);
    }
    result
}

/// **(internal)** True for characters which can appear in a valid expression.
fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || SYMBOLS.contains(&c)
}

/// **(internal)** Every position right after an `operand` that begins at `start`.
///
/// A variable has exactly one end (it is matched greedily and cannot be followed by
/// a letter or digit anyway). A group has one candidate end for every `)` that can be
/// reached from `start` without leaving the allowed character set.
fn operand_ends(data: &[char], start: usize) -> Vec<usize> {
    match data[start] {
        c if c.is_ascii_alphabetic() => {
            let length = data[start..]
                .iter()
                .take_while(|c| c.is_ascii_alphanumeric())
                .count();
            vec![start + length]
        }
        '(' => data
            .iter()
            .enumerate()
            .skip(start + 1)
            .take_while(|(_, c)| is_allowed(**c))
            .filter(|(i, c)| **c == ')' && *i > start + 1)
            .map(|(i, _)| i + 1)
            .collect(),
        _ => Vec::new(),
    }
}
