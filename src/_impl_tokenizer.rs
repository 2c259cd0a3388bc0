use super::error::TokenizeError;
use super::{Token, SYMBOLS};
use log::trace;

/// Split the `input` string into a vector of `Token`s.
///
/// Whitespace is ignored. Every maximal run of ASCII letters and digits becomes one variable
/// token (so `A1` is a single variable) and each of `'`, `(`, `)`, `+`, `*` and `^` is a token
/// of its own. Unsupported characters are skipped; they are reported by
/// `invalid_substrings` instead.
///
/// Empty (or blank) input produces an empty vector. Non-empty input which yields no token at
/// all is an error, since such input is never accepted by `is_valid`.
pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut data = input.chars().filter(|c| !c.is_whitespace()).peekable();
    if data.peek().is_none() {
        return Ok(Vec::new());
    }

    let mut output = Vec::new();
    while let Some(c) = data.next() {
        match c {
            c if c.is_ascii_alphanumeric() => {
                // start of a variable name
                let mut name = String::new();
                name.push(c);
                while let Some(c) = data.peek() {
                    if c.is_ascii_alphanumeric() {
                        name.push(*c);
                        data.next(); // advance iterator
                    } else {
                        break;
                    }
                }
                output.push(Token::new(&name));
            }
            c if SYMBOLS.contains(&c) => output.push(Token::new(&c.to_string())),
            c => trace!("Skipping unsupported character {:?}.", c),
        }
    }

    if output.is_empty() {
        Err(TokenizeError::NoRecognizableTokens(input.to_string()))
    } else {
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.as_str()).collect()
    }

    #[test]
    fn tokenize_basic() {
        let tokens = tokenize("(a1 * B)' + c").unwrap();
        assert_eq!(
            vec!["(", "A1", "*", "B", ")", "'", "+", "C"],
            texts(&tokens)
        );
    }

    #[test]
    fn tokenize_variable_runs() {
        assert_eq!(vec!["AB12C"], texts(&tokenize("ab12c").unwrap()));
        // Whitespace is removed before scanning, so it does not split variables.
        assert_eq!(vec!["AB"], texts(&tokenize("a b").unwrap()));
        assert_eq!(vec!["A", "'", "'"], texts(&tokenize("A''").unwrap()));
    }

    #[test]
    fn tokenize_empty() {
        assert_eq!(Vec::<Token>::new(), tokenize("").unwrap());
        assert_eq!(Vec::<Token>::new(), tokenize(" \t\n").unwrap());
    }

    #[test]
    fn tokenize_skips_unsupported() {
        assert_eq!(vec!["A", "B"], texts(&tokenize("A#B").unwrap()));
        assert_eq!(
            Err(TokenizeError::NoRecognizableTokens("#$ %".to_string())),
            tokenize("#$ %")
        );
    }

    #[test]
    fn tokenize_is_repeatable() {
        let input = "x1 ^ (Y + z')";
        assert_eq!(tokenize(input), tokenize(input));
    }
}
