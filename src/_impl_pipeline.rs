use super::error::{Error, ValidationFailure};
use super::{
    extract_variables, generate, invalid_substrings, is_valid, to_postfix, tokenize,
    ProcessingLimits, Session, SessionState, TruthTable, VariableSet, DEFAULT_MAX_VARIABLES,
    MAX_VARIABLE_COUNT,
};
use log::{debug, warn};

/// Process the `input` expression into a complete `TruthTable`, using the default
/// `ProcessingLimits`.
///
/// Absent, empty and otherwise invalid input results in `Error::Validation`. The other
/// errors signal input that passed validation but is still not a proper expression
/// (for example `(A))+((B)`).
pub fn process(input: Option<&str>) -> Result<TruthTable, Error> {
    process_with_limits(input, &ProcessingLimits::default())
}

/// Same as `process`, but expressions with more variables than allowed by `limits` are
/// rejected with `Error::TooManyVariables` before any rows are generated.
pub fn process_with_limits(
    input: Option<&str>,
    limits: &ProcessingLimits,
) -> Result<TruthTable, Error> {
    let input = input.unwrap_or_default();
    if !is_valid(input) {
        return Err(ValidationFailure::new(invalid_substrings(input)).into());
    }

    let tokens = tokenize(input)?;
    let names = extract_variables(&tokens);
    if names.len() > limits.max_variables() {
        return Err(Error::TooManyVariables {
            found: names.len(),
            limit: limits.max_variables(),
        });
    }
    debug!(
        "Expression `{}` has {} tokens and {} variables.",
        input,
        tokens.len(),
        names.len()
    );

    let postfix = to_postfix(&tokens)?;
    debug!(
        "Postfix form: {}",
        postfix
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    );

    let variables = VariableSet::new(&names);
    let rows = generate(&variables, &postfix);
    debug!("Generated {} rows.", rows.len());
    Ok(TruthTable::new(variables, postfix, rows))
}

impl ProcessingLimits {
    /// Create limits allowing at most `max_variables` distinct variables.
    ///
    /// Values larger than the capacity of a `VariableSet` (65534) are reduced to it.
    pub fn new(max_variables: usize) -> ProcessingLimits {
        ProcessingLimits {
            max_variables: max_variables.min(MAX_VARIABLE_COUNT),
        }
    }

    pub fn max_variables(&self) -> usize {
        self.max_variables
    }
}

impl Default for ProcessingLimits {
    fn default() -> Self {
        ProcessingLimits::new(DEFAULT_MAX_VARIABLES)
    }
}

impl Session {
    /// Create an `Idle` session with default limits.
    pub fn new() -> Session {
        Session::with_limits(ProcessingLimits::default())
    }

    pub fn with_limits(limits: ProcessingLimits) -> Session {
        Session {
            limits,
            state: SessionState::Idle,
        }
    }

    pub fn limits(&self) -> &ProcessingLimits {
        &self.limits
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Process a new `input`, replacing the current state.
    ///
    /// Absent or blank input moves the session to `Idle`. Otherwise the session becomes
    /// `Validated` with a new truth table, or `Invalid` with the reason of the failure.
    pub fn submit(&mut self, input: Option<&str>) -> &SessionState {
        let is_blank = input.map_or(true, |input| input.chars().all(char::is_whitespace));
        self.state = if is_blank {
            SessionState::Idle
        } else {
            match process_with_limits(input, &self.limits) {
                Ok(table) => SessionState::Validated(table),
                Err(error) => {
                    warn!("Rejected expression {:?}: {}", input.unwrap_or_default(), error);
                    SessionState::Invalid(error)
                }
            }
        };
        &self.state
    }

    /// Drop the current result and return to `Idle`.
    pub fn clear(&mut self) {
        self.state = SessionState::Idle;
    }

    /// The truth table, if the last input was processed successfully.
    pub fn table(&self) -> Option<&TruthTable> {
        match &self.state {
            SessionState::Validated(table) => Some(table),
            _ => None,
        }
    }

    /// A message for the user, if the last input was rejected.
    pub fn error_message(&self) -> Option<String> {
        match &self.state {
            SessionState::Invalid(error) => Some(error.to_string()),
            _ => None,
        }
    }

    /// Unsupported characters of the last input (empty unless it was rejected because
    /// of them).
    pub fn invalid_substrings(&self) -> &[String] {
        match &self.state {
            SessionState::Invalid(error) => error.invalid_substrings(),
            _ => &[],
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
