use super::*;

/// Collect the names of all variable tokens in the order of their first appearance,
/// without duplicates.
pub fn extract_variables(tokens: &[Token]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for token in tokens.iter().filter(|token| token.is_variable()) {
        if seen.insert(token.as_str()) {
            result.push(token.to_string());
        }
    }
    result
}

impl VariableSet {
    /// Create a new `VariableSet` with the given named variables, in the given order.
    ///
    /// *Panics:* `vars` must contain unique names which are allowed as variable names
    /// (see `VariableSetBuilder`).
    pub fn new<S: AsRef<str>>(vars: &[S]) -> VariableSet {
        let mut builder = VariableSetBuilder::new();
        builder.make_variables(vars);
        builder.build()
    }

    /// Create a `VariableSet` of all variables appearing in `tokens`, ordered by their first
    /// appearance.
    ///
    /// *Panics:* if there are more distinct variables than a set can hold.
    pub fn from_tokens(tokens: &[Token]) -> VariableSet {
        VariableSet::new(&extract_variables(tokens))
    }

    /// Return the number of variables in this set.
    pub fn num_vars(&self) -> u16 {
        self.num_vars
    }

    /// Find a `Variable` based on its name (ignoring case). If the name does not appear
    /// in this set, return `None`.
    pub fn var_by_name(&self, name: &str) -> Option<Variable> {
        self.var_index_mapping
            .get(name)
            .or_else(|| self.var_index_mapping.get(&name.to_ascii_uppercase()))
            .cloned()
            .map(Variable)
    }

    /// Provides a vector of all `Variable`s in this set.
    pub fn variables(&self) -> Vec<Variable> {
        (0..self.num_vars).map(Variable).collect()
    }

    /// Obtain the name of a specific `Variable`.
    pub fn name_of(&self, variable: Variable) -> String {
        self.var_names[variable.index()].clone()
    }

    /// Names of all variables, in order.
    pub fn names(&self) -> Vec<&str> {
        self.var_names.iter().map(|name| name.as_str()).collect()
    }

    /// Pair a `valuation` of this set with the set, so that it can be used as an `Assignment`.
    ///
    /// *Panics:* (with `shields_up`) if the valuation has a different number of variables.
    pub fn bind<'a>(&'a self, valuation: &'a Valuation) -> BoundValuation<'a> {
        if cfg!(feature = "shields_up") && valuation.num_vars() != self.num_vars {
            panic!(
                "Variable set has {} variables, but valuation has {}.",
                self.num_vars,
                valuation.num_vars()
            );
        }
        BoundValuation {
            variables: self,
            valuation,
        }
    }
}
