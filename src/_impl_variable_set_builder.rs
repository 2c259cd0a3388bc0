use super::*;

impl VariableSetBuilder {
    /// Create a new builder without any variables.
    pub fn new() -> VariableSetBuilder {
        VariableSetBuilder {
            var_names: Vec::new(),
            var_names_set: HashSet::new(),
        }
    }

    /// Create a new variable with the given `name`. The name is stored in uppercase.
    ///
    /// *Panics*:
    ///  - Each variable name has to be unique (ignoring case).
    ///  - Currently, there can be at most 65534 variables.
    ///  - The name must be non-empty and only contain ASCII letters and digits.
    pub fn make_variable(&mut self, name: &str) -> Variable {
        let new_variable_id = self.var_names.len();
        if new_variable_id >= MAX_VARIABLE_COUNT {
            panic!(
                "Too many variables. There can be at most {} variables.",
                MAX_VARIABLE_COUNT
            )
        }
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            panic!(
                "Variable name `{}` is invalid. Only ASCII letters and digits are allowed.",
                name
            );
        }
        let name = name.to_ascii_uppercase();
        if self.var_names_set.contains(&name) {
            panic!("Variable {} already exists.", name);
        }
        self.var_names_set.insert(name.clone());
        self.var_names.push(name);
        Variable(new_variable_id as u16)
    }

    /// Similar to `make_variable`, but allows creating multiple variables at the same time.
    pub fn make_variables<S: AsRef<str>>(&mut self, names: &[S]) -> Vec<Variable> {
        names
            .iter()
            .map(|name| self.make_variable(name.as_ref()))
            .collect()
    }

    /// Convert this builder to an actual variable set.
    pub fn build(self) -> VariableSet {
        let mut mapping: HashMap<String, u16, FxBuildHasher> = HashMap::default();
        for (index, name) in self.var_names.iter().enumerate() {
            mapping.insert(name.clone(), index as u16);
        }
        VariableSet {
            num_vars: self.var_names.len() as u16,
            var_names: self.var_names,
            var_index_mapping: mapping,
        }
    }
}

impl Default for VariableSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
