use super::*;
use std::fmt::{Display, Error, Formatter};

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_fmt(format_args!("{}", self.0))
    }
}

impl Variable {
    /// Position of this variable in its `VariableSet` (i.e. its truth table column).
    pub fn index(&self) -> usize {
        usize::from(self.0)
    }
}
