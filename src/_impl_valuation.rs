use super::{Assignment, BoundValuation, Valuation, ValuationIterator, Variable};
use std::fmt::{Display, Error, Formatter};
use std::ops::Index;

impl Valuation {
    /// Create a new valuation from a vector of values.
    pub fn new(values: Vec<bool>) -> Valuation {
        Valuation(values)
    }

    /// Create a valuation with all variables set to false.
    pub fn all_false(num_vars: u16) -> Valuation {
        Valuation(vec![false; num_vars as usize])
    }

    /// Create a valuation with all variables set to true.
    pub fn all_true(num_vars: u16) -> Valuation {
        Valuation(vec![true; num_vars as usize])
    }

    /// Create the valuation at position `index` of the truth table order: variable `i` is
    /// set to bit `num_vars - i - 1` of `index`, so the first variable is the most
    /// significant bit.
    ///
    /// Bits of `index` beyond the 64th variable from the end are taken as zero.
    pub fn from_index(index: u64, num_vars: u16) -> Valuation {
        let num_vars = usize::from(num_vars);
        Valuation(
            (0..num_vars)
                .map(|i| {
                    let shift = num_vars - i - 1;
                    shift < 64 && (index >> shift) & 1 == 1
                })
                .collect(),
        )
    }

    /// Convert the valuation to its underlying vector.
    pub fn vector(self) -> Vec<bool> {
        self.0
    }

    /// Get a value of a specific variable in this valuation.
    pub fn value(&self, variable: Variable) -> bool {
        self.0[variable.index()]
    }

    /// Number of variables in this valuation (used mostly for consistency checks).
    pub fn num_vars(&self) -> u16 {
        self.0.len() as u16
    }

    /// **(internal)** "Increment" this valuation if possible. Interpret the valuation as
    /// a bit-vector with the last variable as the least significant bit and perform a standard
    /// increment. This can be used to iterate over all valuations in the truth table order.
    pub(crate) fn next(&self) -> Option<Valuation> {
        let mut next_vec = self.0.clone();
        let mut carry = true; // initially, we want to increment
        for bit in next_vec.iter_mut().rev() {
            let new_value = *bit ^ carry;
            let new_carry = *bit && carry;
            *bit = new_value;
            carry = new_carry;
            if !new_carry {
                break;
            } // if there is no carry, we can just break
        }

        if carry {
            None
        } else {
            Some(Valuation(next_vec))
        }
    }
}

impl Display for Valuation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write_bits(f, &self.0)
    }
}

/// **(internal)** Write `values` as `[0,1,...]`.
pub(crate) fn write_bits(f: &mut Formatter<'_>, values: &[bool]) -> Result<(), Error> {
    write!(f, "[")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{}", u8::from(*value))?;
    }
    write!(f, "]")
}

/// Allow indexing of `Valuation` using `Variable`s.
impl Index<Variable> for Valuation {
    type Output = bool;

    fn index(&self, index: Variable) -> &Self::Output {
        &self.0[index.index()]
    }
}

impl<'a> BoundValuation<'a> {
    /// The underlying valuation.
    pub fn valuation(&self) -> &'a Valuation {
        self.valuation
    }
}

impl Assignment for BoundValuation<'_> {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.variables
            .var_by_name(name)
            .map(|variable| self.valuation.value(variable))
    }
}

impl ValuationIterator {
    /// Create a new iterator with a specified number of variables.
    pub fn new(num_vars: u16) -> ValuationIterator {
        ValuationIterator(Some(Valuation::all_false(num_vars)))
    }
}

impl Iterator for ValuationIterator {
    type Item = Valuation;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(valuation) = &self.0 {
            let ret = valuation.clone();
            let next = valuation.next();
            self.0 = next;
            Some(ret)
        } else {
            None
        }
    }
}
