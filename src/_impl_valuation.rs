use super::{Diagram, PartialValuation, Valuation, Variable};
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

    /// Flip the value of a given variable.
    pub fn flip_value(&mut self, variable: Variable) {
        let i = variable.to_index();
        self.0[i] = !self.0[i];
    }

    /// Convert the valuation to its underlying vector.
    pub fn vector(self) -> Vec<bool> {
        self.0
    }

    /// Get a value of a specific variable in this valuation.
    pub fn value(&self, variable: Variable) -> bool {
        self.0[variable.to_index()]
    }

    /// Number of variables in this valuation (used mostly for consistency checks).
    pub fn num_vars(&self) -> u16 {
        self.0.len() as u16
    }

    /// Returns true if the values set in this valuation match the values fixed in the
    /// given partial valuation. I.e. this valuation is one of the completions of `clause`.
    pub fn extends(&self, clause: &PartialValuation) -> bool {
        clause
            .to_values()
            .into_iter()
            .all(|(var, value)| self.value(var) == value)
    }

    /// **(internal)** "Increment" this valuation, but only in the variables that are not fixed
    /// by the given `clause`. Interpret the free variables as a bit-vector and perform a standard
    /// increment. Returns `None` on overflow.
    pub(crate) fn next(&self, clause: &PartialValuation) -> Option<Valuation> {
        let mut next_vec = self.0.clone();
        let mut carry = true; // initially, we want to increment
        for (index, bit) in next_vec.iter_mut().enumerate() {
            if clause.has_value(Variable(index as u16)) {
                continue;
            }
            let new_value = *bit ^ carry;
            let new_carry = *bit && carry;
            *bit = new_value;
            carry = new_carry;
            if !new_carry {
                break;
            }
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
        if self.0.is_empty() {
            write!(f, "[]")?;
        } else {
            write!(f, "[{}", if self.0[0] { 1 } else { 0 })?;
            for i in 1..self.0.len() {
                write!(f, ",{}", if self.0[i] { 1 } else { 0 })?
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

/// Allow indexing of `Valuation` using `Variable`s.
impl Index<Variable> for Valuation {
    type Output = bool;

    fn index(&self, index: Variable) -> &Self::Output {
        &self.0[index.to_index()]
    }
}

/// Methods for working with `Diagram` valuations.
impl Diagram {
    /// Evaluate this `Diagram` in a specified `Valuation`.
    ///
    /// This is the index-based counterpart of `Diagram::evaluate`. Since a valuation assigns
    /// every variable, it cannot fail, but it panics if the valuation is too short
    /// (with `shields_up`, any variable count mismatch panics).
    pub fn eval_in(&self, valuation: &Valuation) -> bool {
        if cfg!(feature = "shields_up") && valuation.num_vars() != self.num_vars() {
            panic!(
                "Diagram has {} variables, but valuation has {}.",
                self.num_vars(),
                valuation.num_vars()
            )
        }
        let mut node = self.root_pointer();
        while !node.is_terminal() {
            let var = self.var_of(node);
            node = if valuation[var] {
                self.high_link_of(node)
            } else {
                self.low_link_of(node)
            }
        }
        node.is_one()
    }
}
