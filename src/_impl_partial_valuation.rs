use crate::{PartialValuation, Variable};

impl PartialValuation {
    /// Creates an empty valuation without any variables set.
    pub fn empty() -> PartialValuation {
        PartialValuation(Vec::new())
    }

    /// Create a partial valuation from a list of variables and values.
    ///
    /// The order of variables in the slice can be arbitrary. The operation does not perform
    /// any uniqueness checking. If the slice contains multiple copies of the same variable,
    /// the last value is accepted.
    pub fn from_values(values: &[(Variable, bool)]) -> PartialValuation {
        let mut result = Self::empty();
        for (id, value) in values {
            result.set_value(*id, *value)
        }
        result
    }

    /// Turn this valuation into a vector of values which are stored in it, ordered by variable.
    pub fn to_values(&self) -> Vec<(Variable, bool)> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, value)| value.map(|value| (Variable(i as u16), value)))
            .collect()
    }

    /// Get a value stored for the given variable id, if any.
    pub fn get_value(&self, id: Variable) -> Option<bool> {
        self.0.get(id.to_index()).cloned().flatten()
    }

    /// Returns `true` if this valuation has the value of `id` variable set.
    pub fn has_value(&self, id: Variable) -> bool {
        self.get_value(id).is_some()
    }

    /// Update value of the given `id` variable.
    pub fn set_value(&mut self, id: Variable, value: bool) {
        let cell = self.mut_cell(id);
        *cell = Some(value);
    }

    /// Remove value of a variable from this valuation.
    ///
    /// If the value was not set, this operation has no effect.
    pub fn unset_value(&mut self, id: Variable) {
        let cell = self.mut_cell(id);
        *cell = None;
    }

    /// Returns `true` if no variable is fixed, i.e. the valuation covers every assignment.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|it| it.is_none())
    }

    /// Number of variables fixed by this valuation.
    pub fn cardinality(&self) -> usize {
        self.0.iter().filter(|it| it.is_some()).count()
    }

    /// The largest variable fixed by this valuation, or `None` if the valuation is empty.
    pub fn last_fixed_var(&self) -> Option<Variable> {
        self.0
            .iter()
            .rposition(|it| it.is_some())
            .map(|index| Variable(index as u16))
    }

    /// Returns `true` if every value fixed in `other` is fixed to the same value in `self`.
    pub fn extends(&self, other: &PartialValuation) -> bool {
        other
            .to_values()
            .into_iter()
            .all(|(var, value)| self.get_value(var) == Some(value))
    }

    fn mut_cell(&mut self, id: Variable) -> &mut Option<bool> {
        let index = id.to_index();
        while self.0.len() <= index {
            self.0.push(None);
        }
        &mut self.0[index]
    }
}

impl Default for PartialValuation {
    fn default() -> Self {
        Self::empty()
    }
}
