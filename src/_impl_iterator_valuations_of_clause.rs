use crate::{PartialValuation, Valuation, ValuationsOfClauseIterator};
use std::mem::swap;

impl ValuationsOfClauseIterator {
    /// Create an empty valuation iterator.
    pub fn empty() -> ValuationsOfClauseIterator {
        ValuationsOfClauseIterator {
            next_valuation: None,
            clause: PartialValuation::empty(),
        }
    }

    /// Create a new valuation iterator from a partial valuation and a variable count.
    ///
    /// The iterator will visit every valuation in the `2^num_vars` space that extends
    /// the given `clause`, i.e. every completion of its wildcards.
    ///
    /// *Panics:* `clause` must not fix variables outside of `num_vars`.
    pub fn new(clause: PartialValuation, num_vars: u16) -> ValuationsOfClauseIterator {
        if let Some(last) = clause.last_fixed_var() {
            assert!(
                last.to_index() < usize::from(num_vars),
                "Clause fixes variable {} outside of {} variables.",
                last,
                num_vars
            );
        }
        let mut first_valuation = Valuation::all_false(num_vars);
        for (var, value) in clause.to_values() {
            if value {
                first_valuation.flip_value(var);
            }
        }

        ValuationsOfClauseIterator {
            next_valuation: Some(first_valuation),
            clause,
        }
    }

    /// Create a new valuation iterator which is not constrained by any clause and will
    /// iterate over all `2^num_vars`.
    pub fn new_unconstrained(num_vars: u16) -> ValuationsOfClauseIterator {
        ValuationsOfClauseIterator {
            next_valuation: Some(Valuation::all_false(num_vars)),
            clause: PartialValuation::empty(),
        }
    }
}

impl Iterator for ValuationsOfClauseIterator {
    type Item = Valuation;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(valuation) = &self.next_valuation {
            // Compute the next valuation and then swap it with the current value.
            // In the end, result contains self.next_valuation and next_valuation
            // contains the result of valuation.next.
            let mut result = valuation.next(&self.clause);
            swap(&mut result, &mut self.next_valuation);
            result
        } else {
            None
        }
    }
}
