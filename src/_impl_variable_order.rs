use super::*;
use std::borrow::Borrow;
use std::fmt::{Display, Formatter};

/// **(internal)** The largest number of variables a `VariableOrder` can hold. The terminal nodes
/// use the variable count as their sentinel variable, so it must also fit into `u16`.
const MAX_VARIABLES: usize = (u16::MAX - 1) as usize;

impl VariableOrder {
    /// Create a new `VariableOrder` with the given variable names, in the given order.
    ///
    /// Names have to be unique and there can be at most 65534 variables.
    pub fn new<S: AsRef<str>>(names: &[S]) -> Result<VariableOrder, DiagramError> {
        if names.len() > MAX_VARIABLES {
            return Err(DiagramError::TooManyVariables {
                count: names.len(),
                max: MAX_VARIABLES,
            });
        }
        let mut var_names = Vec::with_capacity(names.len());
        let mut var_index_mapping = HashMap::with_capacity(names.len());
        for (index, name) in names.iter().enumerate() {
            let name = name.as_ref();
            if var_index_mapping.contains_key(name) {
                return Err(DiagramError::DuplicateVariable {
                    name: name.to_string(),
                });
            }
            var_index_mapping.insert(name.to_string(), index as u16);
            var_names.push(name.to_string());
        }
        Ok(VariableOrder {
            var_names,
            var_index_mapping,
        })
    }

    /// Return the number of variables in this order.
    pub fn num_vars(&self) -> u16 {
        self.var_names.len() as u16
    }

    /// Create a `Variable` based on a variable name. If the name does not appear
    /// in this order, return `None`.
    pub fn var_by_name(&self, name: &str) -> Option<Variable> {
        self.var_index_mapping.get(name).cloned().map(Variable)
    }

    /// Provides a vector of all `Variable`s in this order.
    pub fn variables(&self) -> Vec<Variable> {
        (0..self.num_vars()).map(Variable).collect()
    }

    /// Obtain the name of a specific `Variable`.
    ///
    /// *Panics:* `variable` must be valid in this order.
    pub fn name_of(&self, variable: Variable) -> &str {
        self.var_names[variable.to_index()].as_str()
    }

    /// All variable names, in order.
    pub fn names(&self) -> &[String] {
        &self.var_names
    }

    /// Translate a named (partial) assignment into a `PartialValuation` over this order.
    ///
    /// If the same variable appears more than once, the last value is accepted. Names that are
    /// not part of this order are rejected.
    pub fn partial_valuation<I, N, B>(&self, values: I) -> Result<PartialValuation, DiagramError>
    where
        I: IntoIterator<Item = (N, B)>,
        N: AsRef<str>,
        B: Borrow<bool>,
    {
        let mut result = PartialValuation::empty();
        for (name, value) in values {
            let name = name.as_ref();
            let Some(variable) = self.var_by_name(name) else {
                return Err(DiagramError::UnknownVariable {
                    name: name.to_string(),
                });
            };
            result.set_value(variable, *value.borrow());
        }
        Ok(result)
    }
}

impl Display for VariableOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "[{}]", self.var_names.join(", "))
    }
}
