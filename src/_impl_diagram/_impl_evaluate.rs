use crate::*;
use log::trace;

impl Diagram {
    /// Evaluate this `Diagram` against a named `assignment`.
    ///
    /// The walk starts at the root and follows the low (`false`) or high (`true`) link of every
    /// decision node until it reaches a terminal. Only variables that are actually visited need
    /// to be assigned, and the walk visits each variable at most once.
    ///
    /// Fails with `DiagramError::MissingVariable` if a visited decision node tests a variable
    /// that has no value in `assignment`.
    pub fn evaluate<A: Assignment + ?Sized>(&self, assignment: &A) -> Result<bool, DiagramError> {
        let mut node = self.root_pointer();
        while !node.is_terminal() {
            let name = self.variables.name_of(self.var_of(node));
            let Some(value) = assignment.value_of(name) else {
                trace!("evaluate: `{}` missing at node {}", name, node);
                return Err(DiagramError::MissingVariable {
                    name: name.to_string(),
                });
            };
            node = if value {
                self.high_link_of(node)
            } else {
                self.low_link_of(node)
            };
        }
        Ok(node.is_one())
    }
}
