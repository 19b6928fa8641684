use thiserror::Error;

/// Errors reported by `VariableOrder`, `DiagramBuilder` and `Diagram` operations.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DiagramError {
    /// Evaluation reached a decision node whose variable has no value in the assignment.
    #[error("variable `{name}` is required by the diagram but has no value in the assignment")]
    MissingVariable { name: String },
    /// An input refers to a variable that is not part of the variable order.
    #[error("variable `{name}` is not part of the variable order")]
    UnknownVariable { name: String },
    /// A variable name appears more than once in a variable order.
    #[error("variable `{name}` appears more than once in the variable order")]
    DuplicateVariable { name: String },
    /// The variable order is larger than what the node representation can address.
    #[error("too many variables: got {count}, but at most {max} are supported")]
    TooManyVariables { count: usize, max: usize },
    /// A raw node table does not describe a valid reduced ordered diagram.
    #[error("malformed node table: {reason}")]
    MalformedNodeTable { reason: String },
}

impl DiagramError {
    pub(crate) fn malformed(reason: impl Into<String>) -> DiagramError {
        DiagramError::MalformedNodeTable {
            reason: reason.into(),
        }
    }
}
