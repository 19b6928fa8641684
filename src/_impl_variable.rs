use super::*;
use std::fmt::{Display, Error, Formatter};

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_fmt(format_args!("{}", self.0))
    }
}

impl Variable {
    /// Position of this variable in its `VariableOrder`.
    pub fn to_index(&self) -> usize {
        usize::from(self.0)
    }

    /// Create a variable from its position in a `VariableOrder`.
    ///
    /// *Panics:* `index` must fit into the supported variable range.
    pub fn from_index(index: usize) -> Variable {
        match u16::try_from(index) {
            Ok(index) if index < u16::MAX => Variable(index),
            _ => panic!("Variable index {} is out of range.", index),
        }
    }
}
