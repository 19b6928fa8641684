use super::*;
use std::fmt::{Display, Error, Formatter};

/// For display purposes, node id is just a number.
impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_fmt(format_args!("{}", self.0))
    }
}

impl NodeId {
    /// Make a new id of the `0` terminal node.
    pub fn zero() -> NodeId {
        NodeId(0)
    }

    /// Make a new id of the `1` terminal node.
    pub fn one() -> NodeId {
        NodeId(1)
    }

    /// Check if the id corresponds to the `0` terminal.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the id corresponds to the `1` terminal.
    pub fn is_one(&self) -> bool {
        self.0 == 1
    }

    /// Check if the id corresponds to the `0` or `1` terminal.
    pub fn is_terminal(&self) -> bool {
        self.0 < 2
    }

    /// Cast this id to standard usize index.
    pub fn to_index(&self) -> usize {
        self.0 as usize
    }

    /// Create an id from an usize index.
    pub fn from_index(index: usize) -> NodeId {
        NodeId(index as u32)
    }

    /// Convert a `bool` value to valid terminal id.
    pub fn from_bool(value: bool) -> NodeId {
        if value {
            NodeId::one()
        } else {
            NodeId::zero()
        }
    }

    /// If this id is a terminal, convert it to `bool`, otherwise return `None`.
    pub fn as_bool(&self) -> Option<bool> {
        match self.0 {
            0 => Some(false),
            1 => Some(true),
            _ => None,
        }
    }
}
