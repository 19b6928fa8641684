use super::*;

impl DiagramNode {
    /// Make a new terminal `zero` node.
    pub fn mk_zero(num_vars: u16) -> DiagramNode {
        DiagramNode {
            var: Variable(num_vars),
            low_link: NodeId::zero(),
            high_link: NodeId::zero(),
        }
    }

    /// Make a new terminal `one` node.
    pub fn mk_one(num_vars: u16) -> DiagramNode {
        DiagramNode {
            var: Variable(num_vars),
            low_link: NodeId::one(),
            high_link: NodeId::one(),
        }
    }

    /// Make a new decision node.
    ///
    /// *Assumptions:*
    ///  - `low` and `high` are ids in the same `Diagram` table.
    ///  - Returned node will be added to the same `Diagram` where `low` and `high` are ids.
    pub fn mk_node(var: Variable, low_link: NodeId, high_link: NodeId) -> DiagramNode {
        DiagramNode {
            var,
            low_link,
            high_link,
        }
    }

    /// The variable this node conditions on. For terminals, this is the variable count.
    pub fn var(&self) -> Variable {
        self.var
    }

    /// Id of the node reached when the variable is `false`.
    pub fn low_link(&self) -> NodeId {
        self.low_link
    }

    /// Id of the node reached when the variable is `true`.
    pub fn high_link(&self) -> NodeId {
        self.high_link
    }

    /// Check whether this node has the shape of the `zero` terminal.
    pub fn is_zero(&self) -> bool {
        self.low_link.is_zero() && self.high_link.is_zero()
    }

    /// Check whether this node has the shape of the `one` terminal.
    pub fn is_one(&self) -> bool {
        self.low_link.is_one() && self.high_link.is_one()
    }
}
