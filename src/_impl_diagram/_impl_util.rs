use crate::*;
use std::collections::HashSet;
use std::iter::Map;
use std::ops::Range;
use std::slice::Iter;

/// Several useful (mostly internal) low-level utility methods for `Diagram`s.
impl Diagram {
    /// The number of nodes in this `Diagram`, including both terminals.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Number of variables in the corresponding `VariableOrder`.
    pub fn num_vars(&self) -> u16 {
        self.variables.num_vars()
    }

    /// The variable order of this `Diagram`.
    pub fn variables(&self) -> &VariableOrder {
        &self.variables
    }

    /// If this `Diagram` is a constant, convert it to `bool`, otherwise return `None`.
    pub fn as_bool(&self) -> Option<bool> {
        self.root.as_bool()
    }

    /// True if this `Diagram` is exactly the `true` function.
    pub fn is_true(&self) -> bool {
        self.root.is_one()
    }

    /// True if this `Diagram` is exactly the `false` function.
    pub fn is_false(&self) -> bool {
        self.root.is_zero()
    }

    /// Approximately computes the number of full valuations satisfying the function
    /// represented by this `Diagram`.
    pub fn cardinality(&self) -> f64 {
        if self.is_false() {
            return 0.0;
        }
        // Children always precede their parents, so one forward pass is enough. The value
        // of a node counts valuations of the variables from its own variable onwards.
        let mut cache = vec![0.0; self.nodes.len()];
        cache[1] = 1.0;
        for node_id in self.pointers().skip(2) {
            let node_var = self.var_of(node_id).0;
            let low = self.low_link_of(node_id);
            let high = self.high_link_of(node_id);
            let low_gap = self.var_of(low).0 - node_var - 1;
            let high_gap = self.var_of(high).0 - node_var - 1;
            cache[node_id.to_index()] = cache[low.to_index()] * 2.0_f64.powi(low_gap as i32)
                + cache[high.to_index()] * 2.0_f64.powi(high_gap as i32);
        }
        let root_var = self.var_of(self.root).0;
        let r = cache[self.root.to_index()] * 2.0_f64.powi(root_var as i32);
        if r.is_nan() {
            f64::INFINITY
        } else {
            r
        }
    }

    /// Id of the root of the decision diagram.
    pub fn root_pointer(&self) -> NodeId {
        self.root
    }

    /// Get the low link of the node with the specified id.
    pub fn low_link_of(&self, node: NodeId) -> NodeId {
        self.nodes[node.to_index()].low_link
    }

    /// Get the high link of the node with the specified id.
    pub fn high_link_of(&self, node: NodeId) -> NodeId {
        self.nodes[node.to_index()].high_link
    }

    /// Get the conditioning variable of the node with the specified id.
    ///
    /// Note that this also technically works for terminals, but the returned `Variable` is
    /// not valid in this `Diagram`.
    pub fn var_of(&self, node: NodeId) -> Variable {
        self.nodes[node.to_index()].var
    }

    /// Iterate over all nodes of the `Diagram` (including terminals), in id order.
    pub fn nodes(&self) -> Iter<'_, DiagramNode> {
        self.nodes.iter()
    }

    /// Return the set of all variables that actually appear as decision variables in this
    /// `Diagram`.
    pub fn support_set(&self) -> HashSet<Variable> {
        self.nodes().skip(2).map(|node| node.var).collect()
    }

    /// Create a new `Diagram` for the `false` function. Both terminals are still present.
    pub fn mk_false(variables: VariableOrder) -> Diagram {
        let num_vars = variables.num_vars();
        Diagram {
            variables,
            nodes: vec![DiagramNode::mk_zero(num_vars), DiagramNode::mk_one(num_vars)],
            root: NodeId::zero(),
        }
    }

    /// Create a new `Diagram` for the `true` function.
    pub fn mk_true(variables: VariableOrder) -> Diagram {
        let mut diagram = Diagram::mk_false(variables);
        diagram.root = NodeId::one();
        diagram
    }

    /// **(internal)** Add a new node to an existing `Diagram` and return its id. The root is
    /// not changed.
    pub(crate) fn push_node(&mut self, node: DiagramNode) -> NodeId {
        self.nodes.push(node);
        NodeId::from_index(self.nodes.len() - 1)
    }

    /// **(internal)** Make `root` the root of this `Diagram`.
    pub(crate) fn set_root(&mut self, root: NodeId) {
        self.root = root;
    }

    /// **(internal)** Create an iterator over all ids of the `Diagram` (including terminals!).
    ///
    /// The iteration order is the same as the underlying representation, so you can expect
    /// terminals to be the first two nodes.
    pub(crate) fn pointers(&self) -> Map<Range<usize>, fn(usize) -> NodeId> {
        (0..self.size()).map(NodeId::from_index)
    }

    /// Consume this `Diagram` and return its node table and root id.
    pub fn to_nodes(self) -> (Vec<DiagramNode>, NodeId) {
        (self.nodes, self.root)
    }

    /// Create a `Diagram` from a "raw" node table and a root id.
    ///
    /// The table must start with the `0` and `1` terminals (as created by `DiagramNode::mk_zero`
    /// and `DiagramNode::mk_one` with the variable count of `variables`). Every decision node
    /// must only reference nodes that precede it, edges must follow the variable order, and no
    /// decision node may have identical children. See also `Diagram::validate`.
    pub fn from_nodes(
        variables: VariableOrder,
        nodes: &[DiagramNode],
        root: NodeId,
    ) -> Result<Diagram, DiagramError> {
        let diagram = Diagram {
            variables,
            nodes: nodes.to_vec(),
            root,
        };
        diagram.validate()?;
        Ok(diagram)
    }

    /// Check that this `Diagram` is structurally sound.
    ///
    /// In particular: the terminals are at positions `0` and `1`, every decision node uses
    /// a valid variable, only references nodes with smaller ids, conditions on a variable that
    /// precedes the variables of its children, and has two different children. The root must
    /// be a valid id.
    pub fn validate(&self) -> Result<(), DiagramError> {
        let num_vars = self.num_vars();
        if self.nodes.len() < 2 {
            return Err(DiagramError::malformed("missing terminal nodes"));
        }
        if self.nodes[0] != DiagramNode::mk_zero(num_vars) {
            return Err(DiagramError::malformed(
                "node at position 0 must be the zero terminal",
            ));
        }
        if self.nodes[1] != DiagramNode::mk_one(num_vars) {
            return Err(DiagramError::malformed(
                "node at position 1 must be the one terminal",
            ));
        }
        if self.root.to_index() >= self.nodes.len() {
            return Err(DiagramError::malformed(format!(
                "root {} does not exist",
                self.root
            )));
        }

        for node_id in self.pointers().skip(2) {
            let node = &self.nodes[node_id.to_index()];
            if node.var.0 >= num_vars {
                return Err(DiagramError::malformed(format!(
                    "invalid variable {} in node {}",
                    node.var, node_id
                )));
            }
            if node.low_link >= node_id {
                return Err(DiagramError::malformed(format!(
                    "low link {} of node {} is not created before the node",
                    node.low_link, node_id
                )));
            }
            if node.high_link >= node_id {
                return Err(DiagramError::malformed(format!(
                    "high link {} of node {} is not created before the node",
                    node.high_link, node_id
                )));
            }
            if node.low_link == node.high_link {
                return Err(DiagramError::malformed(format!(
                    "node {} is redundant: both links lead to {}",
                    node_id, node.low_link
                )));
            }
            if self.var_of(node.low_link) <= node.var || self.var_of(node.high_link) <= node.var {
                return Err(DiagramError::malformed(format!(
                    "node {} breaks the variable order",
                    node_id
                )));
            }
        }

        Ok(())
    }
}
