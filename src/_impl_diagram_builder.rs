use crate::*;
use fxhash::FxBuildHasher;
use log::{debug, trace};
use std::borrow::Borrow;

impl DiagramBuilder {
    /// Create a new builder over the given ordered, unique variable names.
    pub fn new<S: AsRef<str>>(variables: &[S]) -> Result<DiagramBuilder, DiagramError> {
        Ok(DiagramBuilder::from_order(VariableOrder::new(variables)?))
    }

    /// Create a new builder over an existing `VariableOrder`.
    pub fn from_order(variables: VariableOrder) -> DiagramBuilder {
        DiagramBuilder {
            variables,
            minterms: Vec::new(),
            share_nodes: true,
        }
    }

    /// Enable or disable node sharing (enabled by default).
    ///
    /// With sharing, structurally identical decision nodes are unified across the whole
    /// construction and the result is the canonical reduced ordered diagram of the function.
    /// Without it, only a node whose two children are identical is eliminated, so equal
    /// sub-diagrams created in different branches are kept as separate copies. Both variants
    /// represent the same function.
    pub fn with_node_sharing(mut self, share_nodes: bool) -> DiagramBuilder {
        self.share_nodes = share_nodes;
        self
    }

    /// The variable order of this builder.
    pub fn variables(&self) -> &VariableOrder {
        &self.variables
    }

    /// All minterms stored so far, in insertion order.
    pub fn minterms(&self) -> &[PartialValuation] {
        &self.minterms
    }

    /// Declare the `output` of the function for a (partial) named `input`.
    ///
    /// Variables missing from `input` are wildcards: the input then stands for every
    /// completion of them. Only inputs with `output == true` are stored; everything that is not
    /// covered by a stored input evaluates to `false`, so calling this with `output == false`
    /// has no effect.
    ///
    /// Fails with `DiagramError::UnknownVariable` if `input` names a variable that is not part
    /// of the variable order. If a variable appears more than once, the last value is used.
    pub fn add_allowed_input<I, N, B>(&mut self, input: I, output: bool) -> Result<(), DiagramError>
    where
        I: IntoIterator<Item = (N, B)>,
        N: AsRef<str>,
        B: Borrow<bool>,
    {
        if !output {
            return Ok(());
        }
        let minterm = self.variables.partial_valuation(input)?;
        self.add_minterm(minterm);
        Ok(())
    }

    /// Store a minterm given as an index-based `PartialValuation`.
    ///
    /// *Panics:* all variables fixed in `minterm` must belong to the variable order.
    pub fn add_minterm(&mut self, minterm: PartialValuation) {
        if let Some(last) = minterm.last_fixed_var() {
            assert!(
                last.0 < self.variables.num_vars(),
                "Minterm fixes variable {}, but there are only {} variables.",
                last,
                self.variables.num_vars()
            );
        }
        self.minterms.push(minterm);
    }

    /// Compile the stored minterms into a `Diagram`.
    ///
    /// Every call runs a fresh construction with its own node table, so the builder can keep
    /// accepting inputs afterwards without affecting diagrams that were already built.
    pub fn build(&self) -> Diagram {
        debug!(
            "build: {} minterms over {} variables (node sharing: {})",
            self.minterms.len(),
            self.variables.num_vars(),
            self.share_nodes
        );
        let diagram = BuildContext::new(self).run();
        debug!(
            "build: finished with {} nodes, root {}",
            diagram.size(),
            diagram.root_pointer()
        );
        if cfg!(feature = "shields_up") {
            if let Err(error) = diagram.validate() {
                panic!("Construction produced an invalid diagram: {}", error);
            }
        }
        diagram
    }
}

/// **(internal)** One unit of work of the construction.
///
/// `Develop` is a call of the Shannon expansion for the minterms (given as indices) that
/// survived all decisions on the path so far. `Merge` combines the two results of the
/// expansion on `var` that sit on top of the result stack.
enum Task {
    Develop { var: u16, minterms: Vec<usize> },
    Merge { var: Variable },
}

/// **(internal)** The state of a single construction. The node table and the id counter
/// (the table length) are owned by the context and moved into the final `Diagram`.
struct BuildContext<'a> {
    num_vars: u16,
    minterms: &'a [PartialValuation],
    // For every minterm, the first variable index from which it is only wildcards.
    wildcard_from: Vec<u16>,
    diagram: Diagram,
    // Every node in `diagram` is inserted into `existing` - this ensures we have no duplicates.
    existing: Option<HashMap<DiagramNode, NodeId, FxBuildHasher>>,
}

impl BuildContext<'_> {
    fn new(builder: &DiagramBuilder) -> BuildContext {
        let num_vars = builder.variables.num_vars();
        let wildcard_from = builder
            .minterms
            .iter()
            .map(|m| m.last_fixed_var().map(|last| last.0 + 1).unwrap_or(0))
            .collect();
        let existing = if builder.share_nodes {
            let mut existing =
                HashMap::with_capacity_and_hasher(builder.minterms.len(), FxBuildHasher::default());
            existing.insert(DiagramNode::mk_zero(num_vars), NodeId::zero());
            existing.insert(DiagramNode::mk_one(num_vars), NodeId::one());
            Some(existing)
        } else {
            None
        };
        BuildContext {
            num_vars,
            minterms: &builder.minterms,
            wildcard_from,
            diagram: Diagram::mk_false(builder.variables.clone()),
            existing,
        }
    }

    /// Run the expansion on an explicit stack. The high branch of every decision is developed
    /// before the low branch, so node ids follow the order of the recursive formulation.
    fn run(mut self) -> Diagram {
        let mut results: Vec<NodeId> = Vec::new();
        let mut stack: Vec<Task> = vec![Task::Develop {
            var: 0,
            minterms: (0..self.minterms.len()).collect(),
        }];

        while let Some(task) = stack.pop() {
            match task {
                Task::Develop { var, minterms } => {
                    if let Some(terminal) = self.develop(var, minterms, &mut stack) {
                        results.push(terminal);
                    }
                }
                Task::Merge { var } => {
                    let (Some(low), Some(high)) = (results.pop(), results.pop()) else {
                        unreachable!("Merge on {} without two developed branches.", var);
                    };
                    let node = self.mk_node(var, low, high);
                    results.push(node);
                }
            }
        }

        let root = results.pop().unwrap_or_else(NodeId::zero);
        debug_assert!(results.is_empty());
        self.diagram.set_root(root);
        self.diagram
    }

    /// Expand `minterms` starting at variable `var`. Either resolves the task to a terminal
    /// immediately, or pushes the sub-tasks of the first variable that needs a decision.
    fn develop(&self, mut var: u16, minterms: Vec<usize>, stack: &mut Vec<Task>) -> Option<NodeId> {
        // The loop skips variables that no surviving minterm constrains. Both partitions would
        // be the same set for such a variable, so its node would always be reduced.
        loop {
            if minterms.is_empty() {
                return Some(NodeId::zero());
            }
            // A minterm that has no constraint left reaches every leaf of this sub-diagram.
            if var == self.num_vars || minterms.iter().any(|m| self.wildcard_from[*m] <= var) {
                return Some(NodeId::one());
            }

            let variable = Variable(var);
            let should_branch = minterms
                .iter()
                .any(|m| self.minterms[*m].has_value(variable));
            if !should_branch {
                var += 1;
                continue;
            }

            let mut var_true = Vec::new();
            let mut var_false = Vec::new();
            for m in minterms {
                match self.minterms[m].get_value(variable) {
                    Some(true) => var_true.push(m),
                    Some(false) => var_false.push(m),
                    None => {
                        var_true.push(m);
                        var_false.push(m);
                    }
                }
            }

            stack.push(Task::Merge { var: variable });
            stack.push(Task::Develop {
                var: var + 1,
                minterms: var_false,
            });
            stack.push(Task::Develop {
                var: var + 1,
                minterms: var_true,
            });
            return None;
        }
    }

    /// Create (or reuse) a decision node on `var`. A node with identical children is never
    /// created; the shared child is returned instead.
    fn mk_node(&mut self, var: Variable, low: NodeId, high: NodeId) -> NodeId {
        if low == high {
            trace!("mk_node: {} is redundant, both links lead to {}", var, low);
            return low;
        }
        let node = DiagramNode::mk_node(var, low, high);
        if let Some(existing) = self.existing.as_ref().and_then(|e| e.get(&node)) {
            trace!("mk_node({}, {}, {}): reusing {}", var, low, high, existing);
            return *existing;
        }
        let id = self.diagram.push_node(node);
        trace!("mk_node({}, {}, {}) -> {}", var, low, high, id);
        if let Some(existing) = self.existing.as_mut() {
            existing.insert(node, id);
        }
        id
    }
}
