use crate::{
    Diagram, DiagramPathIterator, DiagramSatisfyingValuations, NodeId, PartialValuation,
    Valuation, ValuationsOfClauseIterator,
};

impl Diagram {
    /// Iterate over all paths from the root to the `1` terminal, each represented as the
    /// `PartialValuation` of the variables it tests. The paths are pairwise disjoint and
    /// together they cover exactly the valuations on which the diagram evaluates to `true`.
    pub fn paths(&self) -> DiagramPathIterator {
        DiagramPathIterator::new(self)
    }

    /// Iterate over all full valuations on which this diagram evaluates to `true`.
    ///
    /// Be aware of the potential exponential number of iterations!
    pub fn sat_valuations(&self) -> DiagramSatisfyingValuations {
        let mut paths = DiagramPathIterator::new(self);
        let valuations = if let Some(first) = paths.next() {
            ValuationsOfClauseIterator::new(first, self.num_vars())
        } else {
            // This is a special case for the `false` diagram.
            ValuationsOfClauseIterator::empty()
        };
        DiagramSatisfyingValuations {
            diagram: self,
            paths,
            valuations,
        }
    }
}

impl DiagramPathIterator<'_> {
    pub fn new(diagram: &Diagram) -> DiagramPathIterator {
        if diagram.is_false() {
            DiagramPathIterator {
                diagram,
                stack: Vec::new(),
            }
        } else {
            let mut stack = vec![diagram.root_pointer()];
            continue_path(diagram, &mut stack); // Compute the first valid path.
            DiagramPathIterator { diagram, stack }
        }
    }
}

impl Iterator for DiagramPathIterator<'_> {
    type Item = PartialValuation;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stack.is_empty() {
            return None;
        }
        let item = make_clause(self.diagram, &self.stack);

        // Now, we need to pop the path until we find a node with a valid successor,
        // and then extend the path using `continue_path`.
        let mut last_child = self.stack.pop()?;
        while let Some(top) = self.stack.last().cloned() {
            let low = self.diagram.low_link_of(top);
            let high = self.diagram.high_link_of(top);
            if low == last_child && !high.is_zero() {
                // The low branch is exhausted, continue in the high branch.
                self.stack.push(high);
                continue_path(self.diagram, &mut self.stack);
                break;
            } else {
                // Both branches (or the only non-zero one) have been processed.
                last_child = top;
                self.stack.pop();
            }
        }

        // Here, either a path was found and extended, or the stack is empty and this was
        // the last item.
        Some(item)
    }
}

impl Iterator for DiagramSatisfyingValuations<'_> {
    type Item = Valuation;

    fn next(&mut self) -> Option<Self::Item> {
        let next_valuation = self.valuations.next();
        if next_valuation.is_some() {
            return next_valuation;
        }
        let next_path = self.paths.next()?;
        self.valuations = ValuationsOfClauseIterator::new(next_path, self.diagram.num_vars());
        // A new valuations iterator is never empty unless created using the `empty` constructor.
        self.valuations.next()
    }
}

/// **(internal)** Given a prefix of a path in a diagram, continue the prefix, always choosing
/// the low link unless it leads to the `0` terminal.
///
/// The input path must be non-empty and must not end in the `0` terminal.
fn continue_path(diagram: &Diagram, path: &mut Vec<NodeId>) {
    while let Some(top) = path.last().cloned() {
        if top.is_one() {
            return;
        }
        let low = diagram.low_link_of(top);
        let high = diagram.high_link_of(top);
        if !low.is_zero() {
            path.push(low);
        } else if !high.is_zero() {
            path.push(high);
        } else {
            unreachable!("Node {} has two zero links.", top);
        }
    }
}

/// **(internal)** Convert a path in a `Diagram` saved as a stack into a clause.
///
/// The path must end with the id of the one-terminal node.
fn make_clause(diagram: &Diagram, path: &[NodeId]) -> PartialValuation {
    let mut result = PartialValuation::empty();
    for step in path.windows(2) {
        let (this_node, next_node) = (step[0], step[1]);
        let var = diagram.var_of(this_node);
        if diagram.low_link_of(this_node) == next_node {
            result.set_value(var, false);
        } else {
            result.set_value(var, true);
        }
    }
    result
}
