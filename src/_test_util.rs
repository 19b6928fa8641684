use super::*;

/// A small diagram over variables $v_1, v_2, v_3, v_4, v_5$ corresponding to the formula $(v_3 \land \neg v_4)$
pub fn mk_small_test_diagram() -> Diagram {
    let mut diagram = Diagram::mk_false(mk_5_variable_order());
    let not_v4 = diagram.push_node(DiagramNode::mk_node(
        Variable(3), // !v4
        NodeId::one(),
        NodeId::zero(),
    ));
    let v3 = diagram.push_node(DiagramNode::mk_node(
        Variable(2), // v3
        NodeId::zero(),
        not_v4,
    ));
    diagram.set_root(v3);
    diagram
}

/// Make a new `VariableOrder` with variables $v_1, v_2, v_3, v_4, v_5$.
pub fn mk_5_variable_order() -> VariableOrder {
    VariableOrder::new(&["v1", "v2", "v3", "v4", "v5"]).unwrap()
}

/// Check that `diagram` agrees with the closed-world reading of `minterms` on every full
/// valuation: a valuation is `true` exactly when it extends at least one minterm.
pub fn assert_matches_minterms(diagram: &Diagram, minterms: &[PartialValuation]) {
    for valuation in ValuationsOfClauseIterator::new_unconstrained(diagram.num_vars()) {
        let expected = minterms.iter().any(|m| valuation.extends(m));
        assert_eq!(
            expected,
            diagram.eval_in(&valuation),
            "Diagram disagrees with minterms in {}.",
            valuation
        );
    }
}
