use crate::_test_util::assert_matches_minterms;
use crate::*;
use std::collections::HashSet;
use test_log::test;

/// A few minterm lists over four variables `a`, `b`, `c`, `d` that cover wildcards,
/// overlapping minterms and the constant functions.
fn scenarios() -> Vec<Vec<Vec<(&'static str, bool)>>> {
    vec![
        vec![],
        vec![vec![]],
        vec![vec![("a", true)]],
        vec![vec![("d", false)]],
        vec![vec![("a", true), ("b", true)], vec![("c", true), ("d", true)]],
        vec![
            vec![("a", true), ("b", false)],
            vec![("a", false), ("b", true)],
        ],
        vec![
            vec![("a", true), ("c", true)],
            vec![("a", true)],
            vec![("b", false), ("d", true)],
        ],
        vec![
            vec![("a", false), ("b", false), ("c", false), ("d", false)],
            vec![("a", true), ("b", true), ("c", true), ("d", true)],
        ],
        vec![vec![("b", true)], vec![("b", false)]],
    ]
}

fn mk_builder(minterms: &[Vec<(&str, bool)>]) -> DiagramBuilder {
    let mut builder = DiagramBuilder::new(&["a", "b", "c", "d"]).unwrap();
    for minterm in minterms {
        builder.add_allowed_input(minterm.clone(), true).unwrap();
    }
    builder
}

#[test]
fn built_diagrams_match_minterms() {
    for minterms in scenarios() {
        for share_nodes in [true, false] {
            let builder = mk_builder(&minterms).with_node_sharing(share_nodes);
            let diagram = builder.build();
            assert_matches_minterms(&diagram, builder.minterms());
        }
    }
}

#[test]
fn built_diagrams_are_reduced() {
    for minterms in scenarios() {
        for share_nodes in [true, false] {
            let diagram = mk_builder(&minterms).with_node_sharing(share_nodes).build();
            assert_eq!(Ok(()), diagram.validate());
            for node in diagram.nodes().skip(2) {
                assert_ne!(node.low_link(), node.high_link());
            }
        }
    }
}

#[test]
fn shared_diagrams_have_unique_nodes() {
    for minterms in scenarios() {
        let diagram = mk_builder(&minterms).build();
        let unique: HashSet<&DiagramNode> = diagram.nodes().collect();
        assert_eq!(diagram.size(), unique.len());
    }
}

#[test]
fn terminals_are_fixed() {
    for minterms in scenarios() {
        let diagram = mk_builder(&minterms).build();
        let (nodes, root) = diagram.to_nodes();
        assert_eq!(DiagramNode::mk_zero(4), nodes[0]);
        assert_eq!(DiagramNode::mk_one(4), nodes[1]);
        if root.is_terminal() {
            assert_eq!(2, nodes.len());
        } else {
            // The root is created last.
            assert_eq!(nodes.len() - 1, root.to_index());
        }
    }
}

#[test]
fn uncovered_inputs_are_false() {
    for minterms in scenarios() {
        let diagram = mk_builder(&minterms).build();
        let builder = mk_builder(&minterms);
        for valuation in ValuationsOfClauseIterator::new_unconstrained(4) {
            let covered = builder.minterms().iter().any(|m| valuation.extends(m));
            if !covered {
                assert!(!diagram.eval_in(&valuation));
            }
        }
    }
}

#[test]
fn build_is_idempotent() {
    for minterms in scenarios() {
        let builder = mk_builder(&minterms);
        assert_eq!(builder.build(), builder.build());
        let builder = builder.with_node_sharing(false);
        assert_eq!(builder.build(), builder.build());
    }
}

#[test]
fn false_outputs_do_not_change_the_diagram() {
    for minterms in scenarios() {
        let mut builder = mk_builder(&minterms);
        let before = builder.build();
        builder.add_allowed_input([("a", true)], false).unwrap();
        builder.add_allowed_input([("b", false), ("d", true)], false).unwrap();
        assert_eq!(before, builder.build());
    }
}

#[test]
fn shared_diagram_is_canonical() {
    // The same function given by different minterm lists yields a diagram of the same size.
    let first = mk_builder(&[vec![("a", true)]]).build();
    let second = mk_builder(&[
        vec![("a", true), ("b", true)],
        vec![("a", true), ("b", false), ("c", true)],
        vec![("a", true), ("b", false), ("c", false)],
    ])
    .build();
    assert_eq!(3, first.size());
    assert_eq!(first, second);

    // Rebuilding a diagram from its own paths does not change its size.
    for minterms in scenarios() {
        let diagram = mk_builder(&minterms).build();
        let mut rebuilt = DiagramBuilder::from_order(diagram.variables().clone());
        for path in diagram.paths() {
            rebuilt.add_minterm(path);
        }
        let rebuilt = rebuilt.build();
        assert_eq!(diagram.size(), rebuilt.size());
        assert_matches_minterms(&rebuilt, &diagram.paths().collect::<Vec<_>>());
    }
}

#[test]
fn evaluation_only_needs_visited_variables() {
    // a | (b & c)
    let diagram = mk_builder(&[vec![("a", true)], vec![("b", true), ("c", true)]]).build();
    assert_eq!(Ok(true), diagram.evaluate(&[("a", true)]));
    assert_eq!(Ok(false), diagram.evaluate(&[("a", false), ("b", false)]));
    assert_eq!(
        Err(DiagramError::MissingVariable {
            name: "c".to_string()
        }),
        diagram.evaluate(&[("a", false), ("b", true)])
    );
    assert_eq!(
        Err(DiagramError::MissingVariable {
            name: "a".to_string()
        }),
        diagram.evaluate(&[("b", true), ("c", true), ("d", true)])
    );
}
