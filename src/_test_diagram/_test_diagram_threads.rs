use crate::_test_util::assert_matches_minterms;
use crate::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

fn mk_diagram() -> Diagram {
    // (a | b) & (c | d)
    let mut builder = DiagramBuilder::new(&["a", "b", "c", "d"]).unwrap();
    builder
        .add_allowed_input([("a", false), ("b", true), ("c", false), ("d", true)], true)
        .unwrap();
    builder
        .add_allowed_input([("a", false), ("b", true), ("c", true)], true)
        .unwrap();
    builder
        .add_allowed_input([("a", true), ("c", false), ("d", true)], true)
        .unwrap();
    builder
        .add_allowed_input([("a", true), ("c", true)], true)
        .unwrap();
    builder.build()
}

fn expected(valuation: &Valuation) -> bool {
    let v = |i: u16| valuation.value(Variable(i));
    (v(0) || v(1)) && (v(2) || v(3))
}

#[test]
fn scoped_concurrent_evaluation() {
    let diagram = mk_diagram();
    let names = diagram.variables().names().to_vec();
    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for valuation in ValuationsOfClauseIterator::new_unconstrained(4) {
                    let assignment: HashMap<String, bool> = names
                        .iter()
                        .cloned()
                        .zip(valuation.clone().vector())
                        .collect();
                    assert_eq!(Ok(expected(&valuation)), diagram.evaluate(&assignment));
                }
            });
        }
    });
}

#[test]
fn shared_concurrent_evaluation() {
    let diagram = Arc::new(mk_diagram());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let diagram = Arc::clone(&diagram);
            thread::spawn(move || {
                ValuationsOfClauseIterator::new_unconstrained(4)
                    .filter(|valuation| diagram.eval_in(valuation))
                    .count()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(9, handle.join().unwrap());
    }
}

#[test]
fn concurrent_builds_are_independent() {
    let handles: Vec<_> = (0..4u16)
        .map(|i| {
            thread::spawn(move || {
                let mut builder = DiagramBuilder::new(&["a", "b", "c", "d"]).unwrap();
                let name = ["a", "b", "c", "d"][usize::from(i)];
                builder.add_allowed_input([(name, true)], true).unwrap();
                let diagram = builder.build();
                assert_matches_minterms(&diagram, builder.minterms());
                diagram
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let diagram = handle.join().unwrap();
        assert_eq!(3, diagram.size());
        assert_eq!(Variable(i as u16), diagram.var_of(diagram.root_pointer()));
    }
}
