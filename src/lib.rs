//! # Minterm BDD
//!
//! This crate compiles Boolean functions given as lists of satisfying (partial) assignments, i.e.
//! *minterms*, into [binary decision diagrams](https://en.wikipedia.org/wiki/Binary_decision_diagram)
//! (BDDs) and evaluates them against concrete assignments.
//!
//! A minterm may leave any subset of variables unspecified. Such variables are *wildcards* and
//! the minterm then stands for every completion of them. Assignments that are not covered by any
//! minterm evaluate to `false`.
//!
//! Every `Diagram` owns its node table. Once built, it is immutable and can be shared between
//! threads and evaluated concurrently without synchronisation.
//!
//! ```rust
//! use minterm_bdd::DiagramBuilder;
//!
//! // (A | B) & (C | D), with wildcards.
//! let mut builder = DiagramBuilder::new(&["A", "B", "C", "D"]).unwrap();
//! builder.add_allowed_input([("A", false), ("B", true), ("C", false), ("D", true)], true).unwrap();
//! builder.add_allowed_input([("A", false), ("B", true), ("C", true)], true).unwrap();
//! builder.add_allowed_input([("A", true), ("C", false), ("D", true)], true).unwrap();
//! builder.add_allowed_input([("A", true), ("C", true)], true).unwrap();
//!
//! let diagram = builder.build();
//!
//! let input = [("A", true), ("B", false), ("C", false), ("D", true)];
//! assert!(diagram.evaluate(&input).unwrap());
//! let input = [("A", false), ("B", false), ("C", true), ("D", false)];
//! assert!(!diagram.evaluate(&input).unwrap());
//!
//! // Variables that are never visited do not have to be assigned.
//! assert!(diagram.evaluate(&[("A", false), ("B", false)]).is_ok());
//! ```
//!

use std::collections::HashMap;

/// **(internal)** Implementations for the `Diagram` struct.
mod _impl_diagram;

/// **(internal)** Implementation of the minterm-to-diagram construction.
mod _impl_diagram_builder;


/// Several basic utility methods for testing.
#[cfg(test)]
mod _test_util;

/// **(internal)** Implementation of the `DiagramNode`.
mod _impl_diagram_node;

/// **(internal)** Implementation of the `NodeId`.
mod _impl_node_id;

/// **(internal)** Implementation of the `Variable`.
mod _impl_variable;

/// **(internal)** Implementation of the `VariableOrder`.
mod _impl_variable_order;

/// **(internal)** Implementation of the `Valuation`.
mod _impl_valuation;

/// **(internal)** Implementation of the `PartialValuation`.
mod _impl_partial_valuation;

/// **(internal)** Implementation of the `Assignment` trait for standard collections.
mod _impl_assignment;

/// **(internal)** Implementation of the `ValuationsOfClauseIterator`.
mod _impl_iterator_valuations_of_clause;

/// **(internal)** Implementation of the `DiagramPathIterator`.
mod _impl_diagram_path_iterator;

/// Error type shared by all fallible operations of this crate.
mod error;

pub use error::DiagramError;

/// An immutable, array-based binary decision diagram.
///
/// The node table always starts with the two terminal nodes (`0` and `1`), followed by
/// decision nodes in the order in which they were created. Children always precede their
/// parents, so the table is a valid bottom-up (post-order) encoding of the graph.
///
/// To create a `Diagram`, use a `DiagramBuilder`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagram {
    variables: VariableOrder,
    nodes: Vec<DiagramNode>,
    root: NodeId,
}

/// Identifies one of the variables that can appear as a decision condition in a `Diagram`.
///
/// The value is the position of the variable in the `VariableOrder`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Variable(u16);

/// Exactly describes one assignment of boolean values to all variables of a `Diagram`,
/// indexed by `Variable`.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Valuation(Vec<bool>);

/// Describes assignment of some arbitrary number of variables, indexed by `Variable`.
///
/// Unassigned variables are wildcards. A partial valuation is the internal representation of
/// a minterm and it also exactly describes one path in a `Diagram`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct PartialValuation(Vec<Option<bool>>);

/// An iterator which goes through all paths in the `Diagram` that end in the `1` terminal,
/// representing them as `PartialValuation`s.
pub struct DiagramPathIterator<'a> {
    diagram: &'a Diagram,
    // Stack keeps the last discovered path. If last path was consumed, the stack is empty.
    stack: Vec<NodeId>,
}

/// An iterator over all satisfying valuations of a specific `Diagram`.
///
/// Be aware of the potential exponential number of iterations!
pub struct DiagramSatisfyingValuations<'a> {
    diagram: &'a Diagram,
    paths: DiagramPathIterator<'a>,
    valuations: ValuationsOfClauseIterator,
}

/// An iterator which goes through all valuations that extend a specific partial valuation.
///
/// Mind that the number of such valuations can be exponential!
#[derive(Clone)]
pub struct ValuationsOfClauseIterator {
    next_valuation: Option<Valuation>,
    clause: PartialValuation,
}

/// The fixed, ordered sequence of variable names of a `Diagram`.
///
/// Every path in a diagram visits variables in exactly this order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VariableOrder {
    var_names: Vec<String>,
    var_index_mapping: HashMap<String, u16>,
}

/// Accumulates minterms and compiles them into a `Diagram`.
///
/// Only assignments with output `true` are stored. Everything that is not covered by some
/// stored minterm is assumed to be `false`.
#[derive(Clone, Debug)]
pub struct DiagramBuilder {
    variables: VariableOrder,
    minterms: Vec<PartialValuation>,
    share_nodes: bool,
}

/// A type-safe index into the `Diagram` node table.
///
/// Ids `0` and `1` are reserved for the terminal nodes. Decision nodes use ids `>= 2`, assigned
/// in creation order.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(u32);

/// Representation of individual vertices of the `Diagram` directed acyclic graph.
///
/// A `DiagramNode` can be a terminal, in which case it is either `0` or `1`, or a decision node,
/// in which case it contains a variable $v_i$ which it conditions upon and two ids
/// (`low` and `high`) of other nodes in the same `Diagram`.
///
/// Internally, we represent terminal nodes using the same structure, giving them cyclic
/// links. Instead of variable id, we use the number of variables in the
/// `VariableOrder`. This is consistent with the fact that we first condition on smallest
/// variable ids, and it is used for consistency checks inside the library.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DiagramNode {
    var: Variable,
    low_link: NodeId,
    high_link: NodeId,
}

/// A source of named boolean values against which a `Diagram` can be evaluated.
///
/// The trait is implemented for hash and tree maps keyed by `String` or `&str`, for slices
/// and arrays of `(&str, bool)` pairs, and for references to all of these.
pub trait Assignment {
    /// Value of the variable with the given `name`, or `None` if the variable is not assigned.
    fn value_of(&self, name: &str) -> Option<bool>;
}
