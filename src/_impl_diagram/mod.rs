/// **(internal)** Evaluation of `Diagram`s against named assignments.
pub mod _impl_evaluate;

/// **(internal)** Simple export functions for printing `Diagram`s as `.dot` files.
pub mod _impl_export_dot;

/// **(internal)** Implementation of some basic internal utility methods for `Diagram`s,
/// together with raw node table conversion and validation.
pub mod _impl_util;
