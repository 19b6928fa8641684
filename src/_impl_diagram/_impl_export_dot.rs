use crate::*;
use std::io::Write;

/// `.dot` export procedure for `Diagram`s.
impl Diagram {
    /// Output this `Diagram` as a `.dot` string into the given `output` writer.
    ///
    /// Node labels use the variable names of this diagram's `VariableOrder`.
    ///
    /// If `zero_pruned` is true, edges leading to `zero` are not shown. This can greatly
    /// simplify the graph without losing information.
    pub fn write_as_dot_string(
        &self,
        output: &mut dyn Write,
        zero_pruned: bool,
    ) -> Result<(), std::io::Error> {
        write_diagram_as_dot(output, self, zero_pruned)
    }

    /// Convert this `Diagram` to a `.dot` string.
    ///
    /// If `zero_pruned` is true, edges leading to `zero` are not shown. This can greatly
    /// simplify the graph without losing information.
    pub fn to_dot_string(&self, zero_pruned: bool) -> String {
        let mut buffer: Vec<u8> = Vec::new();
        write_diagram_as_dot(&mut buffer, self, zero_pruned)
            .expect("Cannot write diagram to .dot string.");
        String::from_utf8(buffer).expect("Invalid UTF formatting in .dot string.")
    }
}

/// Write given `Diagram` into the output buffer as `.dot` graph. If `zero_pruned` is true,
/// the output will only contain edges leading to the `1` terminal node (this is often much
/// easier to read than the full graph while preserving all the information).
fn write_diagram_as_dot(
    output: &mut dyn Write,
    diagram: &Diagram,
    zero_pruned: bool,
) -> Result<(), std::io::Error> {
    writeln!(output, "digraph G {{")?;
    writeln!(
        output,
        "init__ [label=\"\", style=invis, height=0, width=0];"
    )?;
    writeln!(output, "init__ -> {};", diagram.root_pointer())?;

    // Terminal nodes. The zero terminal is kept when it is the root itself.
    if !zero_pruned || diagram.is_false() {
        writeln!(
            output,
            "0 [shape=box, label=\"0\", style=filled, height=0.3, width=0.3];"
        )?;
    }
    writeln!(
        output,
        "1 [shape=box, label=\"1\", style=filled, height=0.3, width=0.3];"
    )?;

    // Decision nodes.
    for node_id in diagram.pointers().skip(2) {
        let var_name = diagram.variables().name_of(diagram.var_of(node_id));
        writeln!(output, "{}[label=\"{}\"];", node_id, escape_label(var_name))?;
        let high_link = diagram.high_link_of(node_id);
        if !zero_pruned || !high_link.is_zero() {
            writeln!(output, "{} -> {} [style=filled];", node_id, high_link)?;
        }
        let low_link = diagram.low_link_of(node_id);
        if !zero_pruned || !low_link.is_zero() {
            writeln!(output, "{} -> {} [style=dotted];", node_id, low_link)?;
        }
    }
    writeln!(output, "}}")?;
    Ok(())
}

/// **(internal)** Variable names are arbitrary strings, so quotes and backslashes are escaped.
fn escape_label(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}
