/// DOT export of a de Bruijn graph for inspection with graphviz
use crate::debruijn::{Edge, Kmer};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Write `nodes` and `edges` as a left-to-right digraph. Parallel edges are
/// kept, one statement each.
pub fn write_dot_to<W: Write>(writer: &mut W, nodes: &BTreeSet<Kmer>, edges: &[Edge]) -> io::Result<()> {
    writeln!(writer, "digraph de_Bruijn_graph {{")?;
    writeln!(writer, "\trankdir=LR;")?;
    writeln!(writer, "\tsize=\"15\";")?;

    for node in nodes {
        writeln!(writer, "\t\"{}\";", node)?;
    }
    for edge in edges {
        writeln!(writer, "\t\"{}\" -> \"{}\";", edge.from, edge.to)?;
    }

    writeln!(writer, "}}")
}

pub fn write_dot(output_path: &str, nodes: &BTreeSet<Kmer>, edges: &[Edge]) -> io::Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_dot_to(&mut writer, nodes, edges)?;
    writer.flush()
}
