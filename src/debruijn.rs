/// De Bruijn graph construction from a sequence and a kmer size
use crate::error::{AssemblyError, Result};
use crate::sequence::{validate_kmer_size, DnaSequence};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A fixed-length substring of the input; also the identity of a graph node
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Kmer(String);

impl Kmer {
    pub fn new(s: impl Into<String>) -> Self {
        Kmer(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Last base of the kmer. Kmers are never empty inside a graph.
    pub fn last_base(&self) -> Option<char> {
        self.0.chars().last()
    }

    /// True if the last k-1 bases of `self` are the first k-1 bases of `next`
    pub fn overlaps(&self, next: &Kmer) -> bool {
        let k = self.len();
        k > 0 && next.len() == k && self.0.as_bytes()[1..] == next.0.as_bytes()[..k - 1]
    }
}

impl fmt::Display for Kmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Directed edge between two overlapping kmers.
///
/// `offset` is the sequence position at which the edge was emitted. Two edges
/// with the same endpoints are distinct edges of the multigraph.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub offset: usize,
    pub from: Kmer,
    pub to: Kmer,
}

impl Edge {
    pub fn new(offset: usize, from: Kmer, to: Kmer) -> Result<Self> {
        if !from.overlaps(&to) {
            return Err(AssemblyError::NonOverlappingEdge {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        Ok(Edge { offset, from, to })
    }

    /// Endpoints without the emission offset, for value comparisons
    pub fn endpoints(&self) -> (&Kmer, &Kmer) {
        (&self.from, &self.to)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.from, self.to)
    }
}

/// Node set plus ordered edge list of a de Bruijn multigraph
#[derive(Clone, Debug)]
pub struct DeBruijnGraph {
    k: usize,
    nodes: BTreeSet<Kmer>,
    edges: Vec<Edge>,
}

impl DeBruijnGraph {
    /// Slide a window of `k` over `sequence`, one edge per step.
    ///
    /// Edges come out in left-to-right order, so `edges()[0]` is the edge
    /// starting at the first kmer of the sequence.
    pub fn build(sequence: &DnaSequence, k: usize) -> Result<Self> {
        validate_kmer_size(k, sequence.len())?;

        let seq = sequence.as_str();
        let edge_count = seq.len() - k;
        let mut edges = Vec::with_capacity(edge_count);
        let mut nodes = BTreeSet::new();

        for i in 0..edge_count {
            let from = Kmer::new(&seq[i..i + k]);
            let to = Kmer::new(&seq[i + 1..i + k + 1]);
            nodes.insert(from.clone());
            nodes.insert(to.clone());
            edges.push(Edge { offset: i, from, to });
        }

        Ok(DeBruijnGraph { k, nodes, edges })
    }

    /// Assemble a graph from explicit edges; every kmer must have length `k`
    pub fn from_edges(k: usize, edges: Vec<Edge>) -> Result<Self> {
        let mut nodes = BTreeSet::new();
        for edge in &edges {
            if edge.from.len() != k || !edge.from.overlaps(&edge.to) {
                return Err(AssemblyError::NonOverlappingEdge {
                    from: edge.from.to_string(),
                    to: edge.to.to_string(),
                });
            }
            nodes.insert(edge.from.clone());
            nodes.insert(edge.to.clone());
        }
        Ok(DeBruijnGraph { k, nodes, edges })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn nodes(&self) -> &BTreeSet<Kmer> {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn into_parts(self) -> (BTreeSet<Kmer>, Vec<Edge>) {
        (self.nodes, self.edges)
    }
}

/// Multiplicity of every (from, to) pair, ignoring emission offsets
pub fn edge_multiset(edges: &[Edge]) -> BTreeMap<(Kmer, Kmer), usize> {
    let mut counts = BTreeMap::new();
    for edge in edges {
        *counts.entry((edge.from.clone(), edge.to.clone())).or_insert(0) += 1;
    }
    counts
}

/// Produces a fresh graph for every traversal attempt
pub trait GraphSource {
    fn build_graph(&self) -> Result<DeBruijnGraph>;
}

/// Rebuilds the graph from a sequence and kmer size on every call
#[derive(Clone, Debug)]
pub struct SequenceSource {
    pub sequence: DnaSequence,
    pub k: usize,
}

impl SequenceSource {
    pub fn new(sequence: DnaSequence, k: usize) -> Result<Self> {
        validate_kmer_size(k, sequence.len())?;
        Ok(SequenceSource { sequence, k })
    }
}

impl GraphSource for SequenceSource {
    fn build_graph(&self) -> Result<DeBruijnGraph> {
        DeBruijnGraph::build(&self.sequence, self.k)
    }
}

impl GraphSource for DeBruijnGraph {
    fn build_graph(&self) -> Result<DeBruijnGraph> {
        Ok(self.clone())
    }
}
