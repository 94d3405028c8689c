use crate::debruijn::{Edge, Kmer};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Tracks how much of an edge list is still unconsumed.
///
/// Traversal calls `consume` for every edge it takes; the attempt succeeded
/// when `residual` drops to zero.
///
/// A zero residual only says every edge was consumed, not that the tour is a
/// trail. On a hand-built graph that is not Eulerian from the start, such as
/// AC→CA plus AC→CG, the traversal still consumes both edges and yields
/// `AC -> CG -> CA`. Graphs from `DeBruijnGraph::build` always admit a trail
/// from their first kmer, so this only affects `DeBruijnGraph::from_edges`.
pub trait ProgressOracle {
    fn consume(&mut self, edge: &Edge);

    fn residual(&self) -> usize;

    fn is_complete(&self) -> bool {
        self.residual() == 0
    }
}

/// Per-node count of edge endpoints.
///
/// A node is counted once per edge it appears in as source or target, twice
/// for a self-loop. This is a coarse progress signal, not a residual
/// out-degree: the sum is zero exactly when no tracked edge remains.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyMap {
    counts: BTreeMap<Kmer, usize>,
}

impl FrequencyMap {
    /// Count endpoint occurrences of every node in `nodes` across `edges`
    pub fn from_edges(edges: &[Edge], nodes: &BTreeSet<Kmer>) -> Self {
        let mut counts: BTreeMap<Kmer, usize> =
            nodes.iter().map(|node| (node.clone(), 0)).collect();

        for edge in edges {
            *counts.entry(edge.from.clone()).or_insert(0) += 1;
            *counts.entry(edge.to.clone()).or_insert(0) += 1;
        }

        FrequencyMap { counts }
    }

    pub fn get(&self, node: &Kmer) -> Option<usize> {
        self.counts.get(node).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Kmer, usize)> {
        self.counts.iter().map(|(k, &v)| (k, v))
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    fn decrement(&mut self, node: &Kmer) {
        if let Some(count) = self.counts.get_mut(node) {
            *count = count.saturating_sub(1);
        }
    }
}

impl ProgressOracle for FrequencyMap {
    fn consume(&mut self, edge: &Edge) {
        self.decrement(&edge.from);
        self.decrement(&edge.to);
    }

    fn residual(&self) -> usize {
        self.total()
    }
}

impl fmt::Display for FrequencyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (node, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", node, count)?;
        }
        write!(f, "}}")
    }
}
