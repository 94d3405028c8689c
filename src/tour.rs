/// Eulerian trail search over a shuffled de Bruijn multigraph
///
/// Each attempt rebuilds the graph, reshuffles its edges and walks it with an
/// explicit-stack Hierholzer traversal. Attempts repeat until every edge is
/// consumed or the retry budget runs out.
use crate::debruijn::{Edge, GraphSource, Kmer};
use crate::error::{AssemblyError, Result};
use crate::frequency::{FrequencyMap, ProgressOracle};
use crate::shuffle::shuffle_edges;
use rand::Rng;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap, VecDeque};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Chooses the node a traversal starts from
pub trait StartSelector {
    fn select_start(&self, edges: &[Edge]) -> Option<Kmer>;
}

/// Start from the source of the edge pinned at index 0 by the shuffler
#[derive(Clone, Copy, Debug, Default)]
pub struct PinnedFirstEdge;

impl StartSelector for PinnedFirstEdge {
    fn select_start(&self, edges: &[Edge]) -> Option<Kmer> {
        edges.first().map(|edge| edge.from.clone())
    }
}

/// Ordered list of visited nodes; one longer than the number of edges walked
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tour {
    nodes: Vec<Kmer>,
}

impl Tour {
    pub fn new(nodes: Vec<Kmer>) -> Self {
        Tour { nodes }
    }

    pub fn nodes(&self) -> &[Kmer] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}

/// Walk `edges` from `start`, consuming each edge at most once.
///
/// Outgoing edges of a node are taken in the order they appear in `edges`.
/// A node is emitted once it has no outgoing edge left, and the emitted
/// sequence is reversed at the end, which gives the same tour as a recursive
/// descent that prepends nodes on return. Every consumed edge is reported to
/// `oracle`. Edges not reachable from `start` are left untouched.
pub fn traverse<'a, O: ProgressOracle>(start: &'a Kmer, edges: &'a [Edge], oracle: &mut O) -> Tour {
    let mut outgoing: HashMap<&Kmer, VecDeque<&Edge>> = HashMap::new();
    for edge in edges {
        outgoing.entry(&edge.from).or_default().push_back(edge);
    }

    let mut stack: Vec<&Kmer> = vec![start];
    let mut finished: Vec<Kmer> = Vec::with_capacity(edges.len() + 1);

    while let Some(&current) = stack.last() {
        match outgoing.get_mut(current).and_then(|queue| queue.pop_front()) {
            Some(edge) => {
                oracle.consume(edge);
                stack.push(&edge.to);
            }
            None => {
                finished.push(current.clone());
                stack.pop();
            }
        }
    }

    finished.reverse();
    Tour::new(finished)
}

/// Limits on the retry loop
#[derive(Clone, Debug)]
pub struct TourConfig {
    pub max_attempts: usize,
    pub deadline: Option<Duration>,
}

impl Default for TourConfig {
    fn default() -> Self {
        TourConfig {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            deadline: None,
        }
    }
}

/// Everything produced by the successful attempt
#[derive(Clone, Debug, Serialize)]
pub struct TourOutcome {
    pub attempts: usize,
    pub nodes: BTreeSet<Kmer>,
    pub edges: Vec<Edge>,
    pub shuffled_edges: Vec<Edge>,
    /// Frequencies over the full shuffled list, before traversal
    pub frequencies: FrequencyMap,
    pub tour: Tour,
}

pub struct EulerianTourFinder<S = PinnedFirstEdge> {
    config: TourConfig,
    start: S,
}

impl EulerianTourFinder<PinnedFirstEdge> {
    pub fn new(config: TourConfig) -> Self {
        EulerianTourFinder { config, start: PinnedFirstEdge }
    }
}

impl<S: StartSelector> EulerianTourFinder<S> {
    pub fn with_start_selector(config: TourConfig, start: S) -> Self {
        EulerianTourFinder { config, start }
    }

    /// Rebuild, reshuffle and traverse until one attempt consumes every edge.
    ///
    /// Returns `NoEulerianTrail` once `max_attempts` attempts have failed and
    /// `DeadlineExceeded` if the deadline passes between attempts.
    pub fn find<G, R>(&self, source: &G, rng: &mut R) -> Result<TourOutcome>
    where
        G: GraphSource + ?Sized,
        R: Rng + ?Sized,
    {
        let started = Instant::now();
        let mut residual = 0;

        for attempt in 1..=self.config.max_attempts {
            if let Some(deadline) = self.config.deadline {
                let elapsed = started.elapsed();
                if elapsed >= deadline {
                    return Err(AssemblyError::DeadlineExceeded { attempts: attempt - 1, elapsed });
                }
            }

            let graph = source.build_graph()?;
            let k = graph.k();
            let (nodes, edges) = graph.into_parts();
            let shuffled_edges = shuffle_edges(edges.clone(), rng);
            let frequencies = FrequencyMap::from_edges(&shuffled_edges, &nodes);
            let start = self
                .start
                .select_start(&shuffled_edges)
                .ok_or(AssemblyError::NoStartNode)?;

            debug!(
                attempt,
                k,
                edges = shuffled_edges.len(),
                nodes = nodes.len(),
                start = %start,
                "starting traversal"
            );

            let mut working = frequencies.clone();
            let tour = traverse(&start, &shuffled_edges, &mut working);
            residual = working.residual();

            if residual == 0 {
                info!(attempt, tour_len = tour.len(), "all edges consumed");
                return Ok(TourOutcome {
                    attempts: attempt,
                    nodes,
                    edges,
                    shuffled_edges,
                    frequencies,
                    tour,
                });
            }

            warn!(attempt, residual, "traversal left edges unconsumed, reshuffling");
        }

        Err(AssemblyError::NoEulerianTrail {
            attempts: self.config.max_attempts,
            residual,
        })
    }
}
