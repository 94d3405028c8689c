use crate::debruijn::Edge;
use rand::seq::SliceRandom;
use rand::Rng;

/// Randomly permute `edges`, keeping the edge at index 0 where it is.
///
/// The first edge is the one GraphBuilder emitted for the start of the
/// sequence. Pinning it assumes the true start of the assembly is known; the
/// traversal starts from its source node.
pub fn shuffle_edges<R: Rng + ?Sized>(mut edges: Vec<Edge>, rng: &mut R) -> Vec<Edge> {
    if let Some(rest) = edges.get_mut(1..) {
        rest.shuffle(rng);
    }
    edges
}
