//! Reassembly of DNA sequences from their kmers.
//!
//! A sequence is cut into overlapping kmers, the kmers become the nodes of a
//! de Bruijn multigraph, and an Eulerian trail through that graph is folded
//! back into a sequence which is then compared with the input.

pub mod assembler;
pub mod debruijn;
pub mod error;
pub mod frequency;
pub mod reconstruct;
pub mod render;
pub mod sequence;
pub mod shuffle;
pub mod tour;

pub use assembler::{assemble_sequence, run_assembler, Args, AssemblyReport};
pub use debruijn::{DeBruijnGraph, Edge, GraphSource, Kmer, SequenceSource};
pub use error::{AssemblyError, Result};
pub use frequency::{FrequencyMap, ProgressOracle};
pub use reconstruct::{assemble, verify, Verdict};
pub use sequence::{validate_kmer_size, DnaSequence};
pub use shuffle::shuffle_edges;
pub use tour::{traverse, EulerianTourFinder, PinnedFirstEdge, StartSelector, Tour, TourConfig};
