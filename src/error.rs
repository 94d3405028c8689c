use std::time::Duration;
use thiserror::Error;

/// Errors produced while validating input or assembling a sequence
#[derive(Error, Debug)]
pub enum AssemblyError {
    #[error("empty sequence")]
    EmptySequence,
    #[error("non-standard nucleotide {base:?} at position {position}")]
    InvalidBase { position: usize, base: char },
    #[error("sequence of {length} bp exceeds the maximum of {max} bp")]
    SequenceTooLong { length: usize, max: usize },
    #[error("kmer size {k} must be a positive integer smaller than the sequence length {length}")]
    InvalidKmerSize { k: usize, length: usize },
    #[error("edge {from} -> {to} does not overlap in k-1 characters")]
    NonOverlappingEdge { from: String, to: String },
    #[error("graph has no edge to start a traversal from")]
    NoStartNode,
    #[error("no Eulerian trail found after {attempts} attempts ({residual} edge endpoints left)")]
    NoEulerianTrail { attempts: usize, residual: usize },
    #[error("no Eulerian trail found before the {elapsed:?} deadline ({attempts} attempts)")]
    DeadlineExceeded { attempts: usize, elapsed: Duration },
    #[error("cannot assemble a sequence from an empty tour")]
    EmptyTour,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AssemblyError>;
