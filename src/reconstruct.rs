use crate::error::{AssemblyError, Result};
use crate::tour::Tour;
use serde::Serialize;
use std::fmt;

/// Fold a tour into a superstring: the first kmer in full, then the last base
/// of every following kmer.
pub fn assemble(tour: &Tour) -> Result<String> {
    let (first, rest) = tour.nodes().split_first().ok_or(AssemblyError::EmptyTour)?;

    let mut superstring = String::with_capacity(first.len() + rest.len());
    superstring.push_str(first.as_str());
    superstring.extend(rest.iter().filter_map(|kmer| kmer.last_base()));
    Ok(superstring)
}

/// Whether the assembly reproduced the input byte for byte.
///
/// `NotIdentical` is not a failure: graphs with repeated kmers admit several
/// valid trails and only one of them spells the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Identical,
    NotIdentical,
}

impl Verdict {
    pub fn is_identical(self) -> bool {
        self == Verdict::Identical
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Identical => f.write_str("identical"),
            Verdict::NotIdentical => f.write_str("not identical"),
        }
    }
}

pub fn verify(assembled: &str, original: &str) -> Verdict {
    if assembled.as_bytes() == original.as_bytes() {
        Verdict::Identical
    } else {
        Verdict::NotIdentical
    }
}
