/// Input validation for DNA sequences and kmer sizes
use crate::error::{AssemblyError, Result};
use serde::Serialize;
use std::fmt;

/// Longest sequence accepted by default, in bp
pub const DEFAULT_MAX_LENGTH: usize = 1000;

/// A validated, upper-cased DNA sequence over {A,C,G,T}
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DnaSequence {
    data: String,
}

impl DnaSequence {
    /// Validate `raw` and normalize it to upper case.
    ///
    /// Rejects empty input, characters outside `ACGTacgt`, and sequences
    /// longer than `max_length` when a limit is given.
    pub fn parse(raw: &str, max_length: Option<usize>) -> Result<Self> {
        if raw.is_empty() {
            return Err(AssemblyError::EmptySequence);
        }

        if let Some((position, base)) = raw
            .chars()
            .enumerate()
            .find(|(_, c)| !matches!(c, 'A' | 'C' | 'G' | 'T' | 'a' | 'c' | 'g' | 't'))
        {
            return Err(AssemblyError::InvalidBase { position, base });
        }

        if let Some(max) = max_length {
            if raw.len() > max {
                return Err(AssemblyError::SequenceTooLong { length: raw.len(), max });
            }
        }

        Ok(Self { data: raw.to_ascii_uppercase() })
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Display for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

/// Check that `k` is positive and strictly smaller than the sequence length
pub fn validate_kmer_size(k: usize, length: usize) -> Result<()> {
    if k == 0 || k >= length {
        return Err(AssemblyError::InvalidKmerSize { k, length });
    }
    Ok(())
}
