#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded random DNA for property-style tests
pub struct SequenceGenerator {
    rng: StdRng,
}

impl SequenceGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn random_dna(&mut self, length: usize) -> String {
        const BASES: [char; 4] = ['A', 'T', 'C', 'G'];
        (0..length)
            .map(|_| BASES[self.rng.gen_range(0..4)])
            .collect()
    }

    /// Random sequence built from a small motif alphabet, so kmers repeat
    pub fn repetitive_dna(&mut self, length: usize, motifs: &[&str]) -> String {
        let mut seq = String::with_capacity(length + 8);
        while seq.len() < length {
            let motif = motifs[self.rng.gen_range(0..motifs.len())];
            seq.push_str(motif);
        }
        seq.truncate(length);
        seq
    }
}
