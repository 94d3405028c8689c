use crate::debruijn::{Edge, Kmer, SequenceSource};
use crate::error::Result;
use crate::frequency::FrequencyMap;
use crate::reconstruct::{assemble, verify, Verdict};
use crate::render;
use crate::sequence::{validate_kmer_size, DnaSequence, DEFAULT_MAX_LENGTH};
use crate::tour::{EulerianTourFinder, Tour, TourConfig, DEFAULT_MAX_ATTEMPTS};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "dbg-assembler",
    version,
    about = "Break a DNA sequence into kmers and reassemble it from a de Bruijn graph"
)]
pub struct Args {
    /// DNA sequence (A, C, G, T, case-insensitive)
    pub sequence: String,

    /// Kmer size, smaller than the sequence length
    pub kmer_size: usize,

    /// Seed for the edge shuffler (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum number of reshuffle-and-traverse attempts
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Give up retrying after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Longest accepted sequence in bp
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
    pub max_length: usize,

    /// Write the de Bruijn graph to a DOT file
    #[arg(long)]
    pub dot: Option<String>,

    /// Write the full assembly report to a JSON file
    #[arg(long)]
    pub json: Option<String>,

    /// Print edges, frequencies and the tour; log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn tour_config(&self) -> TourConfig {
        TourConfig {
            max_attempts: self.max_attempts,
            deadline: self.timeout_ms.map(Duration::from_millis),
        }
    }
}

/// Result of one assembly run together with its diagnostics
#[derive(Clone, Debug, Serialize)]
pub struct AssemblyReport {
    pub sequence: DnaSequence,
    pub k: usize,
    pub seed: Option<u64>,
    pub attempts: usize,
    pub nodes: BTreeSet<Kmer>,
    pub edges: Vec<Edge>,
    pub shuffled_edges: Vec<Edge>,
    pub frequencies: FrequencyMap,
    pub tour: Tour,
    pub assembled: String,
    pub verdict: Verdict,
}

impl AssemblyReport {
    /// Multi-line dump of the graph and traversal, for verbose output
    pub fn diagnostics(&self) -> String {
        let nodes = self.nodes.iter().map(|n| n.as_str()).collect::<Vec<_>>().join(", ");
        format!(
            "Nodes: {{{}}}\nEdges: {}\nShuffled edges: {}\nFrequencies: {}\nTour: {}\nAttempts: {}",
            nodes,
            format_edges(&self.edges),
            format_edges(&self.shuffled_edges),
            self.frequencies,
            self.tour,
            self.attempts
        )
    }
}

fn format_edges(edges: &[Edge]) -> String {
    let parts = edges.iter().map(|e| e.to_string()).collect::<Vec<_>>();
    format!("[{}]", parts.join(", "))
}

/// Build, shuffle, traverse, reassemble and verify `sequence`
pub fn assemble_sequence<R: Rng + ?Sized>(
    sequence: &DnaSequence,
    k: usize,
    config: TourConfig,
    rng: &mut R,
) -> Result<AssemblyReport> {
    let source = SequenceSource::new(sequence.clone(), k)?;
    let outcome = EulerianTourFinder::new(config).find(&source, rng)?;

    let assembled = assemble(&outcome.tour)?;
    let verdict = verify(&assembled, sequence.as_str());

    Ok(AssemblyReport {
        sequence: sequence.clone(),
        k,
        seed: None,
        attempts: outcome.attempts,
        nodes: outcome.nodes,
        edges: outcome.edges,
        shuffled_edges: outcome.shuffled_edges,
        frequencies: outcome.frequencies,
        tour: outcome.tour,
        assembled,
        verdict,
    })
}

pub fn write_json_report(output_path: &str, report: &AssemblyReport) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn run_assembler(args: &Args) -> Result<AssemblyReport> {
    let sequence = DnaSequence::parse(&args.sequence, Some(args.max_length))?;
    validate_kmer_size(args.kmer_size, sequence.len())?;

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(seed, k = args.kmer_size, length = sequence.len(), "assembling sequence");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut report = assemble_sequence(&sequence, args.kmer_size, args.tour_config(), &mut rng)?;
    report.seed = Some(seed);

    if let Some(path) = &args.dot {
        render::write_dot(path, &report.nodes, &report.edges)?;
        info!("graph written to {}", path);
    }

    if args.verbose {
        println!("{}", report.diagnostics());
    }
    println!("{}", report.assembled);
    println!("Assembled sequence: {}", report.verdict);

    if let Some(path) = &args.json {
        write_json_report(path, &report)?;
        info!("report written to {}", path);
    }

    Ok(report)
}
