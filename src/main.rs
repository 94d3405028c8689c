use clap::Parser;
use dbg_assembler::Args;

fn main() {
    let args = Args::parse();

    // RUST_LOG wins; otherwise info, or debug with --verbose
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = dbg_assembler::run_assembler(&args) {
        eprintln!("dbg-assembler: error: {}", e);
        std::process::exit(1);
    }
}
