//! Writes a random contact directory to stdout in the format `tnine` reads.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tnine::core::types::{DEFAULT_CAPACITY, MAX_LINE_WIDTH};
use tnine::generator::{generate_records, write_records};

#[derive(Debug, Parser)]
#[command(name = "tnine-gen", author, version, about = "Generate a random tnine directory", long_about = None)]
struct Args {
    /// Number of contacts to generate
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    records: usize,

    /// Seed for a reproducible directory
    #[arg(long)]
    seed: Option<u64>,

    /// Longest name or number, in characters
    #[arg(long, default_value_t = MAX_LINE_WIDTH)]
    max_width: usize,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let result = generate_records(&mut rng, args.records, args.max_width).and_then(|records| {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        write_records(&mut out, &records)?;
        out.flush()?;
        Ok(())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.kind.exit_code())
        }
    }
}
