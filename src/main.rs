//! resfind - Resistor Network Finder
//!
//! Finds series/parallel combinations of stock resistors that hit a target
//! resistance.
//!
//! # Usage
//!
//! ```bash
//! resfind 150 100:3 220:2 --tolerance 10 --prioritize-fewer --output-dir circuits
//! ```

use std::path::PathBuf;

use clap::Parser;
use resistor_finder::{
    error::{ResistorError, Result},
    find_best_circuits_with, parse_resistance, report, SearchConfig, Stock,
    DEFAULT_MAX_COMPONENTS, DEFAULT_MAX_PARALLEL_BRANCHES,
};
use tracing_subscriber::EnvFilter;

/// Find optimal resistor circuits for a target resistance
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Target resistance in ohms (SI suffixes allowed, e.g. 4.7k)
    #[arg(value_name = "TARGET", value_parser = parse_target)]
    target: f64,

    /// Available resistors as 'value:count', e.g. '100:2 4.7k:3'
    #[arg(value_name = "VALUE:COUNT", required = true)]
    resistors: Vec<String>,

    /// Tolerance percentage
    #[arg(short, long, default_value_t = 5.0)]
    tolerance: f64,

    /// Maximum number of results to display
    #[arg(short, long, default_value_t = 5)]
    max_results: usize,

    /// Prioritize circuits with fewer components
    #[arg(short, long)]
    prioritize_fewer: bool,

    /// Directory to save one report file per circuit
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Maximum resistors per circuit
    #[arg(long, default_value_t = DEFAULT_MAX_COMPONENTS)]
    max_components: usize,

    /// Maximum branches in any parallel group
    #[arg(long, default_value_t = DEFAULT_MAX_PARALLEL_BRANCHES)]
    max_branches: usize,
}

fn parse_target(text: &str) -> std::result::Result<f64, String> {
    parse_resistance(text).ok_or_else(|| {
        ResistorError::InvalidValue {
            text: text.to_string(),
        }
        .to_string()
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Parse the stock list
    let stock = Stock::parse(args.resistors.as_slice())?;

    let config = SearchConfig::default()
        .with_tolerance_percent(args.tolerance)
        .with_max_results(args.max_results)
        .with_prioritize_fewer_components(args.prioritize_fewer)
        .with_max_components(args.max_components)
        .with_max_parallel_branches(args.max_branches);

    print!("{}", report::render_header(&stock, args.target, &config));
    println!();

    // Search
    let best = find_best_circuits_with(&stock, args.target, &config)?;

    if best.is_empty() {
        println!("No circuits found within the specified tolerance.");
        return Ok(());
    }

    println!("Found {} circuits within tolerance:", best.len());
    println!();

    for (i, ranked) in best.iter().enumerate() {
        let index = i + 1;
        let text = report::render_circuit(index, ranked, args.target);
        println!("{}", text);

        if let Some(dir) = &args.output_dir {
            let path = report::save_report(dir, index, &text)?;
            println!("Saved circuit {} to {}", index, path.display());
        }
    }

    if let Some(dir) = &args.output_dir {
        println!();
        println!("All circuits have been saved to the directory: {}", dir.display());
    }

    Ok(())
}
