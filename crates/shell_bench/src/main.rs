mod cli;
mod report;

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{LevelFilter, error, info, warn};
use shell_sort::{GapSequence, PerformanceTracker, generate_input, is_sorted_non_decreasing};

use cli::{Cli, OutputFormat, fallback_notice};
use report::RunReport;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli, &mut io::stdout().lock(), &mut io::stderr()) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Runs one benchmark. Reports go to `out`; user-facing diagnostics go to
/// `diag` regardless of the log filter.
fn run<O: Write, D: Write>(cli: &Cli, out: &mut O, diag: &mut D) -> Result<()> {
    let (options, rejected) = cli.bench_options();
    if let Some(rejected) = &rejected {
        warn!("{rejected}");
        writeln!(diag, "{}", fallback_notice(rejected))?;
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(
        "size={} input={} gaps={} seed={seed}",
        cli.size, options.input, options.sequence
    );

    let mut data = generate_input(options.input, cli.size, seed);
    if cli.format == OutputFormat::Text {
        report::write_header(out, cli.size, options)?;
    }

    let mut tracker = PerformanceTracker::new();
    shell_sort::sort(Some(data.as_mut_slice()), &mut tracker, options.sequence)
        .context("sorting failed")?;
    let sorted = is_sorted_non_decreasing(&data);

    match cli.format {
        OutputFormat::Text => report::write_results(out, &tracker)?,
        OutputFormat::Json => {
            let report = RunReport::new(cli.size, options, seed, sorted, &tracker);
            let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
            writeln!(out, "{json}")?;
        }
    }

    check_sorted(&data, options.sequence)
}

fn check_sorted(data: &[i32], sequence: GapSequence) -> Result<()> {
    if !is_sorted_non_decreasing(data) {
        error!("output of {sequence} run is out of order");
        bail!("array is not sorted correctly");
    }
    Ok(())
}
