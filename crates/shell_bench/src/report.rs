use std::io::{self, Write};

use serde::Serialize;
use shell_sort::{MetricsSnapshot, PerformanceTracker};

use crate::cli::BenchOptions;

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub size: usize,
    pub input_kind: &'static str,
    pub gap_sequence: &'static str,
    pub seed: u64,
    pub sorted: bool,
    pub metrics: MetricsSnapshot,
}

impl RunReport {
    pub fn new(
        size: usize,
        options: BenchOptions,
        seed: u64,
        sorted: bool,
        tracker: &PerformanceTracker,
    ) -> Self {
        Self {
            size,
            input_kind: options.input.label(),
            gap_sequence: options.sequence.name(),
            seed,
            sorted,
            metrics: tracker.snapshot(),
        }
    }
}

pub fn write_header<W: Write>(out: &mut W, size: usize, options: BenchOptions) -> io::Result<()> {
    writeln!(out, "--- Starting Benchmark ---")?;
    writeln!(out, "Algorithm: ShellSort")?;
    writeln!(out, "Input Size: {size}")?;
    writeln!(out, "Input Type: {}", options.input.label().to_uppercase())?;
    writeln!(out, "Gap Sequence: {}", options.sequence.name().to_uppercase())
}

pub fn write_results<W: Write>(out: &mut W, tracker: &PerformanceTracker) -> io::Result<()> {
    writeln!(out, "--- Benchmark Complete ---")?;
    writeln!(out, "Results: {tracker}")
}
