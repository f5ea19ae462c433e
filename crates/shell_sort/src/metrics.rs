use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;

/// Operation counters and wall-clock timer for a single sort run.
///
/// Counters only ever grow between two calls to [`reset`](Self::reset). The
/// timer reports [`Duration::ZERO`] until both marks have been recorded.
#[derive(Clone, Debug, Default)]
pub struct PerformanceTracker {
    comparisons: u64,
    swaps_or_moves: u64,
    array_accesses: u64,
    start: Option<Instant>,
    end: Option<Instant>,
}

impl PerformanceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn start_timer(&mut self) {
        self.start = Some(Instant::now());
    }

    pub fn stop_timer(&mut self) {
        self.end = Some(Instant::now());
    }

    #[inline]
    pub fn increment_comparisons(&mut self) {
        self.comparisons += 1;
    }

    #[inline]
    pub fn increment_swaps_or_moves(&mut self) {
        self.swaps_or_moves += 1;
    }

    #[inline]
    pub fn increment_array_accesses(&mut self, count: u64) {
        self.array_accesses += count;
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn swaps_or_moves(&self) -> u64 {
        self.swaps_or_moves
    }

    pub fn array_accesses(&self) -> u64 {
        self.array_accesses
    }

    pub fn timer_started(&self) -> bool {
        self.start.is_some()
    }

    pub fn timer_stopped(&self) -> bool {
        self.end.is_some()
    }

    pub fn elapsed(&self) -> Duration {
        match (self.start, self.end) {
            (Some(start), Some(end)) => end.saturating_duration_since(start),
            _ => Duration::ZERO,
        }
    }

    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1_000.0
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            comparisons: self.comparisons,
            swaps_or_moves: self.swaps_or_moves,
            array_accesses: self.array_accesses,
            elapsed_ms: self.elapsed_millis(),
        }
    }
}

impl fmt::Display for PerformanceTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Time: {:.4} ms, Comparisons: {}, Swaps/Moves: {}, Accesses: {}",
            self.elapsed_millis(),
            self.comparisons,
            self.swaps_or_moves,
            self.array_accesses,
        )
    }
}

/// Plain copy of the tracker's readings, for machine-readable reports.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub comparisons: u64,
    pub swaps_or_moves: u64,
    pub array_accesses: u64,
    pub elapsed_ms: f64,
}
