//! Shell sort over `i32` slices with selectable gap sequences, instrumented
//! with a [`PerformanceTracker`] that counts comparisons, moves and element
//! accesses of each run.

mod engine;
mod error;
mod gaps;
pub mod generator;
mod metrics;

pub use engine::{sort, sort_slice};
pub use error::{ParseNameError, SortError};
pub use gaps::{GapSequence, Gaps, SEDGEWICK_GAPS, sedgewick_gap};
pub use generator::{InputKind, generate_input};
pub use metrics::{MetricsSnapshot, PerformanceTracker};

#[inline]
pub fn is_sorted_non_decreasing(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
