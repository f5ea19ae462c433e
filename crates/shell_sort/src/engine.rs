use log::{debug, trace};

use crate::error::SortError;
use crate::gaps::GapSequence;
use crate::metrics::PerformanceTracker;

/// Sorts `data` in place, failing if it is absent.
///
/// The tracker is left untouched on error.
pub fn sort(
    data: Option<&mut [i32]>,
    tracker: &mut PerformanceTracker,
    sequence: GapSequence,
) -> Result<(), SortError> {
    let data = data.ok_or(SortError::InvalidInput("input array cannot be absent"))?;
    sort_slice(data, tracker, sequence);
    Ok(())
}

/// Sorts `data` ascending with one gapped insertion pass per gap of `sequence`.
///
/// `tracker` is reset first and holds the counts and timing of this run on
/// return.
pub fn sort_slice(data: &mut [i32], tracker: &mut PerformanceTracker, sequence: GapSequence) {
    tracker.reset();
    tracker.start_timer();

    let len = data.len();
    debug!("shell sort: len={len} gaps={sequence}");
    for gap in sequence.gaps(len) {
        trace!("pass gap={gap}");
        gapped_insertion_pass(data, gap, tracker);
    }

    tracker.stop_timer();
    debug!("shell sort done: {tracker}");
}

fn gapped_insertion_pass(data: &mut [i32], gap: usize, tracker: &mut PerformanceTracker) {
    let len = data.len();
    for i in gap..len {
        tracker.increment_array_accesses(1);
        let key = data[i];
        let mut j = i;
        while j >= gap {
            tracker.increment_comparisons();
            tracker.increment_array_accesses(1);
            let prev = data[j - gap];
            if prev <= key {
                break;
            }
            tracker.increment_array_accesses(2);
            tracker.increment_swaps_or_moves();
            data[j] = prev;
            j -= gap;
        }
        // No write-back when the key never moved.
        if j != i {
            tracker.increment_array_accesses(1);
            data[j] = key;
        }
    }
}
