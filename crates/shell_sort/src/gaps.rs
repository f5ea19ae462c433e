use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use crate::error::ParseNameError;

/// Sedgewick's 1986 increments, ascending. Entries past the end of the table
/// are produced by [`sedgewick_gap`].
pub const SEDGEWICK_GAPS: [usize; 18] = [
    1, 5, 19, 41, 109, 209, 505, 929, 2_161, 3_905, 8_929, 16_001, 36_289, 64_769, 146_305,
    260_609, 587_521, 1_045_505,
];

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum GapSequence {
    /// `N/2, N/4, ..., 1`.
    Shell,
    /// `(3^k - 1) / 2`, starting from the first term of `h = 3h + 1` that is `>= N/3`.
    Knuth,
    /// Sedgewick's 1986 sequence.
    #[default]
    Sedgewick,
}

impl GapSequence {
    pub const ALL: [GapSequence; 3] = [
        GapSequence::Shell,
        GapSequence::Knuth,
        GapSequence::Sedgewick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Shell => "shell",
            Self::Knuth => "knuth",
            Self::Sedgewick => "sedgewick",
        }
    }

    /// Gaps used to sort a slice of length `len`, largest first.
    ///
    /// The sequence is strictly decreasing and ends with `1`, or is empty when
    /// `len <= 1`.
    pub fn gaps(self, len: usize) -> Gaps {
        let state = if len <= 1 {
            GapState::Done
        } else {
            match self {
                Self::Shell => GapState::Halving { gap: len / 2 },
                Self::Knuth => GapState::Knuth {
                    gap: knuth_start(len),
                },
                Self::Sedgewick => GapState::Sedgewick {
                    remaining: sedgewick_start(len),
                },
            }
        };
        Gaps { state }
    }
}

impl fmt::Display for GapSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GapSequence {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GapSequence::ALL
            .into_iter()
            .find(|seq| seq.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseNameError::new("gap sequence", s))
    }
}

/// Lazy gap iterator returned by [`GapSequence::gaps`].
#[derive(Clone, Debug)]
pub struct Gaps {
    state: GapState,
}

#[derive(Clone, Copy, Debug)]
enum GapState {
    Done,
    Halving { gap: usize },
    Knuth { gap: usize },
    // Number of Sedgewick terms still to yield; the next one is at index `remaining - 1`.
    Sedgewick { remaining: usize },
}

impl Iterator for Gaps {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match &mut self.state {
            GapState::Done => None,
            GapState::Halving { gap } => {
                let current = *gap;
                if current == 0 {
                    self.state = GapState::Done;
                    return None;
                }
                *gap = current / 2;
                Some(current)
            }
            GapState::Knuth { gap } => {
                let current = *gap;
                if current == 0 {
                    self.state = GapState::Done;
                    return None;
                }
                *gap = (current - 1) / 3;
                Some(current)
            }
            GapState::Sedgewick { remaining } => {
                if *remaining == 0 {
                    self.state = GapState::Done;
                    return None;
                }
                *remaining -= 1;
                sedgewick_gap(*remaining)
            }
        }
    }
}

impl FusedIterator for Gaps {}

fn knuth_start(len: usize) -> usize {
    let mut h = 1;
    while h < len / 3 {
        h = 3 * h + 1;
    }
    h
}

/// Index of the first Sedgewick term `>= len`, which is also the number of
/// terms below `len`.
fn sedgewick_start(len: usize) -> usize {
    let mut k = 0;
    while let Some(gap) = sedgewick_gap(k) {
        if gap >= len {
            break;
        }
        k += 1;
    }
    k
}

/// The `k`-th term of Sedgewick's 1986 sequence, or `None` if it does not fit
/// in `usize`.
///
/// Even `k`: `9 * (4^(k/2) - 2^(k/2)) + 1`. Odd `k`: `8 * 2^k - 6 * 2^((k+1)/2) + 1`.
pub fn sedgewick_gap(k: usize) -> Option<usize> {
    if let Some(&gap) = SEDGEWICK_GAPS.get(k) {
        return Some(gap);
    }

    let k = u32::try_from(k).ok()?;
    if k % 2 == 0 {
        let p = 2_usize.checked_pow(k / 2)?;
        let q = p.checked_mul(p)?;
        (q - p).checked_mul(9)?.checked_add(1)
    } else {
        let hi = 2_usize.checked_pow(k)?.checked_mul(8)?;
        let lo = 2_usize.checked_pow(k.div_ceil(2))?.checked_mul(6)?;
        (hi - lo).checked_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(seq: GapSequence, len: usize) -> Vec<usize> {
        seq.gaps(len).collect()
    }

    #[test]
    fn gaps_for_ten_elements() {
        assert_eq!(collect(GapSequence::Shell, 10), vec![5, 2, 1]);
        assert_eq!(collect(GapSequence::Knuth, 10), vec![4, 1]);
        assert_eq!(collect(GapSequence::Sedgewick, 10), vec![5, 1]);
    }

    #[test]
    fn tiny_lengths_have_no_gaps() {
        for seq in GapSequence::ALL {
            assert!(collect(seq, 0).is_empty(), "{seq}");
            assert!(collect(seq, 1).is_empty(), "{seq}");
            assert_eq!(collect(seq, 2), vec![1], "{seq}");
        }
    }

    #[test]
    fn knuth_known_lengths() {
        assert_eq!(collect(GapSequence::Knuth, 3), vec![1]);
        assert_eq!(collect(GapSequence::Knuth, 12), vec![4, 1]);
        assert_eq!(collect(GapSequence::Knuth, 14), vec![4, 1]);
        assert_eq!(collect(GapSequence::Knuth, 15), vec![13, 4, 1]);
        assert_eq!(collect(GapSequence::Knuth, 100), vec![40, 13, 4, 1]);
        assert_eq!(collect(GapSequence::Knuth, 1_000), vec![364, 121, 40, 13, 4, 1]);
    }

    #[test]
    fn sedgewick_stops_below_len() {
        assert_eq!(collect(GapSequence::Sedgewick, 5), vec![1]);
        assert_eq!(collect(GapSequence::Sedgewick, 6), vec![5, 1]);
        assert_eq!(collect(GapSequence::Sedgewick, 110), vec![109, 41, 19, 5, 1]);
        assert_eq!(
            collect(GapSequence::Sedgewick, 10_000),
            vec![8_929, 3_905, 2_161, 929, 505, 209, 109, 41, 19, 5, 1]
        );
    }

    #[test]
    fn sedgewick_formula_matches_table() {
        for (k, &gap) in SEDGEWICK_GAPS.iter().enumerate() {
            let k = k as u32;
            let computed = if k % 2 == 0 {
                9 * (4_usize.pow(k / 2) - 2_usize.pow(k / 2)) + 1
            } else {
                8 * 2_usize.pow(k) - 6 * 2_usize.pow(k.div_ceil(2)) + 1
            };
            assert_eq!(computed, gap, "k={k}");
        }
    }

    #[test]
    fn sedgewick_extends_past_table() {
        assert_eq!(sedgewick_gap(18), Some(2_354_689));
        assert_eq!(sedgewick_gap(19), Some(4_188_161));

        let gaps = collect(GapSequence::Sedgewick, 3_000_000);
        assert_eq!(gaps[0], 2_354_689);
        assert_eq!(gaps[1], 1_045_505);
        assert_eq!(*gaps.last().unwrap(), 1);
    }

    #[test]
    fn sedgewick_huge_len_terminates() {
        let gaps = collect(GapSequence::Sedgewick, usize::MAX);
        assert!(!gaps.is_empty());
        assert_eq!(*gaps.last().unwrap(), 1);
        assert!(gaps.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn all_sequences_strictly_decrease_to_one() {
        for seq in GapSequence::ALL {
            for len in [2_usize, 3, 7, 64, 1_000, 65_537, 2_000_000] {
                let gaps = collect(seq, len);
                assert_eq!(gaps.last(), Some(&1), "{seq} len={len}");
                assert!(gaps.windows(2).all(|w| w[0] > w[1]), "{seq} len={len}");
                assert!(gaps[0] < len, "{seq} len={len}");
            }
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!("KNUTH".parse::<GapSequence>(), Ok(GapSequence::Knuth));
        assert_eq!("Shell".parse::<GapSequence>(), Ok(GapSequence::Shell));
        assert_eq!("sedgewick".parse::<GapSequence>(), Ok(GapSequence::Sedgewick));
        assert!("ciura".parse::<GapSequence>().is_err());
        assert_eq!(GapSequence::default(), GapSequence::Sedgewick);
    }
}
