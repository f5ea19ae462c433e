use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::ParseNameError;

// Random keys are drawn from `0..size * RANDOM_RANGE_FACTOR`.
const RANDOM_RANGE_FACTOR: usize = 10;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum InputKind {
    #[default]
    Random,
    Sorted,
    Reverse,
}

impl InputKind {
    pub const ALL: [InputKind; 3] = [InputKind::Random, InputKind::Sorted, InputKind::Reverse];

    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::Reverse => "reverse",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InputKind {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputKind::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseNameError::new("input kind", s))
    }
}

pub fn generate_input(kind: InputKind, size: usize, seed: u64) -> Vec<i32> {
    match kind {
        InputKind::Random => random_input(size, seed),
        InputKind::Sorted => (0..size).map(index_key).collect(),
        InputKind::Reverse => (0..size).rev().map(index_key).collect(),
    }
}

// Saturates so ordered inputs keep their order past `i32::MAX` elements.
#[inline]
fn index_key(i: usize) -> i32 {
    i32::try_from(i).unwrap_or(i32::MAX)
}

fn random_input(size: usize, seed: u64) -> Vec<i32> {
    if size == 0 {
        return Vec::new();
    }

    let bound = i32::try_from(size.saturating_mul(RANDOM_RANGE_FACTOR)).unwrap_or(i32::MAX);
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(0..bound)).collect()
}
