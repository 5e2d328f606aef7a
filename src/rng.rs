//! Uniform integer sampling used by every random decision in generation.

use rand::Rng;

/// Inclusive integer ranges and fair coin flips.
///
/// Implemented for every [`rand::Rng`], so the generator can be driven by
/// `StdRng` in production and a seeded `StdRng` in tests.
pub trait RandomRange {
    /// Uniform sample in `[min, max]`. Inverted bounds are swapped.
    fn range(&mut self, min: i32, max: i32) -> i32;

    /// 50/50 draw.
    fn coin(&mut self) -> bool;
}

impl<R: Rng + ?Sized> RandomRange for R {
    fn range(&mut self, min: i32, max: i32) -> i32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.gen_range(lo..=hi)
    }

    fn coin(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

/// Replays fixed answers, for tests that need an exact tree or room layout.
#[cfg(test)]
pub(crate) struct ScriptedRange {
    values: std::collections::VecDeque<i32>,
    coins: std::collections::VecDeque<bool>,
}

#[cfg(test)]
impl ScriptedRange {
    pub(crate) fn new(values: &[i32], coins: &[bool]) -> Self {
        Self {
            values: values.iter().copied().collect(),
            coins: coins.iter().copied().collect(),
        }
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.values.is_empty() && self.coins.is_empty()
    }
}

#[cfg(test)]
impl RandomRange for ScriptedRange {
    fn range(&mut self, min: i32, max: i32) -> i32 {
        let v = self.values.pop_front().expect("script ran out of range values");
        assert!(min <= v && v <= max, "scripted {v} outside [{min}, {max}]");
        v
    }

    fn coin(&mut self) -> bool {
        self.coins.pop_front().expect("script ran out of coin flips")
    }
}
