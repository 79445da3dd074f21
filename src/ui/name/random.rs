use std::collections::VecDeque;

use rand::Rng;

/// Source of uniform indices.
///
/// Injected so tests can drive exact picks.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Replays a fixed list of picks, then repeats the last one.
///
/// Each pick is reduced modulo the pool length.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    picks: VecDeque<usize>,
    last: usize,
}

impl ScriptedSource {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            last: 0,
        }
    }
}

impl RandomSource for ScriptedSource {
    fn pick(&mut self, len: usize) -> usize {
        if let Some(next) = self.picks.pop_front() {
            self.last = next;
        }
        self.last % len
    }
}

impl RandomSource for Box<dyn RandomSource + Send> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_rng_stays_in_range() {
        let mut rng = ThreadRngSource;
        for len in 1..20 {
            assert!(rng.pick(len) < len);
        }
    }

    #[test]
    fn scripted_replays_then_repeats() {
        let mut rng = ScriptedSource::new([2, 5]);
        assert_eq!(rng.pick(10), 2);
        assert_eq!(rng.pick(10), 5);
        assert_eq!(rng.pick(10), 5);
        assert_eq!(rng.pick(3), 2);
    }
}
