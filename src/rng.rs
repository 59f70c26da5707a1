use std::collections::{HashMap, VecDeque};

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform choice among candidates. Trait inheritance and setup go through
/// this so tests can substitute a scripted source.
pub trait PickOne {
    /// Index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Panics if `candidates` is empty.
    fn pick_one<T: Copy, const N: usize>(&mut self, candidates: [T; N]) -> T {
        candidates[self.pick_index(N)]
    }
}

/// Hands out independent ChaCha8 streams keyed by name, all derived from one
/// seed.
pub struct RngManager {
    master: ChaCha8Rng,
    streams: HashMap<String, u64>,
}

impl RngManager {
    pub fn new(seed: u64) -> Self {
        Self {
            master: ChaCha8Rng::seed_from_u64(seed),
            streams: HashMap::new(),
        }
    }

    /// The same name always yields the same stream for a given seed.
    pub fn stream(&mut self, name: &str) -> SeededPicker {
        let master = &mut self.master;
        let seed = *self
            .streams
            .entry(name.to_string())
            .or_insert_with(|| master.next_u64());
        SeededPicker {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SeededPicker {
    inner: ChaCha8Rng,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl PickOne for SeededPicker {
    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Replays a fixed queue of choices, each taken modulo the candidate count.
/// Picks the first candidate once the queue runs dry.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPicks {
    queue: VecDeque<usize>,
}

impl ScriptedPicks {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            queue: picks.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl PickOne for ScriptedPicks {
    fn pick_index(&mut self, len: usize) -> usize {
        self.queue.pop_front().map_or(0, |pick| pick % len)
    }
}
