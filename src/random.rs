//! Random sources for draws, coin flips and game codes.

use crate::models::TeamSlot;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Randomness used by the selection protocols. Injected so tests can replay fixed sequences.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Fair coin: which team picks first in the draft.
    fn flip_coin(&mut self) -> TeamSlot;
}

fn index_from<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    rng.gen_range(0..len)
}

fn coin_from<R: Rng + ?Sized>(rng: &mut R) -> TeamSlot {
    if rng.gen_bool(0.5) {
        TeamSlot::One
    } else {
        TeamSlot::Two
    }
}

/// Thread-local OS-seeded generator (what the web binary uses).
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        index_from(&mut rand::thread_rng(), len)
    }

    fn flip_coin(&mut self) -> TeamSlot {
        coin_from(&mut rand::thread_rng())
    }
}

/// Reproducible generator from a fixed seed.
#[derive(Clone, Debug)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        index_from(&mut self.0, len)
    }

    fn flip_coin(&mut self) -> TeamSlot {
        coin_from(&mut self.0)
    }
}

/// Replays scripted answers; once exhausted it answers index 0 and team one.
/// Out-of-range scripted indices are wrapped into range.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    indices: VecDeque<usize>,
    coins: VecDeque<TeamSlot>,
}

impl ScriptedRandom {
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
            coins: VecDeque::new(),
        }
    }

    pub fn with_coins(mut self, coins: impl IntoIterator<Item = TeamSlot>) -> Self {
        self.coins = coins.into_iter().collect();
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.indices.pop_front().unwrap_or(0) % len
    }

    fn flip_coin(&mut self) -> TeamSlot {
        self.coins.pop_front().unwrap_or_default()
    }
}
