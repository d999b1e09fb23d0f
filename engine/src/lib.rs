use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub mod api;
pub mod combat;
pub mod content;
pub mod error;
pub mod fighter;
pub mod stat;

pub use combat::actions::{Action, ActionKind};
pub use combat::context::{FightContext, FightLog, FrozenContext, Side};
pub use combat::{start_fight, FightResult, TickLimit};
pub use error::FightError;
pub use fighter::{Fighter, FighterStats, FrozenFighter, FrozenStats, StatKind};
pub use stat::{FrozenStat, Stat};

/// Source of uniform draws in `[0, 1)`, the only non-deterministic input of a fight.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

enum DiceInner {
    Seeded(ChaCha8Rng),
    Scripted(VecDeque<f64>),
}

pub struct Dice {
    inner: DiceInner,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self { inner: DiceInner::Seeded(ChaCha8Rng::seed_from_u64(seed)) }
    }

    pub fn from_entropy() -> Self {
        Self { inner: DiceInner::Seeded(ChaCha8Rng::from_entropy()) }
    }

    /// Replays the given draws in order; once exhausted every draw is `0.0`.
    pub fn from_scripted(draws: Vec<f64>) -> Self {
        Self { inner: DiceInner::Scripted(draws.into()) }
    }
}

impl RandomSource for Dice {
    fn next_f64(&mut self) -> f64 {
        match &mut self.inner {
            DiceInner::Seeded(rng) => rng.gen_range(0.0..1.0),
            DiceInner::Scripted(queue) => queue.pop_front().unwrap_or(0.0),
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}
