use std::fmt;

use serde::{Deserialize, Serialize};

/// A bounded numeric resource. `value` may transiently exceed `max`; only `reset` pulls it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    initial: i64,
    max: i64,
    pub value: i64,
    buff_able: bool,
}

impl Stat {
    pub fn new(initial: i64) -> Self {
        Self::with_max(initial, initial)
    }

    pub fn with_max(initial: i64, max: i64) -> Self {
        Self {
            initial,
            max,
            value: initial,
            buff_able: false,
        }
    }

    pub fn buffable(initial: i64, max: i64) -> Self {
        Self {
            buff_able: true,
            ..Self::with_max(initial, max)
        }
    }

    /// Luck is a percentage chance and can be partially restored by resting.
    pub fn luck(value: i64) -> Self {
        Self::buffable(value, 100)
    }

    pub fn hp() -> Self {
        Self::new(100)
    }

    pub fn initial(&self) -> i64 {
        self.initial
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn is_buffable(&self) -> bool {
        self.buff_able
    }

    /// `value / max`; not clamped, so it can be negative or above 1.
    pub fn factor(&self) -> f64 {
        self.value as f64 / self.max as f64
    }

    pub fn percents(&self) -> i64 {
        (self.factor() * 100.0).floor() as i64
    }

    pub fn reset(&mut self) {
        self.value = self.initial;
    }

    pub fn freeze(&self) -> FrozenStat {
        FrozenStat {
            initial: self.initial,
            max: self.max,
            value: self.value,
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrozenStat {
    pub initial: i64,
    pub max: i64,
    pub value: i64,
}
