use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::fighter::{Fighter, FrozenFighter};

/// Which of the two fighters in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::First, Side::Second];

    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrozenContext {
    pub ticker: i64,
    pub fighters: [FrozenFighter; 2],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FightLog {
    pub message: String,
    pub fighter: FrozenFighter,
    /// Milliseconds since the Unix epoch.
    pub time: u64,
    pub ctx: FrozenContext,
}

/// Mutable state of one match.
#[derive(Debug)]
pub struct FightContext {
    pub ticker: i64,
    fighters: [Fighter; 2],
    logs: Vec<FightLog>,
}

impl FightContext {
    pub fn new(fighters: [Fighter; 2]) -> Self {
        Self {
            ticker: -1,
            fighters,
            logs: Vec::new(),
        }
    }

    pub fn fighter(&self, side: Side) -> &Fighter {
        &self.fighters[side.index()]
    }

    pub fn fighter_mut(&mut self, side: Side) -> &mut Fighter {
        &mut self.fighters[side.index()]
    }

    pub fn enemy_of(&self, side: Side) -> &Fighter {
        self.fighter(side.other())
    }

    pub fn fighters(&self) -> &[Fighter; 2] {
        &self.fighters
    }

    /// Mutable access to `(side, enemy of side)` at once.
    pub fn pair_mut(&mut self, side: Side) -> (&mut Fighter, &mut Fighter) {
        let [first, second] = &mut self.fighters;
        match side {
            Side::First => (first, second),
            Side::Second => (second, first),
        }
    }

    pub fn freeze(&self) -> FrozenContext {
        FrozenContext {
            ticker: self.ticker,
            fighters: [self.fighters[0].freeze(), self.fighters[1].freeze()],
        }
    }

    pub fn log(&mut self, side: Side, message: String) {
        tracing::debug!(
            tick = self.ticker,
            fighter = %self.fighter(side).name,
            "{message}"
        );
        let entry = FightLog {
            fighter: self.fighter(side).freeze(),
            time: now_millis(),
            ctx: self.freeze(),
            message,
        };
        self.logs.push(entry);
    }

    pub fn logs(&self) -> &[FightLog] {
        &self.logs
    }

    pub fn into_parts(self) -> ([Fighter; 2], Vec<FightLog>) {
        (self.fighters, self.logs)
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
