use std::fmt;

use serde::{Deserialize, Serialize};

use crate::combat::actions::ActionKind;
use crate::error::FightError;
use crate::stat::{FrozenStat, Stat};
use crate::RandomSource;

/// Chance of spending a turn on a debuff while any buffable stat is depleted.
const DEBUFF_CHANCE: f64 = 0.2;
const SLEEP_CHANCE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Hp,
    Slowness,
    Luck,
    Strength,
    Energy,
}

impl StatKind {
    pub const ALL: [StatKind; 5] = [
        StatKind::Hp,
        StatKind::Slowness,
        StatKind::Luck,
        StatKind::Strength,
        StatKind::Energy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatKind::Hp => "hp",
            StatKind::Slowness => "slowness",
            StatKind::Luck => "luck",
            StatKind::Strength => "strength",
            StatKind::Energy => "energy",
        }
    }
}

/// Turn readiness uses `slowness`: a fighter acts at most once every `slowness + 1` ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FighterStats {
    pub hp: Stat,
    pub slowness: Stat,
    pub luck: Stat,
    pub strength: Stat,
    pub energy: Stat,
}

impl FighterStats {
    pub fn get(&self, kind: StatKind) -> &Stat {
        match kind {
            StatKind::Hp => &self.hp,
            StatKind::Slowness => &self.slowness,
            StatKind::Luck => &self.luck,
            StatKind::Strength => &self.strength,
            StatKind::Energy => &self.energy,
        }
    }

    pub fn get_mut(&mut self, kind: StatKind) -> &mut Stat {
        match kind {
            StatKind::Hp => &mut self.hp,
            StatKind::Slowness => &mut self.slowness,
            StatKind::Luck => &mut self.luck,
            StatKind::Strength => &mut self.strength,
            StatKind::Energy => &mut self.energy,
        }
    }

    pub fn freeze(&self) -> FrozenStats {
        FrozenStats {
            hp: self.hp.freeze(),
            slowness: self.slowness.freeze(),
            luck: self.luck.freeze(),
            strength: self.strength.freeze(),
            energy: self.energy.freeze(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Fighter {
    pub name: String,
    pub stats: FighterStats,
    pub last_tick: i64,
    pub able_to_use_energy: bool,
}

impl Fighter {
    pub fn new(name: impl Into<String>, stats: FighterStats) -> Self {
        Self {
            name: name.into(),
            stats,
            last_tick: 0,
            able_to_use_energy: true,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.stats.hp.value > 0
    }

    /// Rejects a non-positive `max` on every stat whose `factor` the engine reads:
    /// hp, luck, energy and anything buffable. Slowness and strength are only read raw.
    pub fn validate(&self) -> Result<(), FightError> {
        for kind in StatKind::ALL {
            let stat = self.stats.get(kind);
            let ratio_read = matches!(kind, StatKind::Hp | StatKind::Luck | StatKind::Energy)
                || stat.is_buffable();
            let max = stat.max();
            if ratio_read && max <= 0 {
                return Err(FightError::NonPositiveMax {
                    fighter: self.name.clone(),
                    stat: kind.as_str(),
                    max,
                });
            }
        }
        Ok(())
    }

    pub fn can_play(&self, ticker: i64) -> bool {
        self.last_tick < ticker - self.stats.slowness.value
    }

    pub fn buff_able_stats(&self) -> impl Iterator<Item = StatKind> + '_ {
        StatKind::ALL
            .into_iter()
            .filter(|k| self.stats.get(*k).is_buffable())
    }

    pub fn choose_action(&self, dice: &mut impl RandomSource) -> ActionKind {
        let debuffed = self
            .buff_able_stats()
            .any(|k| self.stats.get(k).factor() < 1.0);

        if debuffed && dice.chance(DEBUFF_CHANCE) {
            ActionKind::Debuff
        } else if !self.able_to_use_energy {
            if dice.chance(SLEEP_CHANCE) {
                ActionKind::Sleep
            } else {
                ActionKind::Block
            }
        } else {
            ActionKind::Attack
        }
    }

    /// One tick of passive recovery while exhausted. Returns `true` when the gate reopens.
    /// A fighter already at max energy only needs `value >= initial` to reopen.
    pub fn regenerate_energy(&mut self) -> bool {
        if self.able_to_use_energy {
            return false;
        }
        let energy = &mut self.stats.energy;
        if energy.value < energy.max() {
            energy.value += 1;
        }
        if energy.value >= energy.initial() {
            self.able_to_use_energy = true;
            return true;
        }
        false
    }

    pub fn freeze(&self) -> FrozenFighter {
        FrozenFighter {
            name: self.name.clone(),
            stats: self.stats.freeze(),
            last_tick: self.last_tick,
            able_to_use_energy: self.able_to_use_energy,
        }
    }
}

impl fmt::Display for Fighter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**{}**", self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrozenStats {
    pub hp: FrozenStat,
    pub slowness: FrozenStat,
    pub luck: FrozenStat,
    pub strength: FrozenStat,
    pub energy: FrozenStat,
}

/// Point-in-time copy of a fighter, stored in every log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrozenFighter {
    pub name: String,
    pub stats: FrozenStats,
    pub last_tick: i64,
    pub able_to_use_energy: bool,
}

impl fmt::Display for FrozenFighter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**{}**", self.name)
    }
}
