use std::{fs, path::Path};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::combat::{start_fight, FightResult, TickLimit};
use crate::content::builtin_fighters;
use crate::error::FightError;
use crate::fighter::{Fighter, FighterStats};
use crate::stat::Stat;
use crate::Dice;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FightConfig {
    pub fighters: Vec<FighterSpec>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub max_ticks: Option<u64>,
}

impl FightConfig {
    /// Billy vs Bob from the built-in roster, unbounded.
    pub fn demo() -> Self {
        Self {
            fighters: vec![
                FighterSpec::Builtin {
                    builtin: "billy".into(),
                },
                FighterSpec::Builtin {
                    builtin: "bob".into(),
                },
            ],
            seed: None,
            max_ticks: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FighterSpec {
    Builtin { builtin: String },
    Custom(FighterData),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FighterData {
    pub name: String,
    pub stats: StatsData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsData {
    pub hp: StatSpec,
    pub slowness: StatSpec,
    pub luck: StatSpec,
    pub strength: StatSpec,
    pub energy: StatSpec,
}

/// A stat as written in config: a bare number, or the full form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatSpec {
    Flat(i64),
    Full {
        initial: i64,
        #[serde(default)]
        max: Option<i64>,
        #[serde(default)]
        buffable: bool,
    },
}

impl StatSpec {
    pub fn to_stat(self) -> Stat {
        match self {
            StatSpec::Flat(initial) => Stat::new(initial),
            StatSpec::Full {
                initial,
                max,
                buffable,
            } => {
                let max = max.unwrap_or(initial);
                if buffable {
                    Stat::buffable(initial, max)
                } else {
                    Stat::with_max(initial, max)
                }
            }
        }
    }
}

impl FighterData {
    pub fn to_fighter(&self) -> Fighter {
        let s = &self.stats;
        Fighter::new(
            self.name.clone(),
            FighterStats {
                hp: s.hp.to_stat(),
                slowness: s.slowness.to_stat(),
                luck: s.luck.to_stat(),
                strength: s.strength.to_stat(),
                energy: s.energy.to_stat(),
            },
        )
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FightSummary {
    pub samples: u32,
    pub wins: IndexMap<String, u32>,
    pub draws: u32,
    pub avg_ticks: f64,
}

pub fn builtin_fighter(id: &str) -> Result<FighterData> {
    let roster = builtin_fighters();
    let text = roster
        .get(id.to_lowercase().as_str())
        .ok_or_else(|| FightError::UnknownFighter(id.to_string()))?;
    let data = serde_json::from_str(text)
        .with_context(|| format!("failed to parse built-in fighter: {}", id))?;
    Ok(data)
}

pub fn build_fighters(cfg: &FightConfig) -> Result<[Fighter; 2]> {
    let fighters = cfg
        .fighters
        .iter()
        .map(|spec| match spec {
            FighterSpec::Builtin { builtin } => builtin_fighter(builtin).map(|d| d.to_fighter()),
            FighterSpec::Custom(data) => Ok(data.to_fighter()),
        })
        .collect::<Result<Vec<_>>>()?;

    let count = fighters.len();
    let pair: [Fighter; 2] = fighters
        .try_into()
        .map_err(|_| FightError::FighterCount(count))?;
    Ok(pair)
}

/// Parses a config as YAML when the path ends in `.yaml`/`.yml`, JSON otherwise.
pub fn parse_config(text: &str, path: &Path) -> Result<FightConfig> {
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));
    let cfg = if is_yaml {
        serde_yaml::from_str(text)
            .with_context(|| format!("failed to parse fight YAML: {}", path.display()))?
    } else {
        serde_json::from_str(text)
            .with_context(|| format!("failed to parse fight JSON: {}", path.display()))?
    };
    Ok(cfg)
}

/// Reads a UTF-8 config from disk; a leading byte-order mark is skipped.
pub fn load_config(path: &Path) -> Result<FightConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read fight config: {}", path.display()))?;
    parse_config(text.strip_prefix('\u{feff}').unwrap_or(&text), path)
}

fn dice_for(seed: Option<u64>) -> Dice {
    seed.map_or_else(Dice::from_entropy, Dice::from_seed)
}

pub fn simulate_fight(cfg: &FightConfig) -> Result<FightResult> {
    let fighters = build_fighters(cfg)?;
    let mut dice = dice_for(cfg.seed);
    let result = start_fight(fighters, TickLimit::from(cfg.max_ticks), &mut dice)?;
    Ok(result)
}

/// Runs `samples` fights; sample `i` is seeded with `seed + i` when a seed is set.
pub fn simulate_fight_many(cfg: &FightConfig, samples: u32) -> Result<FightSummary> {
    let template = build_fighters(cfg)?;
    let mut wins: IndexMap<String, u32> = template.iter().map(|f| (f.name.clone(), 0)).collect();
    let mut draws = 0u32;
    let mut total_ticks = 0u64;

    for i in 0..samples {
        let mut dice = dice_for(cfg.seed.map(|s| s.wrapping_add(i as u64)));
        let result = start_fight(template.clone(), TickLimit::from(cfg.max_ticks), &mut dice)?;
        total_ticks += result.ticks;
        match result.winner_name() {
            Some(name) => *wins.entry(name.to_string()).or_insert(0) += 1,
            None => draws += 1,
        }
    }

    let avg_ticks = if samples == 0 {
        0.0
    } else {
        total_ticks as f64 / samples as f64
    };
    Ok(FightSummary {
        samples,
        wins,
        draws,
        avg_ticks,
    })
}
