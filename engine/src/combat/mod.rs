pub mod actions;
pub mod context;

use serde::{Deserialize, Serialize};

use crate::combat::actions::Action;
use crate::combat::context::{FightContext, FightLog, Side};
use crate::error::FightError;
use crate::fighter::{Fighter, FrozenFighter};
use crate::RandomSource;

/// Upper bound on the ticker. The loop runs while `ticker < max`, so at most `max + 1` ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickLimit {
    #[default]
    Unbounded,
    Max(u64),
}

impl TickLimit {
    pub fn allows(self, ticker: i64) -> bool {
        match self {
            TickLimit::Unbounded => true,
            TickLimit::Max(max) => u64::try_from(ticker).map_or(true, |t| t < max),
        }
    }
}

impl From<Option<u64>> for TickLimit {
    fn from(max: Option<u64>) -> Self {
        max.map_or(TickLimit::Unbounded, TickLimit::Max)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FightResult {
    /// `None` on timeout or mutual knockout.
    pub winner: Option<Side>,
    /// Number of ticks run, tick 0 included.
    pub ticks: u64,
    pub fighters: [FrozenFighter; 2],
    pub logs: Vec<FightLog>,
}

impl FightResult {
    pub fn winner_fighter(&self) -> Option<&FrozenFighter> {
        self.winner.map(|side| &self.fighters[side.index()])
    }

    pub fn winner_name(&self) -> Option<&str> {
        self.winner_fighter().map(|f| f.name.as_str())
    }
}

/// Runs a whole match between two fighters.
///
/// Each tick, every ready fighter picks an action, exhausted fighters regain one energy,
/// then the collected actions resolve by ascending priority (ties keep fighter order).
/// Stops once a fighter is at or below 0 hp or the tick limit is reached.
pub fn start_fight(
    fighters: [Fighter; 2],
    limit: TickLimit,
    dice: &mut impl RandomSource,
) -> Result<FightResult, FightError> {
    for fighter in &fighters {
        fighter.validate()?;
    }

    let mut ctx = FightContext::new(fighters);

    while limit.allows(ctx.ticker) && ctx.fighters().iter().all(Fighter::is_alive) {
        ctx.ticker += 1;
        let ticker = ctx.ticker;

        let mut actions = Vec::with_capacity(2);
        for side in Side::BOTH {
            let fighter = ctx.fighter_mut(side);
            if fighter.can_play(ticker) {
                actions.push(Action::new(side, fighter.choose_action(dice)));
            }
            if fighter.regenerate_energy() {
                tracing::trace!(tick = ticker, fighter = %fighter.name, "energy gate reopened");
            }
        }

        actions.sort_by_key(Action::priority);
        for action in actions {
            ctx.fighter_mut(action.owner).last_tick = ticker;
            let succeeded = action.run(&mut ctx, dice);
            tracing::trace!(tick = ticker, kind = ?action.kind, succeeded, "action resolved");
        }
    }

    let ticks = u64::try_from(ctx.ticker + 1).unwrap_or(0);
    let (fighters, logs) = ctx.into_parts();

    let mut alive = Side::BOTH
        .into_iter()
        .filter(|side| fighters[side.index()].is_alive());
    let winner = match (alive.next(), alive.next()) {
        (Some(side), None) => Some(side),
        _ => None,
    };

    let result = FightResult {
        winner,
        ticks,
        fighters: [fighters[0].freeze(), fighters[1].freeze()],
        logs,
    };
    tracing::info!(
        winner = result.winner_name().unwrap_or("none"),
        ticks,
        logs = result.logs.len(),
        "fight finished"
    );
    Ok(result)
}
