use serde::{Deserialize, Serialize};

use crate::combat::context::{FightContext, Side};
use crate::fighter::StatKind;
use crate::RandomSource;

/// Share of current hp a rest can restore.
const REST_HEAL_RATIO: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Attack,
    Block,
    Sleep,
    Debuff,
}

impl ActionKind {
    /// Lower resolves first within a tick; Block has to land before an Attack queued alongside it.
    pub fn priority(self) -> i32 {
        match self {
            ActionKind::Block => 0,
            ActionKind::Attack => 1,
            ActionKind::Sleep | ActionKind::Debuff => 2,
        }
    }
}

/// One fighter's move for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub owner: Side,
    pub kind: ActionKind,
}

impl Action {
    pub fn new(owner: Side, kind: ActionKind) -> Self {
        Self { owner, kind }
    }

    pub fn priority(&self) -> i32 {
        self.kind.priority()
    }

    /// Applies the action. `false` means it had no effect (the failure is still logged).
    pub fn run(&self, ctx: &mut FightContext, dice: &mut impl RandomSource) -> bool {
        match self.kind {
            ActionKind::Attack => attack(ctx, self.owner, dice),
            ActionKind::Block => block(ctx, self.owner),
            ActionKind::Sleep => sleep(ctx, self.owner),
            ActionKind::Debuff => {
                tracing::trace!(tick = ctx.ticker, fighter = %ctx.fighter(self.owner).name, "debuff");
                true
            }
        }
    }
}

fn attack(ctx: &mut FightContext, owner: Side, dice: &mut impl RandomSource) -> bool {
    let me = ctx.fighter(owner);
    if !me.able_to_use_energy {
        let message = format!(
            "{} doesn't have enough energy to attack. (`{}%` of full energy)",
            me,
            me.stats.energy.percents()
        );
        ctx.log(owner, message);
        return false;
    }

    let critical = dice.chance(me.stats.luck.factor());
    let used_energy = (dice.next_f64() * me.stats.energy.value as f64).ceil() as i64;
    let mut damage = me.stats.strength.value * used_energy;

    if critical {
        let message = format!("{}'s next damages are doubled! (critical hit)", me);
        ctx.log(owner, message);
        damage *= 2;
    }

    let (me, enemy) = ctx.pair_mut(owner);
    me.stats.energy.value -= used_energy;
    enemy.stats.hp.value -= damage;

    let message = format!(
        "{} deals `{}` damage to {}! (`{}%` life points left)",
        me,
        damage,
        enemy,
        enemy.stats.hp.percents()
    );
    let exhausted = enemy.is_alive() && me.stats.energy.value <= 0;
    if exhausted {
        me.able_to_use_energy = false;
    }
    ctx.log(owner, message);

    if exhausted {
        let message = format!("{} has exhausted his energy reserve.", ctx.fighter(owner));
        ctx.log(owner, message);
    }

    true
}

fn block(ctx: &mut FightContext, owner: Side) -> bool {
    let (me, enemy) = ctx.pair_mut(owner);
    let strength = &mut enemy.stats.strength;
    strength.value = if strength.value <= 1 {
        0
    } else {
        round_half_up(strength.value as f64 * 0.5)
    };

    let message = format!(
        "{} reduces the {}'s attack by `50%`. (`{}` strength points left)",
        me, enemy, enemy.stats.strength
    );
    ctx.log(owner, message);
    true
}

fn sleep(ctx: &mut FightContext, owner: Side) -> bool {
    let me = ctx.fighter_mut(owner);

    for kind in StatKind::ALL {
        let stat = me.stats.get_mut(kind);
        if stat.is_buffable() && stat.factor() > 1.0 {
            stat.value += 1;
        }
    }

    me.stats.energy.value += me.stats.strength.value;

    let heal = me
        .stats
        .energy
        .value
        .min(round_half_up(me.stats.hp.value as f64 * REST_HEAL_RATIO));
    me.stats.hp.value += heal;

    if me.stats.hp.factor() > 1.0 {
        me.stats.hp.reset();
    }

    let message = format!("{} rests and is partially cured by rest.", me);
    ctx.log(owner, message);
    true
}

/// Halves round toward +inf, so -1.5 becomes -1.
fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::round_half_up;

    #[test]
    fn halves_round_up() {
        assert_eq!(round_half_up(1.5), 2);
        assert_eq!(round_half_up(-1.5), -1);
        assert_eq!(round_half_up(-1.6), -2);
        assert_eq!(round_half_up(2.4), 2);
    }
}
