use fight_engine::{ActionKind, Dice, FightError, Fighter, FighterStats, Stat};

fn sample_fighter(luck: Stat) -> Fighter {
    Fighter::new(
        "Billy",
        FighterStats {
            hp: Stat::hp(),
            slowness: Stat::new(3),
            luck,
            strength: Stat::new(3),
            energy: Stat::new(20),
        },
    )
}

#[test]
fn readiness_waits_out_slowness() {
    let f = sample_fighter(Stat::luck(10));
    assert!(!f.can_play(0));
    assert!(!f.can_play(3));
    assert!(f.can_play(4));
}

#[test]
fn cannot_act_twice_on_the_same_tick() {
    let mut f = sample_fighter(Stat::luck(10));
    f.stats.slowness = Stat::new(0);
    f.last_tick = 5;
    assert!(!f.can_play(5));
    assert!(f.can_play(6));
}

#[test]
fn depleted_buffable_stat_can_trigger_debuff() {
    let f = sample_fighter(Stat::luck(10));
    let mut dice = Dice::from_scripted(vec![0.1]);
    assert_eq!(f.choose_action(&mut dice), ActionKind::Debuff);

    let mut dice = Dice::from_scripted(vec![0.2]);
    assert_eq!(f.choose_action(&mut dice), ActionKind::Attack);
}

#[test]
fn exhausted_fighter_sleeps_or_blocks() {
    let mut f = sample_fighter(Stat::luck(10));
    f.able_to_use_energy = false;

    let mut dice = Dice::from_scripted(vec![0.5, 0.3]);
    assert_eq!(f.choose_action(&mut dice), ActionKind::Sleep);

    let mut dice = Dice::from_scripted(vec![0.5, 0.7]);
    assert_eq!(f.choose_action(&mut dice), ActionKind::Block);
}

#[test]
fn full_buffable_stats_never_debuff() {
    let f = sample_fighter(Stat::luck(100));
    let mut dice = Dice::from_scripted(vec![0.0]);
    assert_eq!(f.choose_action(&mut dice), ActionKind::Attack);
}

#[test]
fn energy_regenerates_until_initial_threshold() {
    let mut f = sample_fighter(Stat::luck(10));
    f.stats.energy = Stat::with_max(5, 10);
    f.stats.energy.value = 3;
    f.able_to_use_energy = false;

    assert!(!f.regenerate_energy());
    assert_eq!(f.stats.energy.value, 4);
    assert!(f.regenerate_energy());
    assert_eq!(f.stats.energy.value, 5);
    assert!(f.able_to_use_energy);

    assert!(!f.regenerate_energy());
    assert_eq!(f.stats.energy.value, 5);
}

#[test]
fn gate_reopens_at_max_energy() {
    let mut f = sample_fighter(Stat::luck(10));
    f.able_to_use_energy = false;
    assert_eq!(f.stats.energy.value, f.stats.energy.max());

    assert!(f.regenerate_energy());
    assert_eq!(f.stats.energy.value, 20);
}

#[test]
fn renders_bold_name() {
    let f = sample_fighter(Stat::luck(10));
    assert_eq!(f.to_string(), "**Billy**");
    assert_eq!(f.freeze().to_string(), "**Billy**");
}

#[test]
fn non_positive_max_is_rejected() {
    let mut f = sample_fighter(Stat::luck(10));
    f.stats.hp = Stat::new(0);
    assert_eq!(
        f.validate(),
        Err(FightError::NonPositiveMax {
            fighter: "Billy".into(),
            stat: "hp",
            max: 0,
        })
    );
}

#[test]
fn zero_slowness_and_strength_are_valid() {
    let mut f = sample_fighter(Stat::luck(10));
    f.stats.slowness = Stat::new(0);
    f.stats.strength = Stat::new(0);
    assert_eq!(f.validate(), Ok(()));
}

#[test]
fn buffable_stat_needs_positive_max() {
    let mut f = sample_fighter(Stat::luck(10));
    f.stats.slowness = Stat::buffable(0, 0);
    assert!(matches!(
        f.validate(),
        Err(FightError::NonPositiveMax { stat: "slowness", .. })
    ));
}
