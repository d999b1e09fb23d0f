use anyhow::Context;
use clap::Parser;
use encoding_rs::Encoding;
use fight_engine::api::{parse_config, simulate_fight_many, FightConfig};
use std::{fs, path::Path, path::PathBuf};

#[derive(Parser)]
#[command(name = "simulate-vs")]
#[command(about = "Monte Carlo sim: many fights between the same two fighters")]
struct Args {
    /// Fight config (JSON or YAML); defaults to Billy vs Bob
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of trials
    #[arg(long, default_value_t = 1000)]
    trials: u32,

    /// Safety cap on ticks per trial
    #[arg(long, default_value_t = 10_000)]
    max_ticks: u64,

    /// RNG base seed (trial i uses seed+i)
    #[arg(long, default_value_t = 12345)]
    seed: u64,
}

fn read_text_auto(path: &Path) -> anyhow::Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    if let Some((enc, bom_len)) = Encoding::for_bom(&bytes) {
        let (cow, _, _) = enc.decode(&bytes[bom_len..]);
        Ok(cow.into_owned())
    } else {
        Ok(String::from_utf8(bytes)?)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let base = match args.config.as_ref() {
        Some(path) => parse_config(&read_text_auto(path)?, path)?,
        None => FightConfig::demo(),
    };
    let cfg = FightConfig {
        seed: Some(args.seed),
        max_ticks: Some(args.max_ticks),
        ..base
    };

    let summary = simulate_fight_many(&cfg, args.trials)?;
    let trials_f = summary.samples.max(1) as f64;

    println!("simulate-vs results");
    println!("-------------------");
    println!("trials:             {}", summary.samples);
    println!("tick cap:           {}", args.max_ticks);
    println!();
    for (name, wins) in &summary.wins {
        println!(
            "{:<20}{:.1}% ({} wins)",
            format!("{}:", name),
            *wins as f64 / trials_f * 100.0,
            wins
        );
    }
    println!(
        "{:<20}{:.1}% ({} draws)",
        "draws:",
        summary.draws as f64 / trials_f * 100.0,
        summary.draws
    );
    println!("avg ticks:          {:.2}", summary.avg_ticks);

    Ok(())
}
