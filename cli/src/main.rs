use anyhow::Context;
use clap::{Parser, Subcommand};
use encoding_rs::Encoding;
use fight_engine::api::{builtin_fighter, parse_config, simulate_fight, FightConfig};
use fight_engine::content::builtin_fighters;
use fight_engine::FightResult;
use std::{fs, path::Path, path::PathBuf};

#[derive(Subcommand)]
enum Cmd {
    /// Run one fight and print the chat transcript
    Fight {
        /// Fight config (JSON or YAML); defaults to Billy vs Bob
        #[arg(long)]
        config: Option<PathBuf>,
        /// RNG seed for determinism (overrides the config)
        #[arg(long)]
        seed: Option<u64>,
        /// Tick ceiling (overrides the config)
        #[arg(long)]
        max_ticks: Option<u64>,
        /// Print the whole result, snapshots included, as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the built-in fighters as JSON
    Roster {
        /// Pretty-print JSON
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
}

#[derive(Parser)]
#[command(name = "fight-cli")]
#[command(about = "Turn-based fight simulator harness")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
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

fn resolve_config(
    path: Option<&Path>,
    seed: Option<u64>,
    max_ticks: Option<u64>,
) -> anyhow::Result<FightConfig> {
    let mut cfg = match path {
        Some(p) => parse_config(&read_text_auto(p)?, p)?,
        None => FightConfig::demo(),
    };
    if seed.is_some() {
        cfg.seed = seed;
    }
    if max_ticks.is_some() {
        cfg.max_ticks = max_ticks;
    }
    Ok(cfg)
}

fn transcript(result: &FightResult) -> String {
    let header = match result.winner_fighter() {
        Some(winner) => format!("Winner: {}", winner),
        None => "No winner.".to_string(),
    };
    let mut lines = vec![header];
    lines.extend(result.logs.iter().map(|log| log.message.clone()));
    lines.join("\n")
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Fight {
            config,
            seed,
            max_ticks,
            json,
        } => {
            let cfg = resolve_config(config.as_deref(), seed, max_ticks)?;
            let result = simulate_fight(&cfg)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", transcript(&result));
            }
        }
        Cmd::Roster { pretty } => {
            let mut ids: Vec<_> = builtin_fighters().into_keys().collect();
            ids.sort_unstable();
            let roster = ids
                .into_iter()
                .map(builtin_fighter)
                .collect::<anyhow::Result<Vec<_>>>()?;
            if pretty {
                println!("{}", serde_json::to_string_pretty(&roster)?);
            } else {
                println!("{}", serde_json::to_string(&roster)?);
            }
        }
    }
    Ok(())
}
