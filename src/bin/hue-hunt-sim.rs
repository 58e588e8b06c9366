//! Headless autopilot for hue-hunt.
//!
//! Plays sessions through the tokio host in real time, guessing the target
//! with a configurable hit rate. Useful for checking configuration and
//! watching the engine's logs (`RUST_LOG=hue_hunt=debug`).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hue_hunt::{spawn_host, GameConfig, GameRng, GuessOutcome, Phase, RandomSource, Session};

#[derive(Debug, Parser)]
#[command(name = "hue-hunt-sim", about = "Play hue-hunt sessions with an autopilot")]
struct Args {
    /// TOML config file. `HUE_HUNT_*` environment variables override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for round generation (overrides config).
    #[arg(long)]
    seed: Option<u64>,

    /// Probability that a guess hits the target.
    #[arg(long, default_value_t = 0.6)]
    accuracy: f64,

    /// Delay between guesses in milliseconds.
    #[arg(long = "think-ms", default_value_t = 300)]
    think_ms: u64,

    /// Number of sessions to play back to back.
    #[arg(long, default_value_t = 1)]
    games: u32,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if !(0.0..=1.0).contains(&args.accuracy) {
        anyhow::bail!("--accuracy must be between 0 and 1");
    }

    let mut config = GameConfig::load(args.config.as_deref()).context("loading config")?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    info!(?config, "configuration loaded");

    let mut pilot = match config.seed {
        Some(seed) => GameRng::new(seed.wrapping_add(1)),
        None => GameRng::from_entropy(),
    };

    let (host, task) = spawn_host(Session::new(config));
    let think = Duration::from_millis(args.think_ms);

    for game in 1..=args.games {
        let mut snapshot = host.start().await?;
        let mut guesses = 0u32;

        while snapshot.phase == Phase::Active {
            tokio::time::sleep(think).await;
            snapshot = host.snapshot().await?;
            let Some(target) = snapshot.target_index else {
                break;
            };

            let tiles = snapshot.tiles.len();
            let index = if tiles < 2 || pilot.gen_f64(0.0..1.0) < args.accuracy {
                target
            } else {
                (target + 1 + pilot.gen_index(tiles - 1)) % tiles
            };

            guesses += 1;
            if let GuessOutcome::Correct { score, .. } = host.guess(index).await? {
                info!(game, score, grid = snapshot.grid_size, "hit");
            }
            snapshot = host.snapshot().await?;
        }

        info!(
            game,
            score = snapshot.score,
            best = snapshot.best_score,
            guesses,
            accuracy = snapshot.stats.accuracy(),
            "game over"
        );
    }

    host.shutdown().await?;
    let session = task.await.context("host task panicked")?;
    info!(best_score = session.best_score(), "done");
    Ok(())
}
