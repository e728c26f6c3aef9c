use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use runner::{load_config, run_session};

#[derive(Parser, Debug)]
#[command(name = "rockfall-runner")]
#[command(about = "Play headless Rockfall sessions with a scripted pilot")]
struct Cli {
    /// First seed to play
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Number of consecutive seeds to play
    #[arg(long, default_value_t = 1)]
    sessions: u64,
    /// Stop a session after this many ticks (60 per second)
    #[arg(long, default_value_t = 18_000)]
    max_ticks: u64,
    /// TOML file overriding game tunables
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    let mut best = 0;
    for seed in cli.seed..cli.seed.saturating_add(cli.sessions) {
        let _span = tracing::info_span!("session", seed).entered();
        let report = run_session(seed, cli.max_ticks, &config)?;
        tracing::info!(
            ticks = report.ticks,
            phase = ?report.phase,
            score = report.score,
            level = report.level,
            lives = report.lives,
            destroyed = report.asteroids_destroyed,
            hits = report.ship_hits,
            pickups = report.pickups_collected,
            hud_updates = report.hud_updates,
            frame_bytes = report.frame_bytes,
            "session finished"
        );
        best = best.max(report.score);
    }

    tracing::info!(sessions = cli.sessions, best_score = best, "all sessions finished");
    Ok(())
}
