use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;

use gravity_app::config::ServerConfig;
use gravity_app::handle::GameHandle;
use gravity_app::state::PlayerId;
use gravity_core::commands::PlayerCommand;
use gravity_core::enums::ThrustDirection;

#[derive(Parser, Debug)]
#[command(about = "Headless gravity arena server")]
struct Args {
    /// JSON config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Override the simulation seed.
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many seconds. Runs until killed when omitted.
    #[arg(long)]
    duration_secs: Option<u64>,
    /// Number of bot players steering at random.
    #[arg(long, default_value_t = 2)]
    bots: usize,
}

fn load_config(args: &Args) -> Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.sim.seed = seed;
    }
    config.validate()?;
    Ok(config)
}

/// Bots cycle through the thrusters, one direction per second.
fn steer_bots(handle: &GameHandle, bots: &[PlayerId], second: u64) -> Result<()> {
    for (i, bot) in bots.iter().enumerate() {
        let slot = (second as usize + i) % ThrustDirection::ALL.len();
        for (j, direction) in ThrustDirection::ALL.into_iter().enumerate() {
            handle.send(
                *bot,
                PlayerCommand::SetThruster {
                    body_id: Default::default(),
                    direction,
                    enabled: j == slot,
                },
            )?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = load_config(&args)?;
    log::info!(
        "starting arena: seed {}, {} Hz tick, {} Hz broadcast",
        config.sim.seed,
        config.tick_rate,
        config.broadcast_rate
    );

    let handle = GameHandle::start(config)?;
    let bots = (0..args.bots)
        .map(|i| handle.join(&format!("bot-{i}"), "#888888"))
        .collect::<Result<Vec<_>, _>>()?;

    let started = Instant::now();
    let mut second = 0;
    loop {
        std::thread::sleep(Duration::from_secs(1));
        second += 1;

        steer_bots(&handle, &bots, second)?;

        if let Some(snapshot) = handle.latest_snapshot()? {
            let heaviest = snapshot
                .bodies
                .iter()
                .max_by(|a, b| a.mass.total_cmp(&b.mass));
            log::info!(
                "tick {} ({:.1}s): {} bodies, total mass {:.0}, heaviest {}",
                snapshot.time.tick,
                snapshot.time.elapsed_secs(),
                snapshot.bodies.len(),
                snapshot.total_mass(),
                heaviest.map_or("-", |b| b.label.as_str())
            );
        }

        if let Some(limit) = args.duration_secs {
            if started.elapsed() >= Duration::from_secs(limit) {
                break;
            }
        }
    }

    handle.shutdown();
    Ok(())
}
