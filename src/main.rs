//! CLI driver: pick a pattern, run the generation loop, render each frame.

use std::io::{self, Write};
use std::thread;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use life_automata::{render::render, NeighborStrategy, Pattern, SimConfig, Simulation};

#[derive(Parser)]
#[command(name = "life", about = "Conway's Game of Life with parallel stepping")]
struct Cli {
    /// Seed pattern: Square, Blinker, or Glider.
    pattern: Pattern,

    /// Number of generations to run.
    #[arg(long, default_value_t = 32)]
    generations: u32,

    /// Number of parallel workers (must be between 1 and the grid height).
    #[arg(long, default_value_t = 4, conflicts_with = "sequential")]
    workers: usize,

    /// Advance single-threaded instead of partitioning across workers.
    #[arg(long)]
    sequential: bool,

    /// Count neighbors via the convolution kernel instead of the direct sum.
    #[arg(long)]
    convolution: bool,

    /// Delay between frames, in milliseconds.
    #[arg(long, default_value_t = 150)]
    delay_ms: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = SimConfig::new(cli.pattern);
    config.generations = cli.generations;
    config.workers = if cli.sequential { None } else { Some(cli.workers) };
    config.strategy = if cli.convolution {
        NeighborStrategy::Convolution
    } else {
        NeighborStrategy::Direct
    };
    config.frame_delay = std::time::Duration::from_millis(cli.delay_ms);

    info!(
        pattern = %config.pattern,
        generations = config.generations,
        workers = ?config.workers,
        "starting simulation"
    );

    let mut sim = Simulation::new(config).context("invalid simulation configuration")?;

    let mut stdout = io::stdout();
    for _ in 0..sim.config().generations {
        // ANSI clear-and-home, then the frame.
        write!(stdout, "\x1b[2J\x1b[H{}", render(sim.grid()))?;
        stdout.flush()?;
        thread::sleep(sim.config().frame_delay);
        sim.step().context("generation step failed")?;
    }

    Ok(())
}
