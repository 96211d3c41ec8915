use anyhow::{Context, Result};
use clap::Parser;
use murmuration_core::init_logging;
use murmuration_lib::app::App;
use murmuration_lib::model::config::SimulationConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 1000)]
    ticks: u64,

    /// RNG seed, overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Initial number of ordinary agents, overrides the config file
    #[arg(short, long)]
    population: Option<usize>,

    /// Number of predators to add before the first tick
    #[arg(long, default_value_t = 0)]
    predators: usize,

    /// Print the final world snapshot as JSON
    #[arg(long)]
    snapshot: bool,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = SimulationConfig::load(&args.config)?;
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }
    if let Some(population) = args.population {
        config.world.initial_population = population;
    }

    let mut app = App::new(config).context("creating world")?;
    for _ in 0..args.predators {
        app.world.add_predator();
    }

    let events = app.run_headless(args.ticks);
    let stats = app.world.stats();
    tracing::info!(
        ticks = app.world.tick,
        boids = stats.boids,
        predators = stats.predators,
        kills = events.len(),
        elapsed_ms = app.metrics.elapsed().as_millis() as u64,
        "Headless run finished"
    );

    if args.snapshot {
        let json = serde_json::to_string_pretty(&app.world.snapshot())?;
        println!("{json}");
    }

    Ok(())
}
