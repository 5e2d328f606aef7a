use std::path::PathBuf;

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use bsp_crawler::constants::{SIMULATION_DEFAULT_TICKS, SIMULATION_DT};
use bsp_crawler::grid::Grid;
use bsp_crawler::level::Level;
use bsp_crawler::{DungeonGenerator, GameConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate BSP dungeons and run a headless containment check")]
struct Args {
    /// JSON config file; missing fields fall back to defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible layouts
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON summary of each dungeon after its map
    #[arg(long)]
    json: bool,

    /// Simulation ticks to run per level
    #[arg(long, default_value_t = SIMULATION_DEFAULT_TICKS)]
    ticks: u32,

    /// Serve puffin profiling data on the default port
    #[arg(long)]
    profile: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let _puffin_server = if args.profile {
        let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
        let server = puffin_http::Server::new(&addr)?;
        puffin::set_scopes_on(true);
        info!("Serving profile data on {addr}");
        Some(server)
    } else {
        None
    };

    let (mut generator, mut rng) = match args.seed {
        Some(seed) => (
            DungeonGenerator::with_seed(config.dungeon.clone(), seed),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (
            DungeonGenerator::new(config.dungeon.clone()),
            StdRng::from_entropy(),
        ),
    };

    for (number, preset) in config.levels.iter().enumerate() {
        let mut level = Level::build(&mut generator, preset, &config.spawning, &mut rng)?;

        if let Some(dungeon) = generator.dungeon() {
            println!("Level {} ({}x{})", number + 1, preset.width, preset.height);
            print!("{}", Grid::from_dungeon(dungeon).to_ascii());
            if args.json {
                println!("{}", serde_json::to_string_pretty(&dungeon.summary())?);
            }
        }

        let mut corrections = 0;
        for _ in 0..args.ticks {
            corrections += level.tick(SIMULATION_DT)?;
            puffin::GlobalProfiler::lock().new_frame();
        }
        info!(
            "Level {}: {} collision corrections over {} ticks",
            number + 1,
            corrections,
            args.ticks
        );
    }

    Ok(())
}
