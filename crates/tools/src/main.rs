use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use env_logger::{Builder, Env};
use levelgen::mapgen::BoundaryKind;
use levelgen::{ActorKind, LevelConfig, LevelSession, SpawnOutcome, generate_level};
use log::info;

mod ascii;
mod config_file;

#[derive(Parser)]
#[command(name = "levelgen", author, version, about, long_about = None)]
struct Args {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides it.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a level and print it
    Generate {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        /// TOML file overriding the default parameters
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value_t = Format::Ascii)]
        format: Format,
    },
    /// Run runtime spawning with the player parked at the start pose
    Simulate {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long, default_value_t = 120)]
        ticks: u32,
        /// Seconds per tick
        #[arg(long, default_value_t = 1.0)]
        dt: f32,
    },
    /// Print the default parameters as TOML
    DefaultConfig,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Ascii,
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Generate { seed, config, format } => {
            generate(seed, config_file::load(config.as_deref())?, format)
        }
        Command::Simulate { seed, config, ticks, dt } => {
            simulate(seed, config_file::load(config.as_deref())?, ticks, dt)
        }
        Command::DefaultConfig => {
            print!("{}", config_file::render(&LevelConfig::default())?);
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    Builder::from_env(Env::default().default_filter_or(default_filter)).init();
}

fn generate(seed: u64, config: LevelConfig, format: Format) -> Result<()> {
    let level = generate_level(config, seed)
        .with_context(|| format!("Failed to generate level for seed {seed}"))?;

    match format {
        Format::Json => {
            let json = serde_json::to_string_pretty(&level)
                .with_context(|| "Failed to serialize level JSON")?;
            println!("{json}");
        }
        Format::Ascii => {
            print!("{}", ascii::render(&level));
            let doors = level.boundaries.iter().filter(|b| b.kind == BoundaryKind::Door).count();
            println!("Seed: {}", level.seed);
            println!("Fingerprint: {:#018x}", level.fingerprint());
            println!("Rooms: {}", level.grid.room_count());
            println!("Walls: {}  Doors: {}", level.boundaries.len() - doors, doors);
            println!(
                "Enemies: {}/{}  Health: {}  Ammo: {}",
                level.actors_of(ActorKind::Enemy).count(),
                level.enemies_to_win,
                level.actors_of(ActorKind::HealthPickup).count(),
                level.actors_of(ActorKind::AmmoPickup).count()
            );
            for failure in &level.placement_failures {
                println!("Placement failure: {failure}");
            }
            if !level.player_start_connected() {
                println!("Warning: player start is detached from the room network");
            }
        }
    }
    Ok(())
}

fn simulate(seed: u64, config: LevelConfig, ticks: u32, dt: f32) -> Result<()> {
    let mut session = LevelSession::new(config, seed)
        .with_context(|| format!("Failed to start session for seed {seed}"))?;
    let pose = session.player_start_pose();
    info!("simulating {ticks} ticks of {dt}s from {:?}", pose.position);

    let mut spawned = 0_u32;
    let mut deferred = 0_u32;
    for tick in 0..ticks {
        match session.tick_on_grid(dt, &pose) {
            SpawnOutcome::Spawned(spawn) => {
                spawned += 1;
                println!(
                    "tick {tick}: spawned at ({:.2}, {:.2}, {:.2}) level {} health {} damage {} speed {:.2} (attempt {})",
                    spawn.position.x,
                    spawn.position.y,
                    spawn.position.z,
                    spawn.difficulty_level,
                    spawn.stats.health,
                    spawn.stats.damage,
                    spawn.stats.move_speed,
                    spawn.attempt
                );
            }
            SpawnOutcome::Deferred { attempts } => {
                deferred += 1;
                println!("tick {tick}: deferred after {attempts} attempts");
            }
            SpawnOutcome::TornDown => break,
            SpawnOutcome::Waiting | SpawnOutcome::AtCapacity => {}
        }
    }

    println!("Spawned: {spawned}  Deferred: {deferred}");
    println!(
        "Live enemies: {}/{}",
        session.spawner().live_enemy_count(),
        session.config().spawner.max_enemies
    );
    println!(
        "Difficulty level: {}/{}",
        session.difficulty().level(),
        session.difficulty().max_level()
    );
    session.teardown();
    Ok(())
}
