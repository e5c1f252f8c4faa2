//! Dead-reckoning excavation controller CLI.
//!
//! Runs the controller against the simulated world backend and prints the run
//! outcome as JSON. Exit codes are listed in `quarry::exit_codes`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quarry::error::QuarryError;
use quarry::excavate::{Excavator, RunOutcome};
use quarry::exit_codes;
use quarry::io::config::{QuarryConfig, load_config, write_config};
use quarry::io::report::{RunReport, write_report};
use quarry::io::sim::SimTurtle;
use quarry::logging;
use quarry::session::Session;

const DEFAULT_CONFIG: &str = "quarry.toml";

#[derive(Parser)]
#[command(
    name = "quarry",
    version,
    about = "Dead-reckoning excavation controller"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default config file.
    Init {
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Check a config file.
    Validate {
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
    },
    /// Excavate a simulated world and print the outcome as JSON.
    Run {
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
        /// Override `sim.seed`.
        #[arg(long)]
        seed: Option<u64>,
        /// Override `sim.depth`.
        #[arg(long)]
        depth: Option<u32>,
        /// Override `sim.starting_fuel`.
        #[arg(long)]
        fuel: Option<u32>,
        /// Stop after this many layers.
        #[arg(long)]
        max_layers: Option<u32>,
        /// Also write the outcome to this JSON file.
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<QuarryError>() {
        Some(QuarryError::FuelBelowThreshold { .. }) => exit_codes::FUEL_EXHAUSTED,
        Some(
            QuarryError::HomingBlocked { .. }
            | QuarryError::ReturnBlocked { .. }
            | QuarryError::OffCourse { .. }
            | QuarryError::MissingWaypoint,
        ) => exit_codes::STRANDED,
        None => exit_codes::INVALID,
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { config, force } => cmd_init(&config, force),
        Command::Validate { config } => cmd_validate(&config),
        Command::Run {
            config,
            seed,
            depth,
            fuel,
            max_layers,
            report,
        } => {
            let mut cfg = load_config(&config)?;
            apply_overrides(&mut cfg, seed, depth, fuel, max_layers);
            cfg.validate()?;
            let outcome = cmd_run(&cfg)?;
            if let Some(path) = report {
                write_report(&path, &RunReport::new(&cfg, &outcome))?;
            }
            let json = serde_json::to_string_pretty(&outcome).context("serialize outcome")?;
            println!("{json}");
            Ok(())
        }
    }
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if !force && path.exists() {
        return Ok(());
    }
    write_config(path, &QuarryConfig::default())
        .with_context(|| format!("write {}", path.display()))
}

fn cmd_validate(path: &Path) -> Result<()> {
    load_config(path)?;
    Ok(())
}

fn apply_overrides(
    cfg: &mut QuarryConfig,
    seed: Option<u64>,
    depth: Option<u32>,
    fuel: Option<u32>,
    max_layers: Option<u32>,
) {
    if let Some(seed) = seed {
        cfg.sim.seed = seed;
    }
    if let Some(depth) = depth {
        cfg.sim.depth = depth;
    }
    if let Some(fuel) = fuel {
        cfg.sim.starting_fuel = fuel;
    }
    if max_layers.is_some() {
        cfg.max_layers = max_layers;
    }
}

fn cmd_run(cfg: &QuarryConfig) -> Result<RunOutcome> {
    let world = SimTurtle::generate(&cfg.sim, cfg.side_length);
    let mut excavator = Excavator::new(Session::new(world), cfg);
    let outcome = excavator.run()?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_run_overrides() {
        let cli = Cli::parse_from(["quarry", "run", "--seed", "9", "--depth", "3"]);
        match cli.command {
            Command::Run {
                seed, depth, fuel, ..
            } => {
                assert_eq!(seed, Some(9));
                assert_eq!(depth, Some(3));
                assert_eq!(fuel, None);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["quarry", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true, .. }));
    }

    #[test]
    fn overrides_replace_sim_fields() {
        let mut cfg = QuarryConfig::default();
        apply_overrides(&mut cfg, Some(3), Some(4), Some(500), Some(1));
        assert_eq!(cfg.sim.seed, 3);
        assert_eq!(cfg.sim.depth, 4);
        assert_eq!(cfg.sim.starting_fuel, 500);
        assert_eq!(cfg.max_layers, Some(1));
    }

    #[test]
    fn fatal_errors_map_to_exit_codes() {
        let fuel = anyhow::Error::new(QuarryError::FuelBelowThreshold {
            fuel: 1,
            minimum: 50,
        });
        assert_eq!(exit_code_for(&fuel), exit_codes::FUEL_EXHAUSTED);
        let waypoint = anyhow::Error::new(QuarryError::MissingWaypoint);
        assert_eq!(exit_code_for(&waypoint), exit_codes::STRANDED);
        let off_course = anyhow::Error::new(QuarryError::OffCourse {
            position: quarry::core::displacement::Displacement::new(-2, 0, 0),
        });
        assert_eq!(exit_code_for(&off_course), exit_codes::STRANDED);
        assert_eq!(exit_code_for(&anyhow::anyhow!("bad config")), exit_codes::INVALID);
    }
}
