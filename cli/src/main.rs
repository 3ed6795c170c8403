#![warn(clippy::pedantic)]

use std::{fs, path::PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use cube_core::{ACTIONS, CubeConfig, Encoding, StateVector, scramble};
use env_logger::TimestampPrecision;
use itertools::Itertools;
use log::{LevelFilter, info};

/// Simulates order 2 and order 3 cubes from the command line
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// A TOML file with default cube settings
    #[arg(long, short = 'c', global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Cube order, overriding the config file
    #[arg(long, short = 'n', global = true)]
    order: Option<usize>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a move string to a solved cube
    Apply {
        /// The moves to run, e.g. "f.r2u"
        moves: String,
        /// Print bit codes instead of color labels
        #[arg(long)]
        bits: bool,
        /// Always use fixed 3-bit codes, even on even-order cubes
        #[arg(long, requires = "bits")]
        absolute: bool,
    },
    /// Scramble a solved cube with random moves
    Scramble {
        /// Number of random moves
        #[arg(long, short = 'k', default_value_t = 20)]
        count: usize,
        /// Seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read the config file {path:?}"))?;
            CubeConfig::from_toml(&text)?
        }
        None => CubeConfig::default(),
    };
    if let Some(order) = cli.order {
        config.order = order;
    }
    info!("Using {config:?}");

    let mut cube = config.build()?;

    match cli.command {
        Commands::Apply {
            moves,
            bits,
            absolute,
        } => {
            cube.run(&moves)?;

            print!("{cube}");
            let encoding = match (bits, absolute) {
                (false, _) => Encoding::Labels,
                (true, false) => config.encoding(),
                (true, true) => Encoding::Bits { relative: false },
            };
            println!("{}", format_vector(&cube.encode(encoding)));
            println!("solved: {}", cube.is_solved());
        }
        Commands::Scramble { count, seed } => {
            let mut rng = match seed {
                Some(seed) => fastrand::Rng::with_seed(seed),
                None => fastrand::Rng::new(),
            };
            let actions = scramble(&mut cube, &mut rng, count)?;

            println!("{}", actions.iter().map(|&action| ACTIONS[action]).join(" "));
            print!("{cube}");
        }
    }

    Ok(())
}

/// Labels are written as letters and codes as their bits, one tile per group.
fn format_vector(vector: &StateVector) -> String {
    match vector {
        StateVector::Labels(labels) => labels.iter().join(""),
        StateVector::Codes(codes) => codes
            .iter()
            .map(|code| code.bits().join(""))
            .join(" "),
    }
}
