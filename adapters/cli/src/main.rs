#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs an interactive Mars rover mission.

mod console;
mod logging;
mod session;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    console::{ConsoleInput, ConsoleOutput},
    session::SessionConfig,
};

/// Drive a rover across a toroidal planet, one command batch at a time.
#[derive(Debug, Parser)]
#[command(name = "mars-rover", version)]
struct Args {
    /// File holding the planet size (`5x4`) and, on the next line, the obstacles (`1,2 0,0`).
    #[arg(long, env = "PLANET_FILE")]
    planet_file: PathBuf,
    /// File holding the starting rover pose (`1,3:W`).
    #[arg(long, env = "ROVER_FILE")]
    rover_file: PathBuf,
    /// Print one frame per executed command instead of one per batch.
    #[arg(long)]
    replay: bool,
}

/// Entry point for the Mars rover command-line interface.
fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();
    let config = SessionConfig {
        planet_file: args.planet_file,
        rover_file: args.rover_file,
        replay: args.replay,
    };

    session::run(&config, &mut ConsoleInput, &mut ConsoleOutput).context("mission aborted")
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Args;

    #[test]
    fn arguments_parse_file_locations() {
        let args = Args::try_parse_from([
            "mars-rover",
            "--planet-file",
            "planet.txt",
            "--rover-file",
            "rover.txt",
            "--replay",
        ])
        .expect("arguments are valid");

        assert_eq!(args.planet_file, std::path::Path::new("planet.txt"));
        assert_eq!(args.rover_file, std::path::Path::new("rover.txt"));
        assert!(args.replay);
    }
}
