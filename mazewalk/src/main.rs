//! mazewalk — explore a maze and print the first-step distribution.
//!
//! Run: cargo run --bin mazewalk -- [--config maze.json] [--recursive]
//! Logging: MAZEWALK_LOG=debug

use log::info;
use mazewalk_lib::{MazeConfig, Options, explore};

fn run(options: &Options) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &options.config {
        Some(path) => {
            info!("loading maze from {}", path.display());
            MazeConfig::load(path)?
        }
        None => MazeConfig::default(),
    };
    println!("{}", explore(&config, options)?);
    Ok(())
}

fn main() {
    let env = env_logger::Env::new()
        .filter("MAZEWALK_LOG")
        .write_style("MAZEWALK_LOG_STYLE");
    env_logger::init_from_env(env);

    let options = match Options::parse_from_args(std::env::args_os()) {
        Ok(options) => options,
        Err(e) => e.exit(),
    };

    if let Err(e) = run(&options) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
