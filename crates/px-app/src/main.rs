use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

pub mod cli;
pub mod pipeline;
pub mod prompt;

fn main() {
    let cli = cli::Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let Some(image) = cli.image.clone() else {
        eprintln!("Usage: pixscii <image> [options]");
        std::process::exit(1);
    };

    match run(&cli, image) {
        Ok(saved) => {
            println!("Conversion complete! Result saved to '{}'", saved.display());
        }
        Err(e) => {
            eprintln!("pixscii: {e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &cli::Cli, image: PathBuf) -> Result<PathBuf> {
    let mut config = cli.base_config()?;

    // Prompts need a live terminal; --defaults or a pipe bypasses them and
    // the flag/default values apply directly.
    if !cli.defaults && std::io::stdin().is_terminal() {
        prompt::fill_interactive(&mut config)?;
    }

    let saved = pipeline::run(&config, &image, cli.font.as_deref())?;
    Ok(saved)
}
