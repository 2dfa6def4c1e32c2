// src/bin/cli.rs
use color_eyre::eyre::Result;

use sortcheck::cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    match cli::run() {
        Ok(outcome) if outcome.passed() => Ok(()),
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    }
}
