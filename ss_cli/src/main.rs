use crate::cli::{Cli, Commands};
use crate::error::Result;
use crate::settings::Settings;
use clap::Parser;
use ss_core::logger::init_tracing;
mod cli;
mod commands;
mod error;
mod report;
mod settings;

fn main() {
    if let Err(err) = try_main() {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Some(Commands::Models) => commands::models::handle(&mut out)?,
        None => {
            let settings = Settings::from_args(cli.compare)?;
            commands::compare::handle(&settings, &mut out)?
        }
    }

    Ok(())
}
