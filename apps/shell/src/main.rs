mod args;
mod commands;

use crate::args::{Cli, Command};
use clap::Parser;
use kennel_kernel::config::load_config;
use kennel_kernel::domain::config::KennelConfig;
use kennel_logger::{LevelFilter, Logger};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config: KennelConfig = load_config(cli.config.as_deref())?;

    let mut logger = Logger::builder(env!("CARGO_PKG_NAME")).with_config(&config.logging)?;
    if cli.verbose {
        logger = logger.level(LevelFilter::DEBUG);
    }
    let _logger = logger.init()?;

    match cli.command {
        Command::Demo { name } => commands::demo(&config, &name)?,
        Command::Perform { name, obedience, trick, args } => {
            commands::perform(&config, &name, obedience, &trick, args)?;
        },
        Command::Curriculum => commands::curriculum(&config)?,
    }

    Ok(())
}
