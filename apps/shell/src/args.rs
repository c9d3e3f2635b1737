//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use kennel_training::{TrainingError, TrickArgs};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "kennel")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Teach dogs tricks and watch them (mostly) obey")]
pub(crate) struct Cli {
    /// Config file (TOML, JSON or YAML). Defaults to `kennel.*` in the working directory if present
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Log at debug level regardless of the configured level
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Walk a dog through learning, school and a full performance
    Demo {
        /// The dog's name
        #[arg(short, long, default_value = "Rover")]
        name: String,
    },
    /// Send a fresh dog to school, then ask for one trick
    Perform {
        /// The dog's name
        #[arg(short, long, default_value = "Rex")]
        name: String,
        /// Starting obedience (0-5); defaults to the configured value
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=5))]
        obedience: Option<u8>,
        /// Trick to perform
        #[arg(short, long)]
        trick: String,
        /// Trick argument as key=value, repeatable (e.g. --arg stick="a beautiful stick")
        #[arg(short, long = "arg", value_parser = parse_arg)]
        args: Vec<(String, String)>,
    },
    /// List the configured curriculum in teaching order
    Curriculum,
}

fn parse_arg(raw: &str) -> Result<(String, String), TrainingError> {
    TrickArgs::parse_pair(raw)
}
