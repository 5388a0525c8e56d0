// Path: crates/cli/src/main.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo
    )
)]

//! # dnote CLI
//!
//! Runs note store and delegator calls against an in-memory host.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod script;
mod util;

use commands::*;

#[derive(Parser, Debug)]
#[clap(
    name = "dnote",
    version,
    about = "Drive the dnote note store and delegator.",
    long_about = "Deploys the string handler, note store and delegator on an in-memory host and executes calls against them, printing one JSON object per call on stdout."
)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the reference create/modify/delete scenario through the delegator.
    Demo(demo::DemoArgs),

    /// Execute a TOML script of calls.
    Exec(exec::ExecArgs),

    /// Print the effective host configuration as TOML.
    Config(config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo(args) => demo::run(args),
        Commands::Exec(args) => exec::run(args),
        Commands::Config(args) => config::run(args),
    }
}
