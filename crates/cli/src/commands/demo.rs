// Path: crates/cli/src/commands/demo.rs
use crate::script::{self, Script};
use crate::util::load_config;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

const DEMO_SCRIPT: &str = include_str!("../../scripts/demo.toml");

#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Host config file (TOML).
    #[clap(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: DemoArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    dnote_telemetry::init_tracing(&config.telemetry)?;

    let script = Script::parse(DEMO_SCRIPT)?;
    let failures = script::execute(&config, &script, &mut std::io::stdout().lock())?;
    if failures > 0 {
        anyhow::bail!("{} demo step(s) failed", failures);
    }
    Ok(())
}
