// Path: crates/cli/src/commands/exec.rs
use crate::script::{self, Script};
use crate::util::load_config;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct ExecArgs {
    /// Script of calls to execute (TOML, `[[step]]` tables).
    #[clap(long)]
    pub script: PathBuf,

    /// Host config file (TOML).
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Exit non-zero if any step fails.
    #[clap(long)]
    pub strict: bool,
}

pub fn run(args: ExecArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    dnote_telemetry::init_tracing(&config.telemetry)?;

    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("reading script {}", args.script.display()))?;
    let script = Script::parse(&text)?;
    let failures = script::execute(&config, &script, &mut std::io::stdout().lock())?;
    tracing::info!(steps = script.step.len(), failures, "Script finished");

    if args.strict && failures > 0 {
        anyhow::bail!("{} step(s) failed", failures);
    }
    Ok(())
}
