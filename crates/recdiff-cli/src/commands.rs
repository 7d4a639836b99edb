use recdiff_core::Operation;
use tracing::debug;

use crate::cli::*;
use crate::config::CliConfig;
use crate::input;
use crate::output::{self, RenderOptions};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    let opts = RenderOptions {
        format: cli.format,
        pretty: config.pretty,
        color: config.color,
    };

    let out = match cli.command {
        Command::Diff(args) => cmd_diff(Operation::Auto, &args.inputs, args.key.as_deref(), &config, opts)?,
        Command::Records(args) => cmd_diff(Operation::Records, &args.inputs, None, &config, opts)?,
        Command::Collections(args) => cmd_diff(Operation::Collections, &args.inputs, args.key.as_deref(), &config, opts)?,
    };
    print!("{out}");
    Ok(())
}

fn cmd_diff(
    op: Operation,
    inputs: &[String],
    key: Option<&str>,
    config: &CliConfig,
    opts: RenderOptions,
) -> anyhow::Result<String> {
    let values = input::load_all(inputs)?;
    let key = config.resolve_key(key);
    debug!(operation = %op, inputs = values.len(), key = ?key, "running diff");

    let delta = recdiff_core::apply(op, &values, key)?;
    output::render(&delta, opts)
}
