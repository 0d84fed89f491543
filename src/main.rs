use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use bin2cpp::cli::Cli;
use bin2cpp::config::{self, PipelineConfig};
use bin2cpp::{logging, pipeline};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.logging_mode, cli.debug)?;
    info!("bin2cpp starting");
    info!("logging mode: {:?}", cli.logging_mode);

    let defaults = config::load()?;
    let config = PipelineConfig::new(
        &cli.input,
        &cli.output,
        defaults.resolve_name(cli.name.as_deref()),
        defaults.resolve_compress(cli.compress),
    )?;

    let conversion = pipeline::run(&config)
        .with_context(|| format!("Failed to convert {}", cli.input.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&conversion)?);
    }
    Ok(())
}
