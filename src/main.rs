mod args;
mod classifier;
mod output;
mod parsers;
mod records;
mod tests;

use anyhow::Context;
use args::{Cli, ConfigFile};
use clap::Parser;
use classifier::classify_file;
use log::{error, info};
use output::OutputWriter;
use parsers::lookup_parser::load_lookup_table;
use std::time::Instant;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    // If a config file is provided, it replaces the input and output options
    let config = if let Some(config_path) = cli.config_file {
        match confy::load_path::<ConfigFile>(&config_path) {
            Ok(cfg_file) => cfg_file,
            Err(e) => {
                error!("Error loading configuration file {}: {}", config_path, e);
                std::process::exit(1);
            }
        }
    } else {
        ConfigFile {
            input: cli.input,
            output: cli.output,
        }
    };

    if let Err(e) = run(&config) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(config: &ConfigFile) -> anyhow::Result<()> {
    let start = Instant::now();

    let rules = load_lookup_table(&config.input.lookup)
        .with_context(|| format!("failed to build lookup table from {}", config.input.lookup))?;
    info!("Loaded {} tag rules from {}", rules.len(), config.input.lookup);

    let classification = classify_file(&config.input.flows, &rules)
        .with_context(|| format!("failed to read flow log {}", config.input.flows))?;
    info!(
        "Classified flow log {}: {} untagged, {} skipped",
        config.input.flows, classification.untagged, classification.skipped
    );

    OutputWriter::new(&config.output).write(&classification)?;

    info!("Duration: {:.4} seconds", start.elapsed().as_secs_f64());
    Ok(())
}
