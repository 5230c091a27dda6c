use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::{api::cli::Cli, config::Config, converter::convert, ui::{print_report, prompt_export_path}};

mod api;
mod config;
mod converter;
mod error;
mod mapping;
mod stager;
mod stores;
mod types;
mod ui;
mod writer;
mod youtube;

fn main() -> Result<()> {
    let cli = Cli {};
    let program = cli.run();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(program.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let export_path = match program.export_path {
        Some(export_path) => export_path,
        None => prompt_export_path().context("Cannot read export path")?,
    };

    let config = Config::new(&export_path)?;

    let report = convert(&config).with_context(|| {
        format!("Cannot convert \"{}\"", config.get_export_path().display())
    })?;

    print_report(&report);

    Ok(())
}
