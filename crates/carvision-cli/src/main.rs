use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use carvision_core::{ImportConfig, DEFAULT_OUT_DIR};

#[derive(Debug, Parser)]
#[command(name = "carvision")]
#[command(about = "Import a mobile.de inventory export into the site's car JSON files")]
struct Cli {
    /// JSON file with the inventory export (ads array or API response)
    #[arg(long)]
    input: PathBuf,

    /// Output directory for cars.json and cars/<slug>.json
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// Delete existing cars/*.json before writing
    #[arg(long)]
    clear: bool,

    /// Order cars by status (available, reserved, other) and title
    #[arg(long)]
    sort: bool,

    /// Map the input and report what would be written without writing
    #[arg(long)]
    dry_run: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn import_config(&self) -> ImportConfig {
        ImportConfig {
            input: self.input.clone(),
            out_dir: self.out_dir.clone(),
            clear: self.clear,
            sort: self.sort,
            dry_run: self.dry_run,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.import_config();
    tracing::debug!(?config, "starting import");

    let summary = carvision_importer::run_import(&config)?;
    println!("{summary}");
    Ok(())
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
