//! launchq CLI: open things by name.

use clap::Parser;
use launchq::config::{Catalog, Config};
use launchq::engine::Dispatcher;
use launchq::launcher::Launcher;
use launchq::telemetry::{TelemetryConfig, init_telemetry};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "launchq", version, about = "Open things by name")]
struct Cli {
    /// Things or aliases to open
    things: Vec<String>,
    /// List things and aliases with their targets
    #[arg(short, long)]
    list: bool,
    /// Maximum concurrent opens (0 = one per available CPU) [default: 1]
    #[arg(short = 'j', long)]
    max_workers: Option<usize>,
    /// Catalog file [default: ~/.launchq/config.toml]
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = Config::from_env()?;

    init_telemetry(TelemetryConfig {
        log_level: config.log_level.clone(),
    })?;

    let catalog = match cli.config {
        Some(path) => Catalog::load(&path)?,
        None => config.load_catalog()?,
    };

    if cli.list || cli.things.is_empty() {
        print_catalog(&catalog);
        if cli.things.is_empty() {
            return Ok(());
        }
    }

    let launcher = match config.launcher.as_deref() {
        Some(program) => Launcher::from_program(program)?,
        None => Launcher::detect()?,
    };

    let dispatcher = Dispatcher::new(Arc::new(catalog), launcher);
    let max_workers = cli.max_workers.unwrap_or(config.max_workers);
    dispatcher.dispatch_all(cli.things, max_workers).await?;

    Ok(())
}

fn print_catalog(catalog: &Catalog) {
    let entries = catalog.entries();
    if entries.is_empty() {
        println!("No things configured.");
        return;
    }

    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    for entry in entries {
        let name = entry.name;
        if entry.resolved {
            println!("{name:<width$} : {}", entry.target);
        } else {
            println!("{name:<width$} : <unresolved: {}>", entry.target);
        }
    }
}
