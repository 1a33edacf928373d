use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use estoque_core::InventoryReport;
use estoque_parser::{load_products, LoadError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_INPUT: &str = "dados/produtos1.txt";

// sysexits.h
const EXIT_DATAERR: u8 = 65;
const EXIT_IOERR: u8 = 74;

#[derive(Parser, Debug)]
#[command(author, version, about = "Supermarket inventory report", long_about = None)]
struct Cli {
    /// Products file: one `name;category;price;quantity;YYYY-MM-DD` per line
    #[arg(env = "ESTOQUE_INPUT", default_value = DEFAULT_INPUT)]
    input: PathBuf,
}

#[derive(Debug, Clone)]
struct Config {
    input_path: PathBuf,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            input_path: cli.input,
        }
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = Config::from(Cli::parse());

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(path = %config.input_path.display(), error = %err, "Report failed");
            eprintln!("{err}");
            ExitCode::from(exit_status(&err))
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let products = load_products(&config.input_path)?;

    let Some(report) = InventoryReport::build(&products) else {
        info!(path = %config.input_path.display(), "No products to report");
        println!("Nenhum produto carregado.");
        return Ok(());
    };

    println!("=== Arquivo: {} ===", config.input_path.display());
    print!("{report}");
    Ok(())
}

fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<LoadError>() {
        Some(LoadError::Io { .. }) => EXIT_IOERR,
        Some(LoadError::Format(_)) => EXIT_DATAERR,
        None => 1,
    }
}
