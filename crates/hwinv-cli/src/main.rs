//! hwinv CLI
//!
//! Command-line front end for the hardware inventory

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hwinv_core::logging_facility;

mod commands;
mod config;

use config::Config;

#[derive(Debug, Parser)]
#[command(name = "hwinv")]
#[command(about = "hwinv - Rented hardware inventory", long_about = None)]
struct Cli {
    /// Path to a TOML config file (defaults to ./hwinv.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the stored inventory; overrides config and environment
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Add a hardware item
    Add(commands::hardware::AddArgs),
    /// Change fields of an existing item
    Update(commands::hardware::UpdateArgs),
    /// Remove an item by id
    Remove(commands::hardware::RemoveArgs),
    /// Show one item in detail
    Show(commands::hardware::ShowArgs),
    /// List items, optionally filtered or grouped by name
    List(commands::listing::ListArgs),
    /// List distinct brands
    Brands,
    /// Count items sharing a name
    Stock(commands::listing::StockArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    logging_facility::init(config.log_profile);
    tracing::debug!(
        component = module_path!(),
        data_dir = %config.data_dir.display(),
        profile = ?config.log_profile,
        "Configuration loaded"
    );

    let mut repo = commands::open_repository(&config).await?;

    match cli.command {
        Commands::Add(args) => commands::hardware::execute_add(&mut repo, args).await,
        Commands::Update(args) => commands::hardware::execute_update(&mut repo, args).await,
        Commands::Remove(args) => commands::hardware::execute_remove(&mut repo, args).await,
        Commands::Show(args) => commands::hardware::execute_show(&repo, args),
        Commands::List(args) => commands::listing::execute_list(&repo, args),
        Commands::Brands => commands::listing::execute_brands(&repo),
        Commands::Stock(args) => commands::listing::execute_stock(&repo, args),
    }
}
