use clap::Parser;
use galleria::{OrderEngine, OwnerId, backend::InMemory};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("galleria=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    // Load or create the item store
    let backend = match InMemory::load_from_file(&cli.data_file) {
        Ok(backend) => {
            tracing::info!("Loaded {} item(s) from {}", backend.len(), cli.data_file.display());
            backend
        }
        Err(e) => {
            tracing::warn!("Failed to load data file: {e:?}. Starting empty.");
            InMemory::new()
        }
    };

    let engine = OrderEngine::new(backend);
    let owner = OwnerId::from(cli.owner.as_str());

    let mutated = match &cli.command {
        Commands::Add(args) => {
            commands::add::run(&engine, &owner, args).await?;
            true
        }
        Commands::List => {
            commands::list::run(&engine, &owner).await?;
            false
        }
        Commands::Move(args) => {
            commands::move_item::run(&engine, &owner, args).await?;
            true
        }
        Commands::Rm(args) => {
            commands::rm::run(&engine, &owner, args).await?;
            true
        }
    };

    if mutated {
        engine.store().save_to_file(&cli.data_file)?;
    }

    Ok(())
}
