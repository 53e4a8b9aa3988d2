use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use engawa::app::AppContext;
use engawa::cli::{commands, Cli, Commands};
use engawa::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Posts => {
            commands::list_posts(&ctx).await?;
        }
        Commands::Products => {
            commands::list_products(&ctx).await?;
        }
        Commands::Show { key, product } => {
            commands::show_item(&ctx, &key, product).await?;
        }
        Commands::Recommend => {
            commands::recommend(&ctx).await?;
        }
        Commands::Tui => {
            engawa::tui::run(Arc::new(ctx)).await?;
        }
    }

    Ok(())
}
