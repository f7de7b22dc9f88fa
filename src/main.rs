use anyhow::{Context, Result};
use chess_api::ChessApiClient;
use chess_api_cli::Cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries only the move
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.client_config();
    tracing::debug!(?config, "client configuration");

    let client = ChessApiClient::from_config(&config).context("Failed to build HTTP client")?;

    let san = match client.best_move(&cli.fen, &cli.constraint()).await {
        Ok(san) => san,
        Err(err) => {
            let kind = err.kind();
            return Err(anyhow::Error::new(err)
                .context(format!("{kind} error from {}", client.endpoint())));
        }
    };

    println!("{san}");
    Ok(())
}
