//! Parley - HTTP prompt gateway for a local Ollama server.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match &cli.command {
        Commands::Serve => cli::handle_serve_command(&cli).await,
        Commands::ModelInfo => cli::handle_model_info_command(&cli),
        Commands::TokenCount { text } => cli::handle_token_count_command(text),
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
