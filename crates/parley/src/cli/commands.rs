//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parley - HTTP prompt gateway for a local Ollama server
#[derive(Parser, Debug)]
#[command(name = "parley")]
#[command(about = "HTTP prompt gateway for a local Ollama server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Interface to bind (overrides PARLEY_HOST)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Port to bind (overrides PARLEY_PORT)
    #[arg(short, long, global = true)]
    pub port: Option<u16>,

    /// Ollama base URL (overrides PARLEY_BACKEND_URL)
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Backend model name (overrides PARLEY_MODEL)
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP gateway until Ctrl+C or SIGTERM
    Serve,

    /// Print the static model descriptor as JSON
    ModelInfo,

    /// Print the whitespace token count of a text as JSON
    TokenCount {
        /// Text to count
        text: String,
    },
}
