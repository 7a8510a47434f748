//! Gateway server command handler.

use super::Cli;
use anyhow::Context;
use parley_core::{init_observability, shutdown_observability};
use parley_models::OllamaClient;
use parley_server::{GatewayConfig, PromptGateway, serve};
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

/// Layers configuration: defaults, then the `--config` file, then
/// `PARLEY_*` environment variables, then command-line flags.
pub fn resolve_config(cli: &Cli) -> anyhow::Result<GatewayConfig> {
    let config = match &cli.config {
        Some(path) => GatewayConfig::from_file(path)?,
        None => GatewayConfig::default(),
    };
    Ok(apply_flags(config.merge_env()?, cli))
}

fn apply_flags(mut config: GatewayConfig, cli: &Cli) -> GatewayConfig {
    if let Some(host) = &cli.host {
        config = config.with_host(host.clone());
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }
    if let Some(backend_url) = &cli.backend_url {
        config = config.with_backend_url(backend_url.clone());
    }
    if let Some(model) = &cli.model {
        config = config.with_model(model.clone());
    }
    config
}

/// Handle the `serve` command.
#[tracing::instrument(skip_all)]
pub async fn handle_serve_command(cli: &Cli) -> anyhow::Result<()> {
    let config = resolve_config(cli)?;
    info!(
        addr = %config.bind_addr(),
        backend_url = %config.backend_url(),
        model = %config.model(),
        "Starting prompt gateway"
    );

    if let Err(e) = init_observability("parley", 60) {
        warn!(error = %e, "Metrics disabled");
    }

    let backend = OllamaClient::new_with_url(config.model(), config.backend_url());
    let gateway = Arc::new(PromptGateway::new(backend));

    let result = serve(gateway, &config.bind_addr(), shutdown_signal())
        .await
        .with_context(|| format!("Failed to serve on {}", config.bind_addr()));

    shutdown_observability();
    result
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 9001\nmodel = \"from-file\"").unwrap();
        let path = file.path().to_str().unwrap();

        let cli =
            Cli::try_parse_from(["parley", "--config", path, "--model", "from-flag", "serve"])
                .unwrap();
        let config = apply_flags(GatewayConfig::from_file(path).unwrap(), &cli);

        assert_eq!(*config.port(), 9001);
        assert_eq!(config.model(), "from-flag");
    }

    #[test]
    fn test_no_flags_keeps_config() {
        let cli = Cli::try_parse_from(["parley", "model-info"]).unwrap();
        let config = apply_flags(GatewayConfig::default(), &cli);
        assert_eq!(config, GatewayConfig::default());
    }

    #[test]
    fn test_token_count_subcommand_parses() {
        let cli = Cli::try_parse_from(["parley", "token-count", "a b  c"]).unwrap();
        match cli.command {
            crate::cli::Commands::TokenCount { text } => assert_eq!(text, "a b  c"),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
