//! Listener lifecycle.

use crate::{PromptGateway, create_router};
use parley_interface::InferenceBackend;
use std::{future::Future, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;

/// Binds `addr` and serves the gateway until `shutdown` resolves.
///
/// In-flight requests are allowed to finish once shutdown begins.
///
/// # Errors
///
/// Returns error if the address cannot be bound or the server fails.
pub async fn serve<B, F>(
    gateway: Arc<PromptGateway<B>>,
    addr: &str,
    shutdown: F,
) -> std::io::Result<()>
where
    B: InferenceBackend + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    info!(
        addr = %listener.local_addr()?,
        model = %gateway.model_info().model(),
        "Prompt gateway listening"
    );

    axum::serve(listener, create_router(gateway))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Prompt gateway stopped");
    Ok(())
}
