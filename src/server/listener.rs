use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::handler::Dispatcher;
use crate::http::connection::Connection;

/// Binds the configured address and serves it.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr)
        .await
        .with_context(|| format!("binding {}", cfg.server.listen_addr))?;

    serve(listener, cfg).await
}

/// Accepts connections on an already bound listener, one task per
/// connection. Returns only when `accept` fails.
pub async fn serve(listener: TcpListener, cfg: &Config) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    info!(
        addr = %addr,
        root = %cfg.server.root.display(),
        "Listening"
    );

    let dispatcher = Arc::new(Dispatcher::new(cfg));

    loop {
        let (socket, peer) = listener.accept().await.context("accepting connection")?;
        info!("Accepted connection from {}", peer);

        let dispatcher = dispatcher.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, dispatcher);
            match conn.run().await {
                Ok(()) => info!("Connection from {} closed", peer),
                Err(e) => tracing::error!("Connection error from {}: {}", peer, e),
            }
        });
    }
}
