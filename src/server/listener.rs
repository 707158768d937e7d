use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::{Instrument, info, info_span, warn};

use crate::config::Config;
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.server.listen_addr))?;
    info!(
        "Listening on {}, serving {}",
        cfg.server.listen_addr,
        cfg.static_files.document_root.display()
    );

    serve(listener, cfg).await
}

/// Accepts connections forever, one task per connection.
///
/// With `server.max_connections` set, a permit is taken before each accept
/// and held by the connection task until it finishes.
pub async fn serve(listener: TcpListener, cfg: &Config) -> anyhow::Result<()> {
    let limit = cfg
        .server
        .max_connections
        .map(|n| Arc::new(Semaphore::new(n)));

    loop {
        let permit = match &limit {
            Some(sem) => Some(
                sem.clone()
                    .acquire_owned()
                    .await
                    .context("connection limiter closed")?,
            ),
            None => None,
        };

        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!(error = %e, "accept failed");
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let static_config = cfg.static_files.clone();
        tokio::spawn(
            async move {
                let conn = Connection::new(socket, static_config);
                if let Err(e) = conn.run().await {
                    warn!("Connection error from {}: {:#}", peer, e);
                }
                drop(permit);
            }
            .instrument(info_span!("conn", %peer)),
        );
    }
}
