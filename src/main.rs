use anyhow::Context;
use filehost::config::Config;
use filehost::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let mut cfg = Config::load()?;

    if let Some(port) = std::env::args().nth(1) {
        let port: u16 = port
            .parse()
            .with_context(|| format!("usage: filehost [port], got {:?}", port))?;
        cfg = cfg.with_port(port);
    }

    if !cfg.static_files.document_root.is_dir() {
        tracing::warn!(
            "Document root {} is not a directory, every request will be a 404",
            cfg.static_files.document_root.display()
        );
    }

    tokio::select! {
        res = server::listener::run(&cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
