use std::path::{Path, PathBuf};

use anyhow::{Context, ensure};
use serde::Deserialize;

/// Top-level server configuration.
///
/// Every field has a default, so an empty YAML document is a valid config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the acceptor binds (e.g. "127.0.0.1:8080")
    pub listen_addr: String,
    /// Upper bound on concurrently handled connections. `None` means unbounded.
    pub max_connections: Option<usize>,
}

/// Settings for the per-connection file serving core.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Directory every request target is resolved beneath
    pub document_root: PathBuf,
    /// Capacity of the request buffer; one byte is reserved, so at most
    /// `max_header_bytes - 1` bytes of request head are accepted.
    pub max_header_bytes: usize,
    /// Size of each file read while streaming a body
    pub chunk_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            max_connections: None,
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            document_root: PathBuf::from("./www"),
            max_header_bytes: 8192,
            chunk_size: 8000,
        }
    }
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// `FILEHOST_CONFIG` names an optional YAML file; `LISTEN` and `DOC_ROOT`
    /// override the listen address and document root on top of it.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("FILEHOST_CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("DOC_ROOT") {
            cfg.static_files.document_root = PathBuf::from(root);
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&text)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        // serde_yaml rejects an empty document, treat it as all defaults
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(text).context("failed to parse YAML config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Replaces the listen address with `0.0.0.0:<port>`.
    pub fn with_port(mut self, port: u16) -> Self {
        self.server.listen_addr = format!("0.0.0.0:{}", port);
        self
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        // room for at least "\r\n\r\n" plus the reserved byte
        ensure!(
            self.static_files.max_header_bytes >= 5,
            "static_files.max_header_bytes must be at least 5, got {}",
            self.static_files.max_header_bytes
        );
        ensure!(
            self.static_files.chunk_size > 0,
            "static_files.chunk_size must be greater than zero"
        );
        if let Some(limit) = self.server.max_connections {
            ensure!(limit > 0, "server.max_connections must be greater than zero");
        }
        Ok(())
    }
}
