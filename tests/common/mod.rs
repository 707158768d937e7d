//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use filehost::config::StaticFilesConfig;
use tokio::io::{AsyncReadExt, AsyncWriteExt, duplex};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A scratch document root, removed again on drop.
pub struct TempRoot {
    path: PathBuf,
}

impl TempRoot {
    pub fn new() -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "filehost-test-{}-{}",
            std::process::id(),
            id
        ));
        let _ = std::fs::remove_dir_all(&path);
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `contents` to `rel` (relative to the root), creating parents.
    pub fn file(&self, rel: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let full = self.path.join(rel);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full, contents).unwrap();
        full
    }

    pub fn dir(&self, rel: &str) -> PathBuf {
        let full = self.path.join(rel);
        std::fs::create_dir_all(&full).unwrap();
        full
    }

    pub fn settings(&self) -> StaticFilesConfig {
        StaticFilesConfig {
            document_root: self.path.clone(),
            ..StaticFilesConfig::default()
        }
    }
}

impl Drop for TempRoot {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// Runs one request through a `Connection` over an in-memory pipe and
/// returns every byte the server wrote before closing.
pub async fn exchange(settings: StaticFilesConfig, request: &[u8]) -> Vec<u8> {
    let (mut client, server) = duplex(64 * 1024);

    let handler = tokio::spawn(async move {
        filehost::http::connection::Connection::new(server, settings)
            .run()
            .await
    });

    client.write_all(request).await.unwrap();

    let mut response = Vec::new();
    client.read_to_end(&mut response).await.unwrap();
    handler.await.unwrap().unwrap();

    response
}

/// Splits a raw response into its header block (without the blank line) and body.
pub fn split_response(raw: &[u8]) -> (String, Vec<u8>) {
    let end = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has no header terminator");
    let head = String::from_utf8(raw[..end].to_vec()).unwrap();
    (head, raw[end + 4..].to_vec())
}

pub fn error_response(version: &str, code: u16, reason: &str, body: &str) -> Vec<u8> {
    format!(
        "{} {} {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: Close\r\n\r\n{}",
        version,
        code,
        reason,
        body.len(),
        body
    )
    .into_bytes()
}

pub const BAD_REQUEST_BODY: &str = "The request could not be parsed or is malformed\n";
pub const FORBIDDEN_BODY: &str =
    "404 The requested file can not be accessed due to a file permission issue\n";
pub const NOT_FOUND_BODY: &str = "404 The requested file can not be found in the document tree\n";
