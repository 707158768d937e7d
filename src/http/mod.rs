//! HTTP/1.x static file serving.
//!
//! Each connection carries exactly one request and is closed after the
//! response. The work is split into stages, each in its own submodule:
//!
//! - **`reader`**: accumulates the request head into a bounded buffer
//! - **`parser`**: tokenizes and validates the request line
//! - **`resolver`**: maps the target to a file under the document root
//! - **`mime`**: Content-Type inference from file extensions
//! - **`response`**: status codes and the response header block
//! - **`writer`**: sends header blocks, error bodies and file bodies
//! - **`error`**: the request failure taxonomy and its status/body table
//! - **`connection`**: drives one connection through all of the above
//!
//! # Connection flow
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← until "\r\n\r\n", capacity, EOF or I/O error
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │   Parsing   │ ← request line, method, version
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │  Resolving  │ ← target → file (or directory index)
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │   Writing   │ ← header block, then file body
//!        └──────┬──────┘
//!               ▼
//!            Closed
//! ```
//!
//! A failure at any stage sends its error response (unless the stream
//! itself failed) and goes straight to Closed.
//!
//! # Example
//!
//! ```ignore
//! use filehost::config::StaticFilesConfig;
//! use filehost::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         tokio::spawn(async move {
//!             let conn = Connection::new(socket, StaticFilesConfig::default());
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod error;
pub mod mime;
pub mod parser;
pub mod reader;
pub mod request;
pub mod resolver;
pub mod response;
pub mod writer;
