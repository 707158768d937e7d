//! filehost - concurrent static file server
//!
//! Serves files from a document root over HTTP/1.0 and HTTP/1.1, one
//! request per connection.

pub mod config;
pub mod http;
pub mod server;
