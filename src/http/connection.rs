use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::config::StaticFilesConfig;
use crate::http::error::RequestError;
use crate::http::parser::{ParseFailure, parse_request_line};
use crate::http::reader::read_request_head;
use crate::http::request::Version;
use crate::http::resolver::resolve;
use crate::http::response::ResponseHead;
use crate::http::writer::ResponseWriter;

/// One client connection, handled from first byte to close.
///
/// `run` consumes the connection, so the stream is shut down and dropped
/// exactly once whichever stage the request stops at.
pub struct Connection<S> {
    stream: S,
    settings: StaticFilesConfig,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, settings: StaticFilesConfig) -> Self {
        Self { stream, settings }
    }

    /// Reads one request, answers it and closes the stream.
    ///
    /// Only failures of the stream itself are returned; every request-level
    /// failure has already been answered with its error response.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let result = self.handle().await;

        if let Err(e) = self.stream.shutdown().await {
            debug!(error = %e, "shutdown failed");
        }

        result
    }

    async fn handle(&mut self) -> anyhow::Result<()> {
        let head = match read_request_head(&mut self.stream, self.settings.max_header_bytes).await {
            Ok(Some(head)) => head,
            Ok(None) => return Ok(()),
            Err(RequestError::Io(e)) => {
                return Err(anyhow::Error::new(e).context("failed to read request"));
            }
            Err(err) => {
                self.reject(Version::Http11, err).await;
                return Ok(());
            }
        };

        let request = match parse_request_line(&head) {
            Ok(request) => request,
            Err(ParseFailure { error, version }) => {
                self.reject(version, error).await;
                return Ok(());
            }
        };

        debug!(
            method = ?request.method,
            uri = %request.target,
            version = %request.version,
            "request parsed"
        );

        let resolved = match resolve(&self.settings.document_root, &request.target).await {
            Ok(resolved) => resolved,
            Err(err) => {
                // a target without a leading '/' is a malformed request line
                let version = match err {
                    RequestError::MalformedRequest => Version::Http11,
                    _ => request.version,
                };
                self.reject(version, err).await;
                return Ok(());
            }
        };

        let file = match resolved.open().await {
            Ok(file) => file,
            Err(err) => {
                self.reject(request.version, err).await;
                return Ok(());
            }
        };

        let head = ResponseHead::ok(request.version, resolved.content_type, resolved.size);
        let sent = ResponseWriter::new(&mut self.stream, self.settings.chunk_size)
            .send_file(&head, file)
            .await?;

        info!(
            uri = %request.target,
            path = %resolved.path.display(),
            status = head.status.as_u16(),
            bytes = sent,
            "file served"
        );

        Ok(())
    }

    async fn reject(&mut self, version: Version, err: RequestError) {
        let status = err.status().map(|s| s.as_u16());
        debug!(error = %err, ?status, "request rejected");

        if let Err(e) = ResponseWriter::new(&mut self.stream, self.settings.chunk_size)
            .send_error(version, &err)
            .await
        {
            debug!(error = %e, "failed to send error response");
        }
    }
}
