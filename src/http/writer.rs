use anyhow::Context;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::error::RequestError;
use crate::http::request::Version;
use crate::http::response::ResponseHead;

/// Writes one response to a client stream.
///
/// Every write goes through [`ResponseWriter::send_all`], which keeps
/// calling `write` until the whole slice is out, so short writes on the
/// socket never truncate a response.
pub struct ResponseWriter<'a, S> {
    stream: &'a mut S,
    chunk_size: usize,
}

impl<'a, S> ResponseWriter<'a, S>
where
    S: AsyncWrite + Unpin,
{
    pub fn new(stream: &'a mut S, chunk_size: usize) -> Self {
        Self {
            stream,
            chunk_size: chunk_size.max(1),
        }
    }

    /// Sends the plain-text error response for `err`.
    ///
    /// Nothing is written for `RequestError::Io`.
    pub async fn send_error(&mut self, version: Version, err: &RequestError) -> anyhow::Result<()> {
        let Some(head) = ResponseHead::error(version, err) else {
            return Ok(());
        };

        self.send_all(&head.to_bytes()).await?;

        let body = err.body();
        if !body.is_empty() {
            self.send_all(body.as_bytes()).await?;
        }

        self.stream.flush().await?;
        Ok(())
    }

    /// Sends `head` followed by the contents of `file`.
    ///
    /// At most `head.content_length` bytes of the file are sent. The file is
    /// consumed and closed when this returns, whichever way it returns. On a
    /// failed or zero-length send the rest of the body is abandoned.
    ///
    /// Returns the number of body bytes written.
    pub async fn send_file(&mut self, head: &ResponseHead, file: File) -> anyhow::Result<u64> {
        self.send_all(&head.to_bytes()).await?;

        let mut body = file.take(head.content_length);
        let mut chunk = vec![0u8; self.chunk_size];
        let mut sent: u64 = 0;

        loop {
            let n = body
                .read(&mut chunk)
                .await
                .context("failed to read file body")?;
            if n == 0 {
                break;
            }

            self.send_all(&chunk[..n])
                .await
                .with_context(|| format!("body transfer abandoned after {} bytes", sent))?;
            sent += n as u64;
        }

        if sent < head.content_length {
            tracing::warn!(
                expected = head.content_length,
                sent,
                "file shrank while streaming, response body is short"
            );
        }

        self.stream.flush().await?;
        Ok(sent)
    }

    async fn send_all(&mut self, buf: &[u8]) -> anyhow::Result<()> {
        let mut written = 0;

        while written < buf.len() {
            let n = self.stream.write(&buf[written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            written += n;
        }

        Ok(())
    }
}
