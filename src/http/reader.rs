use bytes::{BufMut, Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::http::error::RequestError;

const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Reads a request head into a buffer of `capacity` bytes.
///
/// One byte of the capacity is reserved, so at most `capacity - 1` bytes are
/// ever held. Returns:
/// - `Ok(Some(head))` with everything up to and including `\r\n\r\n`
/// - `Ok(None)` if the peer closed before a full head arrived
/// - `Err(HeaderTooLarge)` if the buffer filled without a terminator
/// - `Err(Io)` if a read failed
pub async fn read_request_head<S>(
    stream: &mut S,
    capacity: usize,
) -> Result<Option<Bytes>, RequestError>
where
    S: AsyncRead + Unpin,
{
    let limit = capacity.saturating_sub(1);
    let mut buffer = BytesMut::with_capacity(limit);
    let mut scanned = 0;

    loop {
        if buffer.len() >= limit {
            return Err(RequestError::HeaderTooLarge);
        }

        let room = limit - buffer.len();
        let mut window = (&mut buffer).limit(room);
        let n = stream.read_buf(&mut window).await?;

        if n == 0 {
            tracing::debug!(buffered = buffer.len(), "peer closed before request head completed");
            return Ok(None);
        }

        if let Some(end) = find_terminator(&buffer, scanned) {
            return Ok(Some(buffer.split_to(end + HEADER_TERMINATOR.len()).freeze()));
        }

        // the terminator may straddle two reads
        scanned = buffer.len().saturating_sub(HEADER_TERMINATOR.len() - 1);
    }
}

fn find_terminator(buf: &[u8], from: usize) -> Option<usize> {
    buf[from..]
        .windows(HEADER_TERMINATOR.len())
        .position(|w| w == HEADER_TERMINATOR)
        .map(|pos| from + pos)
}
