use std::pin::Pin;

use async_stream::stream;
use async_trait::async_trait;
use bytes::Bytes;
use futures_core::stream::Stream;
use futures_util::StreamExt;
use reqwest::Client;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, error, info, instrument};

use crate::accumulator::ResponseAccumulator;
use crate::error::FetchError;

/// Type alias for raw byte streams of a response body.
pub type RawByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, FetchError>> + Send>>;

/// Low-level body source abstraction.
///
/// Implementors turn a URL into a stream of body chunks. Higher-level
/// accumulation is performed by [`fetch_into`].
#[async_trait]
pub trait BodySource: Send + Sync {
    async fn get(&self, url: &str) -> Result<RawByteStream, FetchError>;
}

/// HTTP implementation backed by reqwest. Connection handling, redirects
/// and chunked-transfer decoding all stay inside reqwest.
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl BodySource for HttpSource {
    #[instrument(target = "jsonfetch::client", skip(self))]
    async fn get(&self, url: &str) -> Result<RawByteStream, FetchError> {
        debug!(target = "jsonfetch::client", url = %url, "sending GET request");

        let response = self.client.get(url).send().await.map_err(|e| {
            error!(target = "jsonfetch::client", error = %e, "HTTP request failed");
            FetchError::Http(e.to_string())
        })?;

        let status = response.status();
        debug!(target = "jsonfetch::client", status = %status, "received response");

        if !status.is_success() {
            error!(target = "jsonfetch::client", status = %status, "server returned error status");
            return Err(FetchError::Status(status.as_u16()));
        }

        let stream = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| FetchError::Http(e.to_string())));
        Ok(Box::pin(stream))
    }
}

/// Canned-chunk source for tests and offline runs. Chunks are replayed in
/// order, each as one stream item.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    chunks: Vec<Bytes>,
}

impl StaticSource {
    pub fn new<I, B>(chunks: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Bytes>,
    {
        Self {
            chunks: chunks.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl BodySource for StaticSource {
    async fn get(&self, _url: &str) -> Result<RawByteStream, FetchError> {
        let chunks = self.chunks.clone();
        Ok(Box::pin(futures_util::stream::iter(
            chunks.into_iter().map(Ok::<Bytes, FetchError>),
        )))
    }
}

/// Adapt an `AsyncRead` into a [`RawByteStream`], reading `buf_size` bytes
/// at a time.
pub fn byte_stream_from_reader<R>(mut reader: R, buf_size: usize) -> RawByteStream
where
    R: AsyncRead + Send + Unpin + 'static,
{
    Box::pin(stream! {
        let mut buf = vec![0u8; buf_size.max(1024)];
        loop {
            match reader.read(&mut buf).await {
                Ok(0) => break,
                Ok(n) => yield Ok(Bytes::copy_from_slice(&buf[..n])),
                Err(e) => {
                    yield Err(FetchError::Http(e.to_string()));
                    break;
                }
            }
        }
    })
}

/// Issue a GET against `url` and drain the body into the accumulator.
///
/// The accumulator sees every chunk, in order, before this returns. On a
/// mid-body error the bytes already offered stay counted so the caller can
/// still report the logical size collected so far.
#[instrument(target = "jsonfetch::client", skip(source, acc))]
pub async fn fetch_into(
    source: &dyn BodySource,
    url: &str,
    acc: &mut ResponseAccumulator,
) -> Result<(), FetchError> {
    let mut stream = source.get(url).await?;

    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        acc.offer(&bytes);
    }

    info!(
        target = "jsonfetch::client",
        stored_len = acc.stored_len(),
        logical_len = acc.logical_len(),
        truncated = acc.is_truncated(),
        "body accumulated"
    );
    Ok(())
}
