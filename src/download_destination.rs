use std::io;
use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::fs;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWrite;

/// A writable sink positioned at its end that can report how many bytes it
/// already holds.
#[async_trait::async_trait]
pub trait DownloadDestination: AsyncWrite + Unpin + Send {
    async fn current_len(&mut self) -> io::Result<u64>;
}

#[async_trait::async_trait]
impl DownloadDestination for File {
    async fn current_len(&mut self) -> io::Result<u64> {
        let metadata = self.metadata().await?;
        Ok(metadata.len())
    }
}

/// Opens `path` for appending, creating it and its parent directories
/// when missing. Existing content is kept so a download can resume.
pub async fn open_file_destination(path: impl AsRef<Path>) -> io::Result<File> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    OpenOptions::new().
        create(true).
        append(true).
        open(path).await
}

/// Append-only in-memory destination.
#[derive(Debug, Default, Clone)]
pub struct MemoryDestination {
    bytes: Vec<u8>,
}

impl MemoryDestination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.bytes
    }
}

impl From<Vec<u8>> for MemoryDestination {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl AsyncWrite for MemoryDestination {
    fn poll_write(self: Pin<&mut Self>, _cx: &mut Context<'_>, buf: &[u8]) -> Poll<io::Result<usize>> {
        self.get_mut().bytes.extend_from_slice(buf);
        Poll::Ready(Ok(buf.len()))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

#[async_trait::async_trait]
impl DownloadDestination for MemoryDestination {
    async fn current_len(&mut self) -> io::Result<u64> {
        Ok(self.bytes.len() as u64)
    }
}
