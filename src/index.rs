use std::path::Path;
use tokio::fs;
use crate::downloader::Downloader;
use crate::error::DownloadError;

impl Downloader {
    /// Fetches a whole index file in one request and replaces `index_path`
    /// with it. No resume and no progress; bounded by the configured index
    /// timeout.
    pub async fn download_index(&self, index_path: impl AsRef<Path>, url: &str) -> crate::error::Result<()> {
        let index_path = index_path.as_ref();

        let request = self.client
            .get(url)
            .timeout(self.config.index_timeout)
            .build()
            .map_err(|source| DownloadError::RequestCreation {
                url: url.to_string(),
                source,
            })?;

        let response = self.client.execute(request).await.map_err(|source| DownloadError::Network {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content = response.bytes().await.map_err(|source| DownloadError::Transfer {
            url: url.to_string(),
            source: std::io::Error::other(source),
        })?;

        let write_error = |source| DownloadError::IndexWrite {
            path: index_path.to_path_buf(),
            source,
        };
        if let Some(parent) = index_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(write_error)?;
            }
        }
        fs::write(index_path, &content).await.map_err(write_error)?;

        tracing::debug!(url = %url, path = %index_path.display(), size = content.len(), "Wrote index");
        Ok(())
    }
}
