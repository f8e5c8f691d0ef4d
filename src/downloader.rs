use std::sync::Arc;
use reqwest::Client;
use tokio::io::{AsyncRead, AsyncWriteExt};
use crate::download_configuration::DownloadConfiguration;
use crate::download_destination::DownloadDestination;
use crate::download_tracker::{DownloadTracker, ProgressHandler};
use crate::error::DownloadError;
use crate::progress_reader::{Close, ProgressReader};
use crate::request::{get_download_request, ResponseBody};
use crate::response_status::ResponseStatus;
use crate::resume_state::ResumeState;

/// Fetches the bytes a destination is still missing.
///
/// Every call is independent: the progress total lives inside the call and
/// the downloader holds no per-download state. Two calls must not share a
/// destination.
#[derive(Clone)]
pub struct Downloader {
    pub(crate) config: Arc<DownloadConfiguration>,
    pub(crate) client: Client,
}

impl Downloader {
    pub fn new(config: DownloadConfiguration) -> crate::error::Result<Downloader> {
        let mut builder = Client::builder();
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        let client = builder.build().map_err(DownloadError::Client)?;
        Ok(Downloader::with_client(config, client))
    }

    pub fn with_client(config: DownloadConfiguration, client: Client) -> Downloader {
        Downloader {
            config: Arc::new(config),
            client,
        }
    }

    pub fn config(&self) -> &DownloadConfiguration {
        &self.config
    }

    /// Appends the rest of `url` to `destination`, resuming with a range
    /// request when the destination already holds part of `total_size`.
    ///
    /// A destination that is empty, unreadable, or already at least
    /// `total_size` long is fetched from the start and the new bytes are
    /// still appended; nothing is truncated. Accepted statuses are 200, 206
    /// and 416, and the body is copied for all three. The final size is not
    /// verified.
    ///
    /// `on_progress` receives `(total_size, downloaded_so_far)` after every
    /// read, counting from the resume offset.
    pub async fn download<D>(
        &self,
        url: &str,
        destination: Option<&mut D>,
        total_size: u64,
        on_progress: Option<ProgressHandler<'_>>,
    ) -> crate::error::Result<ResponseStatus>
        where D: DownloadDestination + ?Sized {
        let destination = match destination {
            Some(destination) => destination,
            None => {
                return Err(DownloadError::InvalidArgument("cannot fill a missing destination".to_string()));
            }
        };

        let state = ResumeState::from_current_len(destination.current_len().await, total_size);
        tracing::debug!(
            url = %url,
            initial_size = state.initial_size,
            total_size,
            resumable = state.is_resumable(),
            "Resolved resume offset"
        );

        let request = get_download_request(&self.client, &self.config, url, &state)?;
        let response = self.client.execute(request).await.map_err(|source| DownloadError::Network {
            url: url.to_string(),
            source,
        })?;

        let code = response.status().as_u16();
        let status = match ResponseStatus::classify(code) {
            Some(status) => status,
            None => {
                drop(response);
                return Err(DownloadError::UnexpectedStatus {
                    url: url.to_string(),
                    status: code,
                });
            }
        };
        tracing::debug!(url = %url, status = code, "Accepted response");

        let body = ResponseBody::new(response);
        let copied = match on_progress {
            Some(handler) => {
                let mut tracker = DownloadTracker::new(total_size, state.initial_size, handler);
                let mut reader = ProgressReader::closable(body, |delta| tracker.advance(delta));
                let copied = transfer(&mut reader, destination, url).await;
                // close only releases the connection; the copy result decides the outcome
                let _ = reader.close();
                drop(reader);
                tracing::trace!(url = %url, downloaded = tracker.downloaded_so_far(), "Reported progress");
                copied
            }
            None => {
                let mut reader = body;
                let copied = transfer(&mut reader, destination, url).await;
                // same as above, close errors are ignored
                let _ = reader.close();
                copied
            }
        }?;

        tracing::debug!(url = %url, copied, status = %status, "Finished download");
        Ok(status)
    }
}

async fn transfer<R, D>(reader: &mut R, destination: &mut D, url: &str) -> crate::error::Result<u64>
    where R: AsyncRead + Unpin + ?Sized,
          D: DownloadDestination + ?Sized {
    let copied = tokio::io::copy(reader, destination).await.map_err(|source| DownloadError::Transfer {
        url: url.to_string(),
        source,
    })?;
    destination.flush().await.map_err(|source| DownloadError::Transfer {
        url: url.to_string(),
        source,
    })?;
    Ok(copied)
}

#[cfg(test)]
mod test {
    use crate::download_configuration::DownloadConfiguration;
    use crate::download_destination::MemoryDestination;
    use crate::downloader::Downloader;
    use crate::error::DownloadError;

    #[tokio::test]
    async fn test_missing_destination() {
        let downloader = Downloader::new(DownloadConfiguration::default()).unwrap();
        let result = downloader
            .download::<MemoryDestination>("http://127.0.0.1:9/core.tar.bz2", None, 100, None)
            .await;
        assert!(matches!(result, Err(DownloadError::InvalidArgument(_))));
    }

    #[test]
    fn test_invalid_user_agent_fails_client_build() {
        let config = DownloadConfiguration::new().set_user_agent("bad\nagent").build().unwrap();
        match Downloader::new(config) {
            Err(error @ DownloadError::Client(_)) => {
                assert!(error.to_string().starts_with("cannot build HTTP client: "));
            }
            Err(other) => panic!("expected a client error, got {:?}", other),
            Ok(_) => panic!("expected a client error"),
        }
    }

    #[tokio::test]
    async fn test_malformed_url() {
        let downloader = Downloader::new(DownloadConfiguration::default()).unwrap();
        let mut destination = MemoryDestination::new();
        let result = downloader.download("::not a url::", Some(&mut destination), 100, None).await;
        assert!(matches!(result, Err(DownloadError::RequestCreation { .. })));
        assert!(destination.is_empty());
    }
}
