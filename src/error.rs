use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("cannot build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("cannot create HTTP request to {url}: {source}")]
    RequestCreation {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("cannot fetch {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("cannot fetch {url}: source responded with code {status}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("cannot read response body from {url}: {source}")]
    Transfer {
        url: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot write index file {}: {source}", path.display())]
    IndexWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DownloadError {
    /// The HTTP status carried by an `UnexpectedStatus` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            DownloadError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = core::result::Result<T, DownloadError>;
