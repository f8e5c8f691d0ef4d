//! # resume-downloader
//!
//! Resumable single-file downloads over HTTP.
//!
//! Features:
//! - Resume from whatever the destination already holds (`Range: bytes=<n>-`)
//! - Per-read progress reporting without buffering the body
//! - Request timeout sized from the remaining bytes
//! - One-shot index file fetch

mod request;
mod download_tracker;
mod index;
pub mod error;
pub mod progress_reader;
pub mod resume_state;
pub mod response_status;
pub mod download_configuration;
pub mod download_destination;
pub mod downloader;

pub use download_configuration::DownloadConfiguration;
pub use download_destination::{open_file_destination, DownloadDestination, MemoryDestination};
pub use download_tracker::ProgressHandler;
pub use downloader::Downloader;
pub use error::{DownloadError, Result};
pub use response_status::ResponseStatus;
