use std::time::Duration;
use crate::error::DownloadError;

/// Bytes per second assumed when sizing the request timeout (56 KiB/s).
pub const DEFAULT_ASSUMED_THROUGHPUT: u64 = 56 * 1024;

pub const DEFAULT_INDEX_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct DownloadConfiguration {
    pub assumed_throughput: u64,
    pub index_timeout: Duration,
    pub user_agent: Option<String>,
}

pub struct DownloadConfigurationBuilder {
    config: DownloadConfiguration,
}

impl DownloadConfigurationBuilder {
    fn new(config: DownloadConfiguration) -> Self {
        Self {
            config
        }
    }

    pub fn set_assumed_throughput(mut self, bytes_per_second: u64) -> DownloadConfigurationBuilder {
        self.config.assumed_throughput = bytes_per_second;
        self
    }

    pub fn set_index_timeout(mut self, timeout: Duration) -> DownloadConfigurationBuilder {
        self.config.index_timeout = timeout;
        self
    }

    pub fn set_user_agent(mut self, user_agent: impl Into<String>) -> DownloadConfigurationBuilder {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> crate::error::Result<DownloadConfiguration> {
        self.validate()
    }

    fn validate(self) -> crate::error::Result<DownloadConfiguration> {
        if self.config.assumed_throughput == 0 {
            return Err(DownloadError::InvalidArgument(
                "assumed throughput must be greater than zero".to_string(),
            ));
        }

        Ok(self.config)
    }
}

impl DownloadConfiguration {
    pub fn new() -> DownloadConfigurationBuilder {
        DownloadConfigurationBuilder::new(DownloadConfiguration::default())
    }

    /// Timeout for transferring `remaining` bytes at the assumed throughput,
    /// in whole seconds. `None` when that rounds down to zero: the request
    /// then runs without a deadline.
    pub fn request_timeout(&self, remaining: u64) -> Option<Duration> {
        match remaining / self.assumed_throughput {
            0 => None,
            seconds => Some(Duration::from_secs(seconds)),
        }
    }
}

impl Default for DownloadConfiguration {
    fn default() -> Self {
        Self {
            assumed_throughput: DEFAULT_ASSUMED_THROUGHPUT,
            index_timeout: DEFAULT_INDEX_TIMEOUT,
            user_agent: None,
        }
    }
}
