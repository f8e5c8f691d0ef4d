use std::io;

/// Where a download continues from, derived from what the destination
/// already holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ResumeState {
    pub initial_size: u64,
    pub total_size: u64,
}

impl ResumeState {
    /// An unreadable length, or one that already reaches `total_size`,
    /// restarts the download from zero.
    pub fn from_current_len(current_len: io::Result<u64>, total_size: u64) -> ResumeState {
        let initial_size = match current_len {
            Ok(len) if len < total_size => len,
            _ => 0,
        };
        ResumeState {
            initial_size,
            total_size,
        }
    }

    pub fn is_resumable(&self) -> bool {
        self.initial_size > 0 && self.initial_size < self.total_size
    }

    pub fn remaining(&self) -> u64 {
        self.total_size.saturating_sub(self.initial_size)
    }

    pub fn range_header(&self) -> Option<String> {
        if self.initial_size > 0 {
            Some(format!("bytes={}-", self.initial_size))
        } else {
            None
        }
    }
}
