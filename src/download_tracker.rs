/// Caller-supplied progress handler, called with `(total_size, downloaded_so_far)`.
pub type ProgressHandler<'a> = &'a mut (dyn FnMut(u64, u64) + Send);

/// Running total for a single download call. Turns per-read deltas into
/// cumulative progress for the caller's handler.
pub struct DownloadTracker<'a> {
    total_size: u64,
    downloaded_so_far: u64,
    handler: ProgressHandler<'a>,
}

impl<'a> DownloadTracker<'a> {
    pub fn new(total_size: u64, initial_size: u64, handler: ProgressHandler<'a>) -> DownloadTracker<'a> {
        DownloadTracker {
            total_size,
            downloaded_so_far: initial_size,
            handler,
        }
    }

    pub fn advance(&mut self, delta: u64) {
        self.downloaded_so_far += delta;
        (self.handler)(self.total_size, self.downloaded_so_far);
    }

    pub fn downloaded_so_far(&self) -> u64 {
        self.downloaded_so_far
    }
}

#[cfg(test)]
mod test {
    use crate::download_tracker::DownloadTracker;

    #[test]
    fn test_cumulative_from_initial_size() {
        let mut reports = Vec::new();
        let mut handler = |total: u64, so_far: u64| reports.push((total, so_far));
        let mut tracker = DownloadTracker::new(5000, 1000, &mut handler);
        tracker.advance(1500);
        tracker.advance(0);
        tracker.advance(2500);
        assert_eq!(tracker.downloaded_so_far(), 5000);
        drop(tracker);

        assert_eq!(reports, vec![(5000, 2500), (5000, 2500), (5000, 5000)]);
    }
}
