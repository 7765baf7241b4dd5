use std::time::Duration;

/// Sliding window applied to list reads.
pub const DEFAULT_SLIDING_EXPIRATION: Duration = Duration::from_secs(10);

/// Hard ceiling applied to list reads.
pub const DEFAULT_ABSOLUTE_EXPIRATION: Duration = Duration::from_secs(60 * 60);

/// Expiration policy for a cache entry.
///
/// `sliding` is renewed on every read. `absolute` is measured from the write
/// and is never extended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheEntryOptions {
    pub sliding: Option<Duration>,
    pub absolute: Option<Duration>,
}

impl CacheEntryOptions {
    pub fn new(sliding: Option<Duration>, absolute: Option<Duration>) -> Self {
        Self { sliding, absolute }
    }

    pub fn with_sliding(mut self, sliding: Duration) -> Self {
        self.sliding = Some(sliding);
        self
    }

    pub fn with_absolute(mut self, absolute: Duration) -> Self {
        self.absolute = Some(absolute);
        self
    }

    /// Lifetime of a freshly written entry, or `None` if it never expires.
    pub fn initial_ttl(&self) -> Option<Duration> {
        next_ttl(self.sliding, self.absolute)
    }
}

/// Returns how long an entry may live after an access.
///
/// `remaining_absolute` is the time left until the absolute deadline.
pub fn next_ttl(sliding: Option<Duration>, remaining_absolute: Option<Duration>) -> Option<Duration> {
    match (sliding, remaining_absolute) {
        (Some(s), Some(a)) => Some(s.min(a)),
        (Some(s), None) => Some(s),
        (None, Some(a)) => Some(a),
        (None, None) => None,
    }
}
