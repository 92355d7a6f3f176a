//! Pager statistics tracking.

use std::fmt;

/// Counters maintained by the [`Pager`](crate::buffer::Pager).
///
/// The pager is exclusively owned, so plain integers suffice; the struct is
/// `Copy` and can be snapshotted by value at any time.
///
/// # Example
/// ```
/// use litlesql::buffer::PagerStats;
///
/// let mut stats = PagerStats::default();
/// stats.cache_hits += 3;
/// stats.cache_misses += 1;
/// assert_eq!(stats.hit_rate(), 0.75);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PagerStats {
    /// Number of times a page was already resident.
    pub cache_hits: u64,

    /// Number of times a page had to be brought into the cache.
    pub cache_misses: u64,

    /// Number of pages read from the file (misses within the file length).
    pub pages_read: u64,

    /// Number of pages written back to the file.
    pub pages_written: u64,

    /// Number of pages allocated by appending to the file.
    pub pages_allocated: u64,
}

impl PagerStats {
    /// Calculate cache hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            0.0
        } else {
            self.cache_hits as f64 / total as f64
        }
    }
}

impl fmt::Display for PagerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, misses: {}, read: {}, written: {}, allocated: {}, hit_rate: {:.2}% }}",
            self.cache_hits,
            self.cache_misses,
            self.pages_read,
            self.pages_written,
            self.pages_allocated,
            self.hit_rate() * 100.0
        )
    }
}
