//! Retention policy configuration

use crate::bucket::Bucket;

/// How many of the most recent entries to keep in each bucket
///
/// The default keeps nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetentionPolicy {
    /// Entries created on the 1st of a month
    pub monthly: usize,
    /// Entries created on Sundays
    pub weekly: usize,
    /// All other entries
    pub daily: usize,
}

impl RetentionPolicy {
    /// Create a policy from signed counts, clamping negatives to 0
    pub fn new(monthly: i64, weekly: i64, daily: i64) -> Self {
        Self {
            monthly: clamp(monthly),
            weekly: clamp(weekly),
            daily: clamp(daily),
        }
    }

    /// Keep-count for one bucket
    pub fn keep_count(&self, bucket: Bucket) -> usize {
        match bucket {
            Bucket::Monthly => self.monthly,
            Bucket::Weekly => self.weekly,
            Bucket::Daily => self.daily,
        }
    }
}

fn clamp(count: i64) -> usize {
    usize::try_from(count.max(0)).unwrap_or(usize::MAX)
}
