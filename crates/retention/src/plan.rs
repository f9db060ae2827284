//! Keep/delete planning
//!
//! Planning is pure: it partitions entries without touching the filesystem.
//! Each bucket is sorted ascending by date (ties broken by path) and split so
//! the newest `K` entries are kept and the rest are deleted.

use crate::bucket::Bucket;
use crate::entry::DatedDir;
use crate::policy::RetentionPolicy;

/// Partition of one bucket
#[derive(Debug, Clone, Default)]
pub struct BucketPlan {
    /// Newest entries, ascending
    pub keep: Vec<DatedDir>,
    /// Oldest entries, ascending
    pub delete: Vec<DatedDir>,
}

/// Partition of all scanned entries into keep and delete sets
#[derive(Debug, Clone, Default)]
pub struct PrunePlan {
    monthly: BucketPlan,
    weekly: BucketPlan,
    daily: BucketPlan,
}

impl PrunePlan {
    /// Classify, sort and split entries according to `policy`
    pub fn build(entries: impl IntoIterator<Item = DatedDir>, policy: &RetentionPolicy) -> Self {
        let mut plan = PrunePlan::default();

        for entry in entries {
            plan.bucket_mut(entry.bucket()).delete.push(entry);
        }

        for bucket in Bucket::ALL {
            let keep_count = policy.keep_count(bucket);
            let part = plan.bucket_mut(bucket);

            part.delete
                .sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.path.cmp(&b.path)));
            let split = part.delete.len().saturating_sub(keep_count);
            part.keep = part.delete.split_off(split);
        }

        plan
    }

    /// Partition for one bucket
    pub fn bucket(&self, bucket: Bucket) -> &BucketPlan {
        match bucket {
            Bucket::Monthly => &self.monthly,
            Bucket::Weekly => &self.weekly,
            Bucket::Daily => &self.daily,
        }
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut BucketPlan {
        match bucket {
            Bucket::Monthly => &mut self.monthly,
            Bucket::Weekly => &mut self.weekly,
            Bucket::Daily => &mut self.daily,
        }
    }

    /// Entries to keep, bucket by bucket
    pub fn keep(&self) -> impl Iterator<Item = (Bucket, &DatedDir)> {
        Bucket::ALL
            .into_iter()
            .flat_map(move |b| self.bucket(b).keep.iter().map(move |e| (b, e)))
    }

    /// Entries to delete, oldest first
    pub fn delete(&self) -> Vec<&DatedDir> {
        let mut doomed: Vec<&DatedDir> = Bucket::ALL
            .into_iter()
            .flat_map(|b| self.bucket(b).delete.iter())
            .collect();
        doomed.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.path.cmp(&b.path)));
        doomed
    }

    /// Number of entries kept
    pub fn keep_len(&self) -> usize {
        Bucket::ALL.iter().map(|b| self.bucket(*b).keep.len()).sum()
    }

    /// Number of entries to delete
    pub fn delete_len(&self) -> usize {
        Bucket::ALL.iter().map(|b| self.bucket(*b).delete.len()).sum()
    }

    /// True when nothing would be deleted
    pub fn is_noop(&self) -> bool {
        self.delete_len() == 0
    }
}
