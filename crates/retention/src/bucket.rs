//! Retention buckets and date classification

use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;

/// Age cohort a dated directory belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bucket {
    /// Created on the 1st day of a month
    Monthly,
    /// Created on a Sunday (that is not the 1st)
    Weekly,
    /// Everything else
    Daily,
}

impl Bucket {
    /// All buckets, in classification precedence order
    pub const ALL: [Bucket; 3] = [Bucket::Monthly, Bucket::Weekly, Bucket::Daily];

    /// Classify a date
    ///
    /// The first of the month wins over Sunday, so `2023-01-01` (a Sunday)
    /// is monthly.
    pub fn classify(date: NaiveDate) -> Self {
        if date.day() == 1 {
            Bucket::Monthly
        } else if date.weekday() == Weekday::Sun {
            Bucket::Weekly
        } else {
            Bucket::Daily
        }
    }

    /// Lowercase name, as used in config keys and log lines
    pub fn name(self) -> &'static str {
        match self {
            Bucket::Monthly => "monthly",
            Bucket::Weekly => "weekly",
            Bucket::Daily => "daily",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
