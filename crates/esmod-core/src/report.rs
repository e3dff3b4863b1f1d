//! Change reports and their aggregation

use serde::{Deserialize, Serialize};

/// One named tally inside a [`ChangeReport`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    pub name: String,
    pub count: u32,
}

/// Files touched and per-category edit counts
///
/// A single file's report has `file_count == 1` exactly when one of its
/// counters is non-zero. Reports for many files are combined with
/// [`ChangeReport::fold`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeReport {
    pub file_count: u32,
    pub transformed: Vec<Counter>,
}

impl ChangeReport {
    /// An all-zero report
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the report for one file from its raw counters
    ///
    /// Zero counters are dropped.
    ///
    /// ```
    /// use esmod_core::ChangeReport;
    ///
    /// let report = ChangeReport::for_file([("jsImports", 2), ("jsonImports", 0)]);
    /// assert_eq!(report.file_count, 1);
    /// assert_eq!(report.count("jsImports"), 2);
    /// assert_eq!(report.transformed.len(), 1);
    ///
    /// assert!(ChangeReport::for_file([("jsImports", 0)]).is_empty());
    /// ```
    pub fn for_file<'a>(counters: impl IntoIterator<Item = (&'a str, u32)>) -> Self {
        let mut report = Self::new();
        for (name, count) in counters {
            report.add(name, count);
        }
        report.file_count = u32::from(!report.transformed.is_empty());
        report
    }

    /// Fold `other` into `self`: file counts are summed and counters are
    /// summed point-wise, with absent counters treated as zero
    pub fn fold(&mut self, other: ChangeReport) {
        self.file_count += other.file_count;
        for counter in other.transformed {
            self.add(&counter.name, counter.count);
        }
    }

    /// Value of the counter `name`, zero when absent
    pub fn count(&self, name: &str) -> u32 {
        self.transformed
            .iter()
            .find(|counter| counter.name == name)
            .map_or(0, |counter| counter.count)
    }

    /// Whether nothing was changed
    pub fn is_empty(&self) -> bool {
        self.file_count == 0 && self.transformed.iter().all(|counter| counter.count == 0)
    }

    fn add(&mut self, name: &str, count: u32) {
        if count == 0 {
            return;
        }
        match self.transformed.iter_mut().find(|counter| counter.name == name) {
            Some(counter) => counter.count += count,
            None => self.transformed.push(Counter {
                name: name.to_string(),
                count,
            }),
        }
    }
}

impl FromIterator<ChangeReport> for ChangeReport {
    fn from_iter<I: IntoIterator<Item = ChangeReport>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |mut total, report| {
            total.fold(report);
            total
        })
    }
}
