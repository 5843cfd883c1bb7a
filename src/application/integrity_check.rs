// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Row-Count Integrity Check
//!
//! After a backup job finishes, we want to know that every table was read
//! completely. The job's metrics report carries one `ElementCount` per
//! table (see `util`), so the check is:
//! 1. **Fetch**: pull the job's metrics through the `JobMonitorPort`.
//! 2. **Extract**: turn the `Read_Data` element counts into per-table row counts.
//! 3. **Compare**: match them against the counts we expected, table by table.
//!
//! Tables present in the report but not expected are listed separately,
//! since they usually mean the wrong job (or the wrong database) was checked.

use crate::domain::errors::Result;
use crate::ports::job_monitor_port::JobMonitorPort;
use crate::util::table_row_counts_from_job_metrics;
use log::{info, warn};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

/// Outcome for one expected table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCheck {
    pub table: String,
    pub expected: i64,
    /// `None` when the job reported nothing for this table.
    pub reported: Option<i64>,
}

impl TableCheck {
    pub fn is_match(&self) -> bool {
        self.reported == Some(self.expected)
    }
}

/// Result of checking one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    pub job_id: String,
    /// One entry per expected table, in the order they were given.
    pub checks: Vec<TableCheck>,
    /// Tables the job reported but nobody expected.
    pub unexpected_tables: Vec<String>,
}

impl IntegrityReport {
    pub fn is_consistent(&self) -> bool {
        self.unexpected_tables.is_empty() && self.checks.iter().all(TableCheck::is_match)
    }

    pub fn mismatches(&self) -> Vec<&TableCheck> {
        self.checks.iter().filter(|c| !c.is_match()).collect()
    }
}

pub struct RowCountIntegrityCheck {
    monitor: Arc<dyn JobMonitorPort>,
    delimiter: String,
}

impl RowCountIntegrityCheck {
    pub fn new(monitor: Arc<dyn JobMonitorPort>, delimiter: impl Into<String>) -> Self {
        Self {
            monitor,
            delimiter: delimiter.into(),
        }
    }

    /// Compares what `job_id` reported against `expected` row counts.
    pub fn run<I, S>(&self, job_id: &str, expected: I) -> Result<IntegrityReport>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let job_metrics = self.monitor.get_job_metrics(job_id)?;
        let reported = table_row_counts_from_job_metrics(&job_metrics, &self.delimiter)?;

        let checks: Vec<TableCheck> = expected
            .into_iter()
            .map(|(table, expected)| {
                let table: String = table.into();
                let reported = reported.get(&table).copied();
                TableCheck {
                    table,
                    expected,
                    reported,
                }
            })
            .collect();

        for check in checks.iter().filter(|c| !c.is_match()) {
            match check.reported {
                Some(n) => warn!(
                    "Row count mismatch for {} in job {}: expected {}, reported {}",
                    check.table, job_id, check.expected, n
                ),
                None => warn!(
                    "No row count reported for {} in job {} (expected {})",
                    check.table, job_id, check.expected
                ),
            }
        }

        let expected_tables: HashSet<&str> = checks.iter().map(|c| c.table.as_str()).collect();
        let unexpected_tables: Vec<String> = reported
            .into_keys()
            .filter(|t| !expected_tables.contains(t.as_str()))
            .collect();
        if !unexpected_tables.is_empty() {
            warn!(
                "Job {} reported rows for unexpected tables: {}",
                job_id,
                unexpected_tables.join(", ")
            );
        }

        let report = IntegrityReport {
            job_id: job_id.to_string(),
            checks,
            unexpected_tables,
        };
        info!(
            "Integrity check for job {}: {}/{} tables match",
            job_id,
            report.checks.len() - report.mismatches().len(),
            report.checks.len()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::FixtureError;
    use crate::domain::job_metrics::JobMetrics;
    use crate::fixtures::build_job_metrics;
    use crate::infrastructure::fake_job_monitor::FakeJobMonitor;
    use crate::util::TRANSFORM_NODE_NAME_DELIMITER;

    fn check_against(report: JobMetrics, expected: &[(&str, i64)]) -> IntegrityReport {
        let monitor = FakeJobMonitor::with_job("job-1", report).unwrap();
        let check = RowCountIntegrityCheck::new(Arc::new(monitor), TRANSFORM_NODE_NAME_DELIMITER);
        check.run("job-1", expected.iter().copied()).unwrap()
    }

    #[test]
    fn test_consistent_job() {
        let counts = [("Singers", 42), ("Albums", 0)];
        let report = check_against(build_job_metrics(counts), &counts);

        assert!(report.is_consistent());
        assert_eq!(report.checks.len(), 2);
        assert_eq!(report.checks[0].table, "Singers");
        assert_eq!(report.checks[1].reported, Some(0));
    }

    #[test]
    fn test_mismatch_and_missing() {
        let report = check_against(
            build_job_metrics([("Singers", 40)]),
            &[("Singers", 42), ("Albums", 3)],
        );

        assert!(!report.is_consistent());
        let mismatches = report.mismatches();
        assert_eq!(mismatches.len(), 2);
        assert_eq!(mismatches[0].reported, Some(40));
        assert_eq!(mismatches[1].reported, None);
    }

    #[test]
    fn test_unexpected_table() {
        let report = check_against(
            build_job_metrics([("Singers", 1), ("Songs", 5)]),
            &[("Singers", 1)],
        );

        assert!(report.mismatches().is_empty());
        assert_eq!(report.unexpected_tables, ["Songs"]);
        assert!(!report.is_consistent());
    }

    #[test]
    fn test_table_listed_twice() {
        let report = check_against(build_job_metrics([("A", 1)]), &[("A", 1), ("A", 1)]);

        assert_eq!(report.checks.len(), 2);
        assert!(report.checks.iter().all(|c| c.reported == Some(1)));
        assert!(report.unexpected_tables.is_empty());
        assert!(report.is_consistent());
    }

    struct FailingMonitor;
    impl JobMonitorPort for FailingMonitor {
        fn get_job_metrics(&self, job_id: &str) -> Result<JobMetrics> {
            Err(FixtureError::JobNotFound(job_id.to_string()))
        }
    }

    #[test]
    fn test_monitor_error_propagates() {
        let check = RowCountIntegrityCheck::new(Arc::new(FailingMonitor), "/");

        let err = check.run("job-9", [("Singers", 1)]).unwrap_err();
        assert!(matches!(err, FixtureError::JobNotFound(_)));
    }
}
