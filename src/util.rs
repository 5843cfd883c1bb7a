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

//! # Pipeline Step Names
//!
//! Dataflow names every transform by its full path through the pipeline
//! (`Outer/Inner/Step-out0`). The backup pipeline reads each table in its own
//! `Read_Data` sub-transform, so the per-table `ElementCount` metric tells us
//! how many rows were read from that table.
//!
//! This module owns the delimiter that joins transform names, builds the
//! step names, and reads row counts back out of a `JobMetrics` report.

use crate::domain::errors::{FixtureError, Result};
use crate::domain::job_metrics::JobMetrics;
use bigdecimal::{BigDecimal, ToPrimitive};
use indexmap::IndexMap;
use log::debug;

/// Separator between nested transform names in a step path.
///
/// Placeholder: the backup pipeline's own delimiter is not known here. Pass
/// the real value to `JobMetricsFixture::new` or set
/// `metrics.transform_delimiter` in the config instead of relying on this.
pub const TRANSFORM_NODE_NAME_DELIMITER: &str = "/";

/// Parent transform under which every table is read.
pub const READ_DATA_TRANSFORM: &str = "Read_Data";

/// Output of the query step inside each per-table read.
pub const EXECUTE_QUERY_OUTPUT: &str = "/Execute query-out0";

/// Metric that counts elements flowing out of a step.
pub const ELEMENT_COUNT_METRIC: &str = "ElementCount";

/// Context key holding the user-facing step name.
pub const OUTPUT_USER_NAME_KEY: &str = "output_user_name";

/// Context key the API sets on not-yet-committed values.
pub const TENTATIVE_KEY: &str = "tentative";

/// Full step name whose `ElementCount` is the row count of `table`.
pub fn read_data_step_name(delimiter: &str, table: &str) -> String {
    format!(
        "{}{}{}{}",
        READ_DATA_TRANSFORM, delimiter, table, EXECUTE_QUERY_OUTPUT
    )
}

/// Reverse of [`read_data_step_name`]. Returns `None` for foreign steps.
pub fn table_from_step_name<'a>(delimiter: &str, step: &'a str) -> Option<&'a str> {
    step.strip_prefix(READ_DATA_TRANSFORM)?
        .strip_prefix(delimiter)?
        .strip_suffix(EXECUTE_QUERY_OUTPUT)
}

/// Extracts per-table row counts from a job metrics report.
///
/// Only committed `ElementCount` updates on `Read_Data` steps are used.
/// Repeated observations for a table are summed. Tables come back in the
/// order they first appear in the report.
pub fn table_row_counts_from_job_metrics(
    job_metrics: &JobMetrics,
    delimiter: &str,
) -> Result<IndexMap<String, i64>> {
    let mut counts: IndexMap<String, i64> = IndexMap::new();

    for update in job_metrics.metrics() {
        let name = update.name();
        if name.name() != ELEMENT_COUNT_METRIC {
            continue;
        }
        if name.context_value(TENTATIVE_KEY) == Some("true") {
            continue;
        }
        let Some(step) = name.context_value(OUTPUT_USER_NAME_KEY) else {
            continue;
        };
        let Some(table) = table_from_step_name(delimiter, step) else {
            continue;
        };

        if table.is_empty() {
            return Err(FixtureError::MetricError {
                step: step.to_string(),
                reason: "step name carries no table name".to_string(),
            });
        }

        let rows = scalar_to_i64(update.scalar()).ok_or_else(|| FixtureError::MetricError {
            step: step.to_string(),
            reason: format!("row count {} is not a 64-bit integer", update.scalar()),
        })?;

        let total = counts.entry(table.to_string()).or_insert(0);
        *total = total
            .checked_add(rows)
            .ok_or_else(|| FixtureError::MetricError {
                step: step.to_string(),
                reason: "summed row count overflows a 64-bit integer".to_string(),
            })?;
    }

    debug!("Extracted row counts for {} tables", counts.len());
    Ok(counts)
}

fn scalar_to_i64(scalar: &BigDecimal) -> Option<i64> {
    let value = scalar.to_i64()?;
    // to_i64 truncates fractions, so make sure nothing was dropped.
    (BigDecimal::from(value) == *scalar).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job_metrics::{MetricStructuredName, MetricUpdate};
    use std::str::FromStr;

    fn element_count(step: &str, scalar: BigDecimal, tentative: bool) -> MetricUpdate {
        let mut context = IndexMap::new();
        context.insert(OUTPUT_USER_NAME_KEY.to_string(), step.to_string());
        if tentative {
            context.insert(TENTATIVE_KEY.to_string(), "true".to_string());
        }
        MetricUpdate::new(
            MetricStructuredName::new("dataflow/v1b3", ELEMENT_COUNT_METRIC, context),
            scalar,
            "2017-10-23T19:10:48.566Z",
        )
    }

    #[test]
    fn test_step_name_round_trip() {
        let step = read_data_step_name("/", "Singers");
        assert_eq!(step, "Read_Data/Singers/Execute query-out0");
        assert_eq!(table_from_step_name("/", &step), Some("Singers"));
        assert_eq!(table_from_step_name("/", "Write/Singers-out0"), None);
    }

    #[test]
    fn test_custom_delimiter() {
        let step = read_data_step_name("::", "Albums");
        assert_eq!(step, "Read_Data::Albums/Execute query-out0");
        assert_eq!(table_from_step_name("/", &step), None);
        assert_eq!(table_from_step_name("::", &step), Some("Albums"));
    }

    #[test]
    fn test_extract_skips_tentative_and_sums_repeats() {
        let metrics = JobMetrics::new(vec![
            element_count(&read_data_step_name("/", "A"), BigDecimal::from(3), false),
            element_count(&read_data_step_name("/", "B"), BigDecimal::from(99), true),
            element_count(&read_data_step_name("/", "A"), BigDecimal::from(4), false),
            element_count("Something else-out0", BigDecimal::from(1), false),
        ]);

        let counts = table_row_counts_from_job_metrics(&metrics, "/").unwrap();

        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("A"), Some(&7));
    }

    #[test]
    fn test_extract_rejects_fractional_count() {
        let metrics = JobMetrics::new(vec![element_count(
            &read_data_step_name("/", "A"),
            BigDecimal::from_str("1.5").unwrap(),
            false,
        )]);

        let err = table_row_counts_from_job_metrics(&metrics, "/").unwrap_err();
        assert!(matches!(err, FixtureError::MetricError { .. }));
    }

    #[test]
    fn test_extract_rejects_empty_table_name() {
        let metrics = JobMetrics::new(vec![element_count(
            &read_data_step_name("/", ""),
            BigDecimal::from(1),
            false,
        )]);

        assert!(table_row_counts_from_job_metrics(&metrics, "/").is_err());
    }
}
