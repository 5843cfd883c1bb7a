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

//! # Synthetic Job Metrics
//!
//! Builds the `JobMetrics` report a finished backup job would return from
//! the Dataflow monitoring API, given how many rows were read per table.
//!
//! The report always starts with one unrelated `MeanByteCount` record (real
//! reports are full of such noise), followed by one `ElementCount` record per
//! table. Every value here is a fixed literal: the builder never reads the
//! clock, so the same input always produces the same report.

use crate::domain::job_metrics::{JobMetrics, MetricStructuredName, MetricUpdate};
use crate::util::{
    read_data_step_name, ELEMENT_COUNT_METRIC, OUTPUT_USER_NAME_KEY,
    TRANSFORM_NODE_NAME_DELIMITER,
};
use bigdecimal::BigDecimal;
use indexmap::IndexMap;
use log::debug;

/// Timestamp stamped on every synthetic update.
pub const UPDATE_TIME: &str = "2017-10-23T19:10:48.566Z";

/// Origin of every metric produced by the Dataflow service.
pub const DATAFLOW_ORIGIN: &str = "dataflow/v1b3";

pub const MEAN_BYTE_COUNT_METRIC: &str = "MeanByteCount";

/// Value of the filler record.
pub const FILLER_SCALAR: i64 = 267;

/// Step that opens the read-only transaction before any table is read.
pub const CREATE_TRANSACTION_STEP: &str =
    "Read Table List/SpannerIO.CreateTransaction/Createtransaction-out0";

pub const ORIGINAL_NAME_KEY: &str = "original_name";

/// Builds synthetic reports using a given transform-name delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobMetricsFixture {
    delimiter: String,
}

impl Default for JobMetricsFixture {
    fn default() -> Self {
        Self::new(TRANSFORM_NODE_NAME_DELIMITER)
    }
}

impl JobMetricsFixture {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Builds the report: filler first, then one `ElementCount` per table in
    /// iteration order. Counts are not validated, negatives pass through.
    pub fn build<I, S>(&self, table_row_counts: I) -> JobMetrics
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let mut metrics = vec![filler_update()];
        metrics.extend(
            table_row_counts
                .into_iter()
                .map(|(table, rows)| self.row_count_update(table.as_ref(), rows)),
        );

        debug!("Built synthetic job metrics with {} updates", metrics.len());
        JobMetrics::new(metrics)
    }

    fn row_count_update(&self, table: &str, rows: i64) -> MetricUpdate {
        let mut context = IndexMap::new();
        context.insert(
            OUTPUT_USER_NAME_KEY.to_string(),
            read_data_step_name(&self.delimiter, table),
        );

        MetricUpdate::new(
            MetricStructuredName::new(DATAFLOW_ORIGIN, ELEMENT_COUNT_METRIC, context),
            BigDecimal::from(rows),
            UPDATE_TIME,
        )
    }
}

/// Builds a report with the default transform delimiter.
pub fn build_job_metrics<I, S>(table_row_counts: I) -> JobMetrics
where
    I: IntoIterator<Item = (S, i64)>,
    S: AsRef<str>,
{
    JobMetricsFixture::default().build(table_row_counts)
}

fn filler_update() -> MetricUpdate {
    let mut context = IndexMap::new();
    context.insert(
        OUTPUT_USER_NAME_KEY.to_string(),
        CREATE_TRANSACTION_STEP.to_string(),
    );
    context.insert(
        ORIGINAL_NAME_KEY.to_string(),
        format!("{}-{}", CREATE_TRANSACTION_STEP, MEAN_BYTE_COUNT_METRIC),
    );

    MetricUpdate::new(
        MetricStructuredName::new(DATAFLOW_ORIGIN, MEAN_BYTE_COUNT_METRIC, context),
        BigDecimal::from(FILLER_SCALAR),
        UPDATE_TIME,
    )
}
