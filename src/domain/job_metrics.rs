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

//! # Job Metrics
//!
//! These are the shapes the Dataflow job-monitoring API (v1b3) returns when
//! asked for a job's metrics. A `JobMetrics` report is just an ordered list
//! of `MetricUpdate` observations, and each observation is identified by a
//! `MetricStructuredName` (origin + metric name + step context).
//!
//! Every record is built in one go through a constructor and is read-only
//! afterwards. Field names follow the API's camelCase JSON.

use bigdecimal::BigDecimal;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Identifies one stream of observations: who produced it, what it measures
/// and which pipeline step it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricStructuredName {
    origin: String,
    name: String,
    /// Insertion-ordered so that serialized output is stable.
    #[serde(default)]
    context: IndexMap<String, String>,
}

impl MetricStructuredName {
    pub fn new(
        origin: impl Into<String>,
        name: impl Into<String>,
        context: IndexMap<String, String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            name: name.into(),
            context,
        }
    }

    /// Subsystem that produced the metric (e.g. `dataflow/v1b3`).
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Metric kind (e.g. `ElementCount`).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn context(&self) -> &IndexMap<String, String> {
        &self.context
    }

    /// Shortcut for a single context entry.
    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.context.get(key).map(String::as_str)
    }
}

/// A single observation inside a job metrics report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricUpdate {
    name: MetricStructuredName,
    /// A JSON number on the wire, read without going through `f64`.
    #[serde(with = "bigdecimal::serde::json_num")]
    scalar: BigDecimal,
    update_time: String,
}

impl MetricUpdate {
    pub fn new(
        name: MetricStructuredName,
        scalar: BigDecimal,
        update_time: impl Into<String>,
    ) -> Self {
        Self {
            name,
            scalar,
            update_time: update_time.into(),
        }
    }

    pub fn name(&self) -> &MetricStructuredName {
        &self.name
    }

    /// The observed value. Arbitrary precision, so any `i64` fits exactly.
    pub fn scalar(&self) -> &BigDecimal {
        &self.scalar
    }

    /// ISO-8601 timestamp, kept as an opaque string.
    pub fn update_time(&self) -> &str {
        &self.update_time
    }
}

/// The root report: an ordered sequence of observations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMetrics {
    #[serde(default)]
    metrics: Vec<MetricUpdate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metric_time: Option<String>,
}

impl JobMetrics {
    pub fn new(metrics: Vec<MetricUpdate>) -> Self {
        Self {
            metrics,
            metric_time: None,
        }
    }

    pub fn metrics(&self) -> &[MetricUpdate] {
        &self.metrics
    }

    /// Timestamp the real API attaches to a report. Synthetic reports leave it unset.
    pub fn metric_time(&self) -> Option<&str> {
        self.metric_time.as_deref()
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_api_response() {
        let json = r#"{
            "metricTime": "2017-10-23T19:11:00Z",
            "metrics": [{
                "name": {
                    "origin": "dataflow/v1b3",
                    "name": "ElementCount",
                    "context": { "output_user_name": "Read_Data/Singers/Execute query-out0" }
                },
                "scalar": 42,
                "updateTime": "2017-10-23T19:10:48.566Z"
            }]
        }"#;

        let report: JobMetrics = serde_json::from_str(json).unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(report.metric_time(), Some("2017-10-23T19:11:00Z"));
        let update = &report.metrics()[0];
        assert_eq!(update.scalar(), &BigDecimal::from(42));
        assert_eq!(update.name().name(), "ElementCount");
        assert_eq!(
            update.name().context_value("output_user_name"),
            Some("Read_Data/Singers/Execute query-out0")
        );
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let name = MetricStructuredName::new("dataflow/v1b3", "ElementCount", IndexMap::new());
        let report = JobMetrics::new(vec![MetricUpdate::new(
            name,
            BigDecimal::from(7),
            "2017-10-23T19:10:48.566Z",
        )]);

        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("\"updateTime\""));
        assert!(!json.contains("metricTime"));
    }

    #[test]
    fn test_scalar_is_json_number() {
        let name = MetricStructuredName::new("dataflow/v1b3", "MeanByteCount", IndexMap::new());
        let report = JobMetrics::new(vec![MetricUpdate::new(
            name,
            BigDecimal::from(267),
            "2017-10-23T19:10:48.566Z",
        )]);

        let v: serde_json::Value = serde_json::to_value(&report).unwrap();

        assert!(v["metrics"][0]["scalar"].is_number());
        assert_eq!(v["metrics"][0]["scalar"].to_string(), "267");
    }

    #[test]
    fn test_fractional_scalar_keeps_precision() {
        let json = r#"{"metrics": [{
            "name": { "origin": "dataflow/v1b3", "name": "MeanByteCount", "context": {} },
            "scalar": 12345678901234567890.123456789,
            "updateTime": "2017-10-23T19:10:48.566Z"
        }]}"#;

        let report: JobMetrics = serde_json::from_str(json).unwrap();

        assert_eq!(
            report.metrics()[0].scalar(),
            &BigDecimal::from_str("12345678901234567890.123456789").unwrap()
        );
    }
}
