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

//! # Spanner Backup Fixtures
//!
//! Test support for a Cloud Spanner backup/restore pipeline: canned rows and
//! the mutations that restore them, plus synthetic Dataflow job metrics that
//! report per-table row counts.
//!
//! The crate follows the **Hexagonal Architecture** (Ports and Adapters):
//! the integrity check talks to a `JobMonitorPort`, and tests plug in the
//! in-memory `FakeJobMonitor` loaded with reports from `fixtures::metrics`.

pub mod application;
pub mod config;
pub mod domain;
pub mod fixtures;
pub mod infrastructure;
pub mod ports;
pub mod util;

pub use domain::errors::{FixtureError, Result};
pub use domain::job_metrics::{JobMetrics, MetricStructuredName, MetricUpdate};
pub use fixtures::{build_job_metrics, JobMetricsFixture};
