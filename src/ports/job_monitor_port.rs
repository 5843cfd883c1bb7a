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

//! # Job Monitor Port
//!
//! This Port defines what it means to "ask the job-monitoring service about
//! a job". The integrity check only needs the metrics of a finished job; it
//! does not care whether they come from the real Dataflow API or from an
//! in-memory fake loaded with synthetic reports.

use crate::domain::errors::Result;
use crate::domain::job_metrics::JobMetrics;

/// `Send + Sync` so one monitor can be shared behind an `Arc`.
pub trait JobMonitorPort: Send + Sync {
    /// Returns the latest metrics report for `job_id`.
    fn get_job_metrics(&self, job_id: &str) -> Result<JobMetrics>;
}
