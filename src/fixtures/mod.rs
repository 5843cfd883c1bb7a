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

//! # Fixtures
//!
//! Ready-made values for tests of the backup and restore pipeline:
//! - `rows`: rows read from a table and the mutations that restore them.
//! - `metrics`: the job metrics report a finished backup job would return.

pub mod metrics;
pub mod rows;

pub use metrics::{build_job_metrics, JobMetricsFixture};
