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

//! # Fake Job Monitor
//!
//! An in-memory `JobMonitorPort` adapter. Tests register a report per job id
//! (usually one built by `fixtures::metrics`) and the code under test reads
//! it back as if it came from the monitoring API.

use crate::domain::errors::{FixtureError, Result};
use crate::domain::job_metrics::JobMetrics;
use crate::ports::job_monitor_port::JobMonitorPort;
use log::debug;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct FakeJobMonitor {
    jobs: Mutex<HashMap<String, JobMetrics>>,
    fetches: AtomicUsize,
}

impl FakeJobMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with a single job already registered.
    pub fn with_job(job_id: impl Into<String>, metrics: JobMetrics) -> Result<Self> {
        let monitor = Self::new();
        monitor.register(job_id, metrics)?;
        Ok(monitor)
    }

    /// Registers (or replaces) the report served for `job_id`.
    pub fn register(&self, job_id: impl Into<String>, metrics: JobMetrics) -> Result<()> {
        let job_id = job_id.into();
        debug!("Registering {} metric updates for job {}", metrics.len(), job_id);
        let mut jobs = self
            .jobs
            .lock()
            .map_err(|e| FixtureError::Unknown(format!("job registry lock poisoned: {}", e)))?;
        jobs.insert(job_id, metrics);
        Ok(())
    }

    /// How many reports have been served so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl JobMonitorPort for FakeJobMonitor {
    fn get_job_metrics(&self, job_id: &str) -> Result<JobMetrics> {
        let jobs = self
            .jobs
            .lock()
            .map_err(|e| FixtureError::Unknown(format!("job registry lock poisoned: {}", e)))?;
        let metrics = jobs
            .get(job_id)
            .cloned()
            .ok_or_else(|| FixtureError::JobNotFound(job_id.to_string()))?;
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(metrics)
    }
}
