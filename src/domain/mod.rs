pub mod entities;
pub mod errors;
pub mod job_metrics;
