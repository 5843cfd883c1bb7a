pub mod fake_job_monitor;
