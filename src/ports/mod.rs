pub mod job_monitor_port;
