//! Scheduled background jobs.
//!
//! Two independent cron jobs drive the parts of the system that run without
//! a request: the nightly attendance rollover and the daily unpaid-fee scan.
//! Both are registered on a `tokio_cron_scheduler::JobScheduler` at startup;
//! the cron expressions come from configuration, with the correctness
//! contract living in the services the jobs invoke rather than in the
//! schedule itself.

pub mod attendance_rollover;
pub mod fee_reminders;
