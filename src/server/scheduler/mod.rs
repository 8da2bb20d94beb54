//! Background jobs run by `tokio-cron-scheduler`.

pub mod workflow;
