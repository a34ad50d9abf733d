//! # Features
//!
//! Each feature owns one concern of the reminder run.

pub mod notify;
pub mod records;
pub mod reminders;

pub use notify::{format_reminder, send_reminder, NotificationSink, SlackClient};
pub use records::{NotionClient, Record, RecordPage, RecordSource};
pub use reminders::{check_date_proximity, Milestone, ReminderRunner, RunSummary};
