// Core layer - configuration and error types
pub mod core;

// Features layer - records, notifications and the reminder run
pub mod features;

pub use core::Config;

pub use features::{
    // Notifications
    format_reminder, send_reminder, NotificationSink, SlackClient,
    // Records
    NotionClient, Record, RecordPage, RecordSource,
    // Reminders
    check_date_proximity, Milestone, ReminderRunner, RunSummary,
};
