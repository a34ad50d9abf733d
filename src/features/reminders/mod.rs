//! # Reminders Feature
//!
//! Day-ahead deadline reminders for content milestones.
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: true
//!
//! ## Changelog
//! - 2.0.0: Milestone checks driven by database records instead of user-scheduled reminders
//! - 1.0.0: Initial release

pub mod proximity;
pub mod runner;

pub use proximity::{check_date_proximity, is_due_tomorrow};
pub use runner::{Milestone, ReminderRunner, RunSummary};
