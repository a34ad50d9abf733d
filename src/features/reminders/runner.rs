//! # Reminder Runner
//!
//! One pass over the content database: every record's milestones are checked
//! in a fixed order and a reminder goes out for each one due tomorrow.

use crate::core::RunError;
use crate::features::notify::{send_reminder, NotificationSink};
use crate::features::records::property::{
    author_mention, date_property, page_title, FIRST_DRAFT_DATE_PROP, PUBLISHING_DATE_PROP,
    READY_BY_DATE_PROP,
};
use crate::features::records::RecordSource;
use chrono::{Local, NaiveDate};
use log::{debug, info, warn};

use super::proximity::is_due_tomorrow;

/// Tracked deadline of a content item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    FirstDraft,
    FinalDraft,
    Published,
}

impl Milestone {
    /// Evaluation order within a record
    pub const ALL: [Milestone; 3] = [
        Milestone::FirstDraft,
        Milestone::FinalDraft,
        Milestone::Published,
    ];

    /// Stage label used in the reminder text
    pub fn label(self) -> &'static str {
        match self {
            Milestone::FirstDraft => "first draft",
            Milestone::FinalDraft => "final draft",
            Milestone::Published => "published version",
        }
    }

    /// Database property holding this milestone's date
    pub fn property(self) -> &'static str {
        match self {
            Milestone::FirstDraft => FIRST_DRAFT_DATE_PROP,
            Milestone::FinalDraft => READY_BY_DATE_PROP,
            Milestone::Published => PUBLISHING_DATE_PROP,
        }
    }
}

/// Counters reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    /// Reminders attempted, including ones the sink rejected
    pub sent: usize,
}

pub struct ReminderRunner<'a> {
    source: &'a dyn RecordSource,
    sink: &'a dyn NotificationSink,
}

impl<'a> ReminderRunner<'a> {
    pub fn new(source: &'a dyn RecordSource, sink: &'a dyn NotificationSink) -> Self {
        Self { source, sink }
    }

    /// Run against today's local date.
    pub async fn run(&self, collection_id: &str) -> Result<RunSummary, RunError> {
        self.run_for(collection_id, Local::now().date_naive()).await
    }

    /// Run as if `today` were the current local date.
    ///
    /// A malformed milestone date aborts the whole run; reminders already
    /// sent for earlier records stay sent.
    pub async fn run_for(
        &self,
        collection_id: &str,
        today: NaiveDate,
    ) -> Result<RunSummary, RunError> {
        info!("Querying Notion database: {collection_id}");
        let page = self.source.query(collection_id).await?;
        if page.has_more {
            warn!(
                "Database {collection_id} has more results than the first page; only {} records will be checked",
                page.records.len()
            );
        }

        let mut summary = RunSummary::default();

        for record in &page.records {
            summary.processed += 1;
            let record_id = record.id.as_deref().unwrap_or("<no id>");

            let title = page_title(&record.properties);
            let author = author_mention(&record.properties);
            let dates: Vec<(Milestone, Option<String>)> = Milestone::ALL
                .iter()
                .map(|m| (*m, date_property(&record.properties, m.property())))
                .collect();

            debug!(
                "Checking page: {title} (ID: {record_id}), Author: {author}, Dates: {:?}",
                dates
                    .iter()
                    .map(|(m, d)| (m.label(), d.as_deref()))
                    .collect::<Vec<_>>()
            );

            for (milestone, date) in &dates {
                let due = is_due_tomorrow(date.as_deref(), today).map_err(|source| {
                    RunError::DateParse {
                        record_id: record_id.to_string(),
                        source,
                    }
                })?;

                if due {
                    info!(
                        "Deadline approaching for '{}' ({}) on {}. Notifying {}.",
                        title,
                        milestone.label(),
                        date.as_deref().unwrap_or_default(),
                        author
                    );
                    send_reminder(self.sink, &author, &title, milestone.label()).await;
                    summary.sent += 1;
                }
            }
        }

        info!(
            "Script finished. Processed {} pages. Sent {} notifications.",
            summary.processed, summary.sent
        );
        Ok(summary)
    }
}
