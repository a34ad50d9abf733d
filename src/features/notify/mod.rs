//! # Feature: Deadline Notifications
//!
//! Builds the reminder text and hands it to the notification sink. Delivery
//! failures are logged and swallowed so one rejected message never stops
//! the remaining reminders.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod slack;

pub use slack::{NotificationSink, SlackClient};

use log::{error, info};

/// Reminder text for one milestone of one post
pub fn format_reminder(author_mention: &str, title: &str, stage: &str) -> String {
    format!(
        "{author_mention} - Your post '{title}', has the {stage} date coming up tomorrow - please ensure that your content is ready and reviewed as per the right stage."
    )
}

/// Send one reminder. Returns whether the sink accepted it.
pub async fn send_reminder(
    sink: &dyn NotificationSink,
    author_mention: &str,
    title: &str,
    stage: &str,
) -> bool {
    let message = format_reminder(author_mention, title, stage);
    info!(
        "Sending Slack message to channel {} for post '{}' ({})",
        sink.channel(),
        title,
        stage
    );

    match sink.post_message(&message).await {
        Ok(()) => true,
        Err(e) => {
            error!("Error sending Slack message: {}", e.describe());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DeliveryError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingSink {
        sent: Mutex<Vec<String>>,
        reject: bool,
    }

    #[async_trait]
    impl NotificationSink for RecordingSink {
        fn channel(&self) -> &str {
            "C_TEST"
        }

        async fn post_message(&self, text: &str) -> Result<(), DeliveryError> {
            self.sent.lock().unwrap().push(text.to_string());
            if self.reject {
                Err(DeliveryError::Api("not_in_channel".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_format_reminder() {
        assert_eq!(
            format_reminder("Alice", "Spring launch", "first draft"),
            "Alice - Your post 'Spring launch', has the first draft date coming up tomorrow - please ensure that your content is ready and reviewed as per the right stage."
        );
    }

    #[tokio::test]
    async fn test_send_reminder_delivers_formatted_text() {
        let sink = RecordingSink {
            sent: Mutex::new(Vec::new()),
            reject: false,
        };
        assert!(send_reminder(&sink, "Bob", "Recap", "published version").await);
        let sent = sink.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].starts_with("Bob - Your post 'Recap', has the published version date"));
    }

    #[tokio::test]
    async fn test_send_reminder_swallows_rejection() {
        let sink = RecordingSink {
            sent: Mutex::new(Vec::new()),
            reject: true,
        };
        assert!(!send_reminder(&sink, "Bob", "Recap", "final draft").await);
        assert_eq!(sink.sent.lock().unwrap().len(), 1);
    }
}
