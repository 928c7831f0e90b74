//! Slack Notification Service
//!
//! Builds a message text from a typed input (meal selection or status) and
//! delivers it to a Slack incoming webhook, with a fixed two-attempt retry
//! policy driven by the controller.

pub mod controller;
pub mod slack;
pub mod types;

use async_trait::async_trait;

use crate::config::SlackConfig;
use types::{Notification, NotifyError, NotifyTestResult};

/// Async trait for the outbound notification channel.
///
/// The production implementation posts to a Slack incoming webhook; tests
/// substitute scripted implementations through this seam. A channel performs
/// exactly one delivery per `send` call; retry lives in the controller.
#[async_trait]
pub trait NotifyChannel: Send + Sync {
    /// Deliver one notification. Exactly one HTTP call, no internal retry.
    async fn send(
        &self,
        notification: &Notification,
        config: &SlackConfig,
    ) -> Result<(), NotifyError>;

    /// Send a fixed test notification and report the observed latency.
    async fn test(&self, config: &SlackConfig) -> NotifyTestResult;

    /// Format the outgoing message text for a notification.
    fn format_text(&self, notification: &Notification) -> String;
}
