//! Slack Incoming Webhook Channel
//!
//! Delivers notifications via a Slack incoming webhook URL as a plain
//! `{text, channel}` JSON payload.

use async_trait::async_trait;

use crate::config::SlackConfig;

use super::types::*;
use super::NotifyChannel;

/// Slack incoming-webhook dispatcher.
///
/// Holds one `reqwest::Client` built at construction. Performs exactly one
/// POST per `send`; the retry policy lives in the controller.
pub struct SlackChannel {
    client: reqwest::Client,
}

impl SlackChannel {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for SlackChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotifyChannel for SlackChannel {
    async fn send(
        &self,
        notification: &Notification,
        config: &SlackConfig,
    ) -> Result<(), NotifyError> {
        // Fail closed before any I/O when no webhook is configured.
        if !config.is_configured() {
            return Err(NotifyError::Transport(
                "webhook URL is not configured".to_string(),
            ));
        }

        let request = NotificationRequest {
            text: self.format_text(notification),
            channel: config.channel.clone(),
        };
        let body = serde_json::to_string(&request)?;

        let response = self
            .client
            .post(&config.webhook_url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Transport(format!(
                "Slack returned HTTP {}: {}",
                status, body
            )));
        }

        Ok(())
    }

    async fn test(&self, config: &SlackConfig) -> NotifyTestResult {
        let notification = Notification::status("Test notification from mealbell");

        let start = std::time::Instant::now();
        match self.send(&notification, config).await {
            Ok(()) => NotifyTestResult {
                success: true,
                latency_ms: Some(start.elapsed().as_millis() as u32),
                error: None,
            },
            Err(e) => NotifyTestResult {
                success: false,
                latency_ms: Some(start.elapsed().as_millis() as u32),
                error: Some(e.to_string()),
            },
        }
    }

    fn format_text(&self, notification: &Notification) -> String {
        match notification.kind {
            MessageKind::Meal => format!("Time for *{}*", notification.content),
            MessageKind::Status => notification.content.clone(),
        }
    }
}
