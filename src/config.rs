//! Slack Configuration
//!
//! Webhook endpoint configuration, read once from the environment at
//! startup and passed explicitly into the dispatcher. The webhook URL
//! embeds the credential, so it is excluded from serialization and
//! redacted in `Debug` output.

use std::env;
use std::fmt;

use serde::Serialize;

/// Channel the notifications land in unless overridden.
pub const DEFAULT_CHANNEL: &str = "#discipline_staff-and-students";

/// Environment variable holding the incoming-webhook URL.
pub const WEBHOOK_URL_ENV: &str = "SLACK_WEBHOOK_URL";

/// Environment variable overriding the target channel.
pub const CHANNEL_ENV: &str = "SLACK_CHANNEL";

/// Slack webhook endpoint configuration.
///
/// Fixed for the process lifetime. The URL is pre-authorized
/// (`https://hooks.slack.com/services/T.../B.../xxx`), so it is never
/// written to logs or serialized output.
#[derive(Clone, Serialize)]
pub struct SlackConfig {
    #[serde(skip_serializing)]
    pub webhook_url: String,
    pub channel: String,
}

impl SlackConfig {
    pub fn new(webhook_url: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            channel: channel.into(),
        }
    }

    /// Read configuration from the process environment.
    ///
    /// A missing `SLACK_WEBHOOK_URL` yields an empty URL; sends then fail
    /// with a transport error instead of panicking.
    pub fn from_env() -> Self {
        Self {
            webhook_url: env::var(WEBHOOK_URL_ENV).unwrap_or_default(),
            channel: env::var(CHANNEL_ENV).unwrap_or_else(|_| DEFAULT_CHANNEL.to_string()),
        }
    }

    /// True when a webhook URL is present.
    pub fn is_configured(&self) -> bool {
        !self.webhook_url.is_empty()
    }
}

impl fmt::Debug for SlackConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlackConfig")
            .field(
                "webhook_url",
                &if self.is_configured() {
                    "[redacted]"
                } else {
                    "<unset>"
                },
            )
            .field("channel", &self.channel)
            .finish()
    }
}
