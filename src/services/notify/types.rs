//! Notification Core Types
//!
//! Core data types for the notification system: the meal/status inputs,
//! the Slack wire payload, and the typed send outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three meals a notification can announce
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MealSelection {
    Breakfast,
    Lunch,
    Supper,
}

impl fmt::Display for MealSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Breakfast => write!(f, "Breakfast"),
            Self::Lunch => write!(f, "Lunch"),
            Self::Supper => write!(f, "Supper"),
        }
    }
}

impl MealSelection {
    /// Parse from a CLI/string representation, case-insensitive.
    pub fn from_str_value(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "breakfast" => Some(Self::Breakfast),
            "lunch" => Some(Self::Lunch),
            "supper" => Some(Self::Supper),
            _ => None,
        }
    }
}

/// Message kind tag: a meal announcement or a free-text status update
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MessageKind {
    Meal,
    Status,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Meal => write!(f, "meal"),
            Self::Status => write!(f, "status"),
        }
    }
}

/// Typed input to the dispatcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub kind: MessageKind,
    pub content: String,
}

impl Notification {
    /// Notification announcing that a meal is ready.
    pub fn meal(meal: MealSelection) -> Self {
        Self {
            kind: MessageKind::Meal,
            content: meal.to_string(),
        }
    }

    /// Free-text status notification, sent verbatim.
    pub fn status(content: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Status,
            content: content.into(),
        }
    }
}

/// Slack incoming-webhook payload: `{"text": ..., "channel": ...}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationRequest {
    pub text: String,
    pub channel: String,
}

/// Notification-specific errors
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// Network failure, DNS error, non-2xx response, or an unconfigured
    /// webhook URL. Eligible for the single retry.
    #[error("transport failure: {0}")]
    Transport(String),

    /// Anything the retry loop does not anticipate, e.g. payload
    /// serialization. Never retried.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl NotifyError {
    /// Transport failures are the only retryable class.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<reqwest::Error> for NotifyError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for NotifyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Unexpected(err.to_string())
    }
}

/// Controller state as visible to a front end
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SendState {
    Idle,
    Sending,
}

impl fmt::Display for SendState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Sending => write!(f, "sending"),
        }
    }
}

/// Terminal result of a retried dispatch
#[derive(Debug)]
pub enum SendOutcome {
    Success {
        attempts: u32,
    },
    Failure {
        attempts: u32,
        reason: NotifyError,
    },
    /// Rejected because another send was already in flight.
    Busy,
}

impl SendOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Result of a channel test send
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyTestResult {
    pub success: bool,
    pub latency_ms: Option<u32>,
    pub error: Option<String>,
}
