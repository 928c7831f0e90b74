//! Mealbell - Slack Meal Notification Dispatcher
//!
//! This library provides the notification core behind the `mealbell` CLI.
//! It includes:
//! - Slack webhook configuration, loaded once at startup
//! - The notification channel (a single outbound POST with typed failures)
//! - The retry controller (two attempts, fixed delay, in-flight guard)

pub mod config;
pub mod services;

pub use config::SlackConfig;
pub use services::notify::controller::NotifyController;
pub use services::notify::slack::SlackChannel;
pub use services::notify::types::{
    MealSelection, MessageKind, Notification, NotificationRequest, NotifyError, NotifyTestResult,
    SendOutcome, SendState,
};
pub use services::notify::NotifyChannel;
