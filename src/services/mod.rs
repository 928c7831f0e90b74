//! Services
//!
//! Business logic services for the application.
//! Currently only the Slack notification service.

pub mod notify;
