//! Integration Tests Module
//!
//! End-to-end tests exercising the public crate surface: the notification
//! channel trait, the retry controller, and the Slack message formatting.

// Dispatch and retry policy tests
mod notify_test;
