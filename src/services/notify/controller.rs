//! Notification Retry Controller
//!
//! Drives a single user-initiated send through at most two dispatch
//! attempts with a fixed delay in between, and rejects a new send while
//! one is already in flight.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::SlackConfig;

use super::types::{Notification, NotifyError, SendOutcome, SendState};
use super::NotifyChannel;

/// Maximum dispatch attempts per send (one retry).
pub const MAX_ATTEMPTS: u32 = 2;

/// Fixed delay between the two attempts. No backoff, no jitter.
pub const RETRY_DELAY: Duration = Duration::from_millis(1000);

/// Retry controller for user-initiated sends.
///
/// State machine: `Idle -> Sending -> {Success, Failure} -> Idle`.
/// Attempts are strictly sequential; there is no cancellation once a
/// send sequence starts.
pub struct NotifyController {
    channel: Arc<dyn NotifyChannel>,
    config: SlackConfig,
    retry_delay: Duration,
    in_flight: AtomicBool,
}

impl NotifyController {
    pub fn new(channel: Arc<dyn NotifyChannel>, config: SlackConfig) -> Self {
        Self::with_retry_delay(channel, config, RETRY_DELAY)
    }

    /// Controller with a custom inter-attempt delay.
    pub fn with_retry_delay(
        channel: Arc<dyn NotifyChannel>,
        config: SlackConfig,
        retry_delay: Duration,
    ) -> Self {
        Self {
            channel,
            config,
            retry_delay,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Current controller state as visible to a front end.
    pub fn state(&self) -> SendState {
        if self.in_flight.load(Ordering::SeqCst) {
            SendState::Sending
        } else {
            SendState::Idle
        }
    }

    /// Run one send through the retry policy.
    ///
    /// Transport failures get one retry after the fixed delay; unexpected
    /// errors fail immediately without a second attempt. A send requested
    /// while another is in flight is rejected with `SendOutcome::Busy`.
    /// The controller returns to `Idle` on every terminal path.
    pub async fn dispatch_with_retry(&self, notification: Notification) -> SendOutcome {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            tracing::warn!("send rejected: another notification is in flight");
            return SendOutcome::Busy;
        }

        let outcome = self.run_attempts(&notification).await;
        self.in_flight.store(false, Ordering::SeqCst);

        match &outcome {
            SendOutcome::Success { attempts } => {
                tracing::info!(attempts, kind = %notification.kind, "notification delivered");
            }
            SendOutcome::Failure { attempts, reason } => {
                tracing::error!(attempts, %reason, "notification failed");
            }
            SendOutcome::Busy => {}
        }
        outcome
    }

    async fn run_attempts(&self, notification: &Notification) -> SendOutcome {
        let mut last_error = None;

        for attempt in 0..MAX_ATTEMPTS {
            if attempt > 0 {
                tokio::time::sleep(self.retry_delay).await;
            }

            match self.channel.send(notification, &self.config).await {
                Ok(()) => return SendOutcome::Success { attempts: attempt + 1 },
                Err(e) => {
                    tracing::warn!(attempt, error = %e, "dispatch attempt failed");
                    if !e.is_retryable() {
                        return SendOutcome::Failure {
                            attempts: attempt + 1,
                            reason: e,
                        };
                    }
                    last_error = Some(e);
                }
            }
        }

        SendOutcome::Failure {
            attempts: MAX_ATTEMPTS,
            reason: last_error.unwrap_or_else(|| {
                NotifyError::Unexpected("retry loop exited without an error".to_string())
            }),
        }
    }
}

impl std::fmt::Debug for NotifyController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotifyController")
            .field("config", &self.config)
            .field("retry_delay", &self.retry_delay)
            .field("state", &self.state())
            .finish()
    }
}
