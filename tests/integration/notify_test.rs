//! Notification Dispatch Integration Tests
//!
//! Drives the retry controller through the public `NotifyChannel` seam with
//! a scripted channel and checks the user-visible dispatch contract.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use mealbell::{
    MealSelection, Notification, NotifyChannel, NotifyController, NotifyError, NotifyTestResult,
    SendOutcome, SlackChannel, SlackConfig,
};

/// Channel whose sends fail with a transport error until `failures` runs out.
struct FlakyChannel {
    failures: u32,
    calls: AtomicU32,
    texts: std::sync::Mutex<Vec<String>>,
}

impl FlakyChannel {
    fn new(failures: u32) -> Arc<Self> {
        Arc::new(Self {
            failures,
            calls: AtomicU32::new(0),
            texts: std::sync::Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl NotifyChannel for FlakyChannel {
    async fn send(
        &self,
        notification: &Notification,
        _config: &SlackConfig,
    ) -> Result<(), NotifyError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            return Err(NotifyError::Transport("webhook unreachable".to_string()));
        }
        self.texts
            .lock()
            .unwrap()
            .push(self.format_text(notification));
        Ok(())
    }

    async fn test(&self, _config: &SlackConfig) -> NotifyTestResult {
        NotifyTestResult {
            success: true,
            latency_ms: None,
            error: None,
        }
    }

    fn format_text(&self, notification: &Notification) -> String {
        SlackChannel::new().format_text(notification)
    }
}

fn config() -> SlackConfig {
    SlackConfig::new(
        "https://hooks.slack.com/services/T0/B0/xxx",
        "#discipline_staff-and-students",
    )
}

#[tokio::test(start_paused = true)]
async fn meal_notification_survives_one_transport_failure() {
    let channel = FlakyChannel::new(1);
    let controller = NotifyController::new(channel.clone(), config());

    let outcome = controller
        .dispatch_with_retry(Notification::meal(MealSelection::Supper))
        .await;

    assert!(outcome.is_success());
    assert_eq!(channel.calls.load(Ordering::SeqCst), 2);
    assert_eq!(
        channel.texts.lock().unwrap().as_slice(),
        ["Time for *Supper*"]
    );
}

#[tokio::test(start_paused = true)]
async fn status_notification_is_delivered_verbatim() {
    let channel = FlakyChannel::new(0);
    let controller = NotifyController::new(channel.clone(), config());

    let outcome = controller
        .dispatch_with_retry(Notification::status("Still cooking, hang tight"))
        .await;

    assert!(matches!(outcome, SendOutcome::Success { attempts: 1 }));
    assert_eq!(
        channel.texts.lock().unwrap().as_slice(),
        ["Still cooking, hang tight"]
    );
}

#[tokio::test(start_paused = true)]
async fn persistent_transport_failure_gives_up_after_two_attempts() {
    let channel = FlakyChannel::new(u32::MAX);
    let controller = NotifyController::new(channel.clone(), config());

    let outcome = controller
        .dispatch_with_retry(Notification::meal(MealSelection::Breakfast))
        .await;

    assert!(matches!(outcome, SendOutcome::Failure { attempts: 2, .. }));
    assert_eq!(channel.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn unconfigured_webhook_fails_every_attempt_without_panicking() {
    let channel = Arc::new(SlackChannel::new());
    let controller = NotifyController::with_retry_delay(
        channel,
        SlackConfig::new("", "#discipline_staff-and-students"),
        std::time::Duration::from_millis(1),
    );

    let outcome = controller
        .dispatch_with_retry(Notification::meal(MealSelection::Lunch))
        .await;

    match outcome {
        SendOutcome::Failure { attempts, reason } => {
            assert_eq!(attempts, 2);
            assert!(matches!(reason, NotifyError::Transport(_)));
        }
        other => panic!("expected failure, got {:?}", other),
    }
}
