//! Mealbell - send meal-time notifications to Slack.
//!
//! # Usage
//!
//! ```bash
//! # Announce that a meal is ready
//! mealbell meal lunch
//!
//! # Send the default "still cooking" status update
//! mealbell status
//!
//! # Send a custom status update
//! mealbell status "Food is plated, come on down"
//!
//! # Check the webhook is reachable
//! mealbell test
//! ```
//!
//! Configuration comes from the environment (or a `.env` file):
//! `SLACK_WEBHOOK_URL` holds the incoming-webhook URL and is treated as a
//! secret; `SLACK_CHANNEL` optionally overrides the target channel.

use std::sync::Arc;

use clap::{Parser, Subcommand};

use mealbell::{
    MealSelection, Notification, NotifyChannel, NotifyController, SendOutcome, SlackChannel,
    SlackConfig,
};

/// Status text posted when no custom message is given.
const STILL_COOKING: &str =
    "Hey y'all, Ferdinand is still cooking 🤷‍♂️, But the food will be ready soon.";

#[derive(Parser)]
#[command(name = "mealbell")]
#[command(author, version, about = "Send meal-time notifications to Slack")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Announce that a meal is ready
    Meal {
        /// Which meal: breakfast, lunch or supper
        meal: String,
    },
    /// Send a cooking-status update
    Status {
        /// Custom status text; defaults to the "still cooking" message
        text: Option<String>,
    },
    /// Send a test notification and report latency
    Test,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = SlackConfig::from_env();
    let channel = Arc::new(SlackChannel::new());

    match cli.command {
        Commands::Meal { meal } => {
            let meal = MealSelection::from_str_value(&meal).ok_or_else(|| {
                anyhow::anyhow!("unknown meal {meal:?}, expected breakfast, lunch or supper")
            })?;
            dispatch(channel, config, Notification::meal(meal)).await
        }
        Commands::Status { text } => {
            let text = text.unwrap_or_else(|| STILL_COOKING.to_string());
            dispatch(channel, config, Notification::status(text)).await
        }
        Commands::Test => {
            let result = channel.test(&config).await;
            if result.success {
                println!(
                    "Test notification sent ({} ms)",
                    result.latency_ms.unwrap_or_default()
                );
                Ok(())
            } else {
                anyhow::bail!(
                    "test notification failed: {}",
                    result.error.unwrap_or_default()
                )
            }
        }
    }
}

async fn dispatch(
    channel: Arc<SlackChannel>,
    config: SlackConfig,
    notification: Notification,
) -> anyhow::Result<()> {
    let controller = NotifyController::new(channel, config);

    match controller.dispatch_with_retry(notification).await {
        SendOutcome::Success { .. } => {
            println!("Notification sent.");
            Ok(())
        }
        // Failure detail goes to the logs, not the user.
        SendOutcome::Failure { .. } => anyhow::bail!(
            "failed to send notification, please check your internet connection and try again"
        ),
        SendOutcome::Busy => anyhow::bail!("another notification is already in flight"),
    }
}
