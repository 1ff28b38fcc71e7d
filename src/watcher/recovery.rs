//! Bounded re-enable loop for subscriptions whose directory went away.
//!
//! The subscription is disabled, then re-enabled up to `max_attempts`
//! times with a fixed pause after each failure. When the budget runs out
//! the subscription stays disabled until the process is restarted.

use std::sync::Arc;
use std::time::Duration;

use super::error::WatchError;
use super::supervisor::{Shared, Subscription};

/// How a lost subscription is brought back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryPolicy {
    /// Whether losing access schedules recovery automatically.
    pub enabled: bool,
    pub max_attempts: u32,
    /// Fixed pause after each failed attempt.
    pub retry_interval: Duration,
}

impl Default for RecoveryPolicy {
    fn default() -> Self {
        Self {
            enabled: false,
            max_attempts: 120,
            retry_interval: Duration::from_secs(30),
        }
    }
}

impl RecoveryPolicy {
    /// Same budget, recovery switched on.
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }
}

pub(super) async fn recover(
    subscription: Arc<Subscription>,
    shared: Arc<Shared>,
) -> Result<(), WatchError> {
    let policy = &shared.policy;
    let root = subscription.root().to_path_buf();

    subscription.disable();
    crate::log_event!("recovery", "disabled", "{}", root.display());

    for attempt in 1..=policy.max_attempts {
        match shared.enable(&subscription) {
            Ok(()) => {
                crate::log_event!(
                    "recovery",
                    "re-enabled",
                    "{} after {attempt} attempt(s)",
                    root.display()
                );
                subscription.finish_recovery();
                return Ok(());
            }
            Err(e) => {
                crate::debug_event!(
                    "recovery",
                    "attempt failed",
                    "{attempt}/{}: {e}",
                    policy.max_attempts
                );
                if attempt < policy.max_attempts {
                    tokio::time::sleep(policy.retry_interval).await;
                }
            }
        }
    }

    subscription.finish_recovery();
    let err = WatchError::RecoveryExhausted {
        path: root,
        attempts: policy.max_attempts,
    };
    tracing::error!("[recovery] {err}");
    Err(err)
}
