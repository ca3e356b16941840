use crate::error::NetworkError;
use anyhow::Result;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Fixed-budget polling: a hard attempt cap and a constant pause, no backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_attempts: 60,
            interval: Duration::from_secs(3),
        }
    }
}

impl PollConfig {
    pub fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts,
            interval,
        }
    }

    /// Upper bound on time spent sleeping between polls.
    pub fn max_wait(&self) -> Duration {
        self.interval * self.max_attempts.saturating_sub(1)
    }
}

/// Calls `operation` until it yields `Some`, at most `max_attempts` times.
///
/// `Ok(None)` means "not ready yet" and is followed by a sleep of `interval`.
/// An `Err` from the operation stops polling immediately. Running out of
/// attempts returns [`NetworkError::PollExhausted`].
pub async fn poll_until<T, F, Fut>(
    config: PollConfig,
    operation_name: &str,
    mut operation: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>>>,
{
    for attempt in 1..=config.max_attempts {
        if let Some(value) = operation().await? {
            debug!("{} ready after {} polls", operation_name, attempt);
            return Ok(value);
        }

        if attempt < config.max_attempts {
            debug!(
                "{} not ready (poll {}/{}). Waiting {:?}",
                operation_name, attempt, config.max_attempts, config.interval
            );
            tokio::time::sleep(config.interval).await;
        }
    }

    Err(NetworkError::PollExhausted {
        operation: operation_name.to_string(),
        attempts: config.max_attempts,
    }
    .into())
}

pub fn is_transient_error(error: &anyhow::Error) -> bool {
    let error_msg = format!("{:?}", error).to_lowercase();

    let transient_patterns = [
        "timeout",
        "timed out",
        "connection refused",
        "connection reset",
        "network error",
        "error sending request",
        "temporary failure",
        "service unavailable",
        "bad gateway",
        "rate limited",
        "too many requests",
        "nonce too low",
        "already known",
        "replacement transaction underpriced",
        "not ready after",
    ];

    transient_patterns
        .iter()
        .any(|pattern| error_msg.contains(pattern))
}
