use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

/// What a single activity call ended in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TaskOutcome {
    /// A transaction or claim went through. `tx_hash` is `0x`-prefixed lowercase hex.
    Success {
        tx_hash: Option<String>,
        message: String,
    },
    /// Nothing left to do for this wallet (e.g. one-time mint already taken).
    AlreadyDone { message: String },
    Failed { reason: String, retryable: bool },
}

impl TaskOutcome {
    pub fn success(tx_hash: impl Into<String>, message: impl Into<String>) -> Self {
        TaskOutcome::Success {
            tx_hash: Some(tx_hash.into()),
            message: message.into(),
        }
    }

    pub fn already_done(message: impl Into<String>) -> Self {
        TaskOutcome::AlreadyDone {
            message: message.into(),
        }
    }

    pub fn failed(reason: impl Into<String>, retryable: bool) -> Self {
        TaskOutcome::Failed {
            reason: reason.into(),
            retryable,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TaskOutcome::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, TaskOutcome::Failed { .. })
    }

    pub fn tx_hash(&self) -> Option<&str> {
        match self {
            TaskOutcome::Success { tx_hash, .. } => tx_hash.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for TaskOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskOutcome::Success {
                tx_hash: Some(hash),
                message,
            } => write!(f, "{} (tx: {})", message, hash),
            TaskOutcome::Success { message, .. } => write!(f, "{}", message),
            TaskOutcome::AlreadyDone { message } => write!(f, "{}", message),
            TaskOutcome::Failed { reason, retryable } => {
                if *retryable {
                    write!(f, "{} (retryable)", reason)
                } else {
                    write!(f, "{}", reason)
                }
            }
        }
    }
}

#[async_trait]
pub trait Task<Ctx>: Send + Sync {
    /// Returns the name of the task
    fn name(&self) -> &str;

    /// Executes the task
    async fn run(&self, ctx: Ctx) -> Result<TaskOutcome>;
}

