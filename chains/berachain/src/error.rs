//! Typed failures raised by the chain client and the HTTP services.
//!
//! Tasks return these through `anyhow`; the runner turns them into
//! `TaskOutcome::Failed` records.

use ethers::types::{Address, U256};
use thiserror::Error;

/// Precondition and remote-service failures of a single activity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActivityError {
    #[error("{token} balance is zero")]
    ZeroBalance { token: String },

    #[error("Insufficient {token}: have {have}, need {need}")]
    InsufficientFunds { token: String, have: U256, need: U256 },

    #[error("Approval of {token:?} for {spender:?} failed: {reason}")]
    Approval {
        token: Address,
        spender: Address,
        reason: String,
    },

    #[error("Swap route unavailable: {reason}")]
    Route { reason: String },

    #[error("Faucet rejected claim ({status}): {body}")]
    Faucet { status: u16, body: String },

    #[error("No free bera name found after {attempts} attempts")]
    NameUnavailable { attempts: u32 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptchaError {
    #[error("Captcha API key is empty. Set captcha.api_key or BERA__CAPTCHA__API_KEY")]
    MissingApiKey,

    #[error("Captcha submit rejected: {response}")]
    Rejected { response: String },

    #[error("Captcha token not ready after {attempts} polls")]
    Timeout { attempts: u32 },
}
