//! # Core Logic - Shared Utilities for Wallet Activity Bots
//!
//! This crate provides the chain-agnostic pieces used by chain implementations.
//!
//! ## Modules
//!
//! - [`config`] - Proxy, chain and pacing configuration types
//! - [`error`] - Typed error handling with thiserror
//! - [`report`] - Per-activity records collected into a batch report
//! - [`traits`] - The `Task` trait and its tagged `TaskOutcome`
//! - `utils` - Wallet and proxy file loaders, gas policy, polling, logger, runner

// Module declarations - internal modules marked pub(crate)
pub mod config;
pub mod error;
pub mod report;
pub mod traits;
pub(crate) mod utils;

// Selective exports - only public API types
pub use config::{ChainConfig, DelayPolicy, ProxyConfig};
pub use error::{ConfigError, NetworkError, WalletError};
pub use report::{ActivityRecord, BatchReport, ReportSummary};
pub use traits::{Task, TaskOutcome};

// Utils are pub(crate) - only export specific public utilities
pub use utils::{
    bump_by_pct, setup_logger, ActivityRunner, GasConfig, ProxyManager, ProxySlot,
    StandardGasLimits, WalletKey, WalletManager, ACTIVITY_TARGET, TASK_RESULT_TARGET,
};

// Polling and error classification used by chain crates
pub use utils::retry::{is_transient_error, poll_until, PollConfig};
