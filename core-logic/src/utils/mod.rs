//! # Utilities Module
//!
//! Internal utility modules for the core-logic crate.
//! These modules are marked as `pub(crate)` to enforce API boundaries.

// Internal modules - not part of public API
pub(crate) mod gas;
pub(crate) mod logger;
pub(crate) mod proxy_manager;
pub(crate) mod retry;
pub(crate) mod runner;
pub(crate) mod wallet_manager;

// Selective exports - only public utilities
pub use gas::{bump_by_pct, GasConfig, StandardGasLimits};
pub use logger::{setup_logger, ACTIVITY_TARGET, TASK_RESULT_TARGET};
pub use proxy_manager::{ProxyManager, ProxySlot};
pub use runner::ActivityRunner;
pub use wallet_manager::{WalletKey, WalletManager};
