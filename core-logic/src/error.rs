//! # Core Error Types
//!
//! Centralized error definitions for the core-logic crate.
//! All errors implement `std::error::Error` and `std::fmt::Display`.

use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Invalid RPC URL format: '{url}'")]
    InvalidRpcUrl { url: String },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Wallet and key-file errors
#[derive(Error, Debug, Clone)]
pub enum WalletError {
    #[error("Wallet not found at index {index} (total wallets: {total})")]
    NotFound { index: usize, total: usize },

    #[error("Invalid private key format at line {line}: expected hex string")]
    InvalidKeyFormat { line: usize },

    #[error("Private key has wrong length at line {line}: expected 64 hex chars, got {length}")]
    InvalidKeyLength { line: usize, length: usize },
}

/// Network, RPC and third-party service errors
#[derive(Error, Debug, Clone)]
pub enum NetworkError {
    #[error("{operation} not ready after {attempts} polls")]
    PollExhausted { operation: String, attempts: u32 },

    #[error("Invalid proxy '{proxy}': {reason}")]
    InvalidProxy { proxy: String, reason: String },
}
