use crate::error::WalletError;
use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::warn;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// One private key line from the wallet file. Never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct WalletKey {
    key: String,
}

impl WalletKey {
    /// Hex key, `0x` prefix stripped.
    pub fn expose(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for WalletKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletKey")
            .field("key", &"***REDACTED***")
            .finish()
    }
}

/// One slot per key line, in file order. A malformed line keeps its slot
/// so wallet ids stay aligned with line positions.
pub struct WalletManager {
    slots: Vec<Result<WalletKey, WalletError>>,
}

impl WalletManager {
    pub const DEFAULT_FILE: &'static str = "data/wallets.txt";

    /// Loads one private key per line. A missing file yields an empty manager.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("Wallet file {} not found. No wallets loaded.", path.display());
            return Ok(Self { slots: Vec::new() });
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read wallet file {}", path.display()))?;
        Ok(Self::from_lines(&content))
    }

    /// Blank and `#` lines are ignored. Invalid lines are kept as failed slots
    /// and warned about by line number, never by content.
    pub fn from_lines(content: &str) -> Self {
        let mut slots = Vec::new();

        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let slot = Self::validate_key(trimmed, i + 1).map(|key| WalletKey { key });
            if let Err(e) = &slot {
                warn!("Unusable wallet line: {}", e);
            }
            slots.push(slot);
        }

        Self { slots }
    }

    fn validate_key(raw: &str, line: usize) -> Result<String, WalletError> {
        let hex_part = raw.strip_prefix("0x").unwrap_or(raw);
        if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(WalletError::InvalidKeyFormat { line });
        }
        if hex_part.len() != 64 {
            return Err(WalletError::InvalidKeyLength {
                line,
                length: hex_part.len(),
            });
        }
        Ok(hex_part.to_lowercase())
    }

    /// Number of wallet slots, usable or not.
    pub fn count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Key at `index`, or the error its line failed validation with.
    pub fn get(&self, index: usize) -> Result<&WalletKey, WalletError> {
        match self.slots.get(index) {
            Some(Ok(key)) => Ok(key),
            Some(Err(e)) => Err(e.clone()),
            None => Err(WalletError::NotFound {
                index,
                total: self.slots.len(),
            }),
        }
    }
}
