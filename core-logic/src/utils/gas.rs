//! # Core Logic - Gas Configuration
//!
//! Legacy (gas price) transaction policy shared by chain implementations:
//! a fixed base limit per operation plus a small random jitter, and a
//! percentage bump over the network gas price. Chain crates read the
//! network price themselves; this module only holds the numbers.

use rand::Rng;
use serde::Deserialize;

/// Base gas limits for the operations the bot submits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StandardGasLimits {
    pub contract_call: u64,
    pub collectible_mint: u64,
    pub deploy: u64,
}

impl Default for StandardGasLimits {
    fn default() -> Self {
        Self {
            contract_call: 500_000,
            collectible_mint: 134_500,
            deploy: 300_000,
        }
    }
}

/// Configuration for gas management
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GasConfig {
    /// Upper bound of the random amount added to every base limit (inclusive, from 1).
    pub jitter_max: u64,
    /// Gas price multiplier in percent for ordinary calls.
    pub price_multiplier_pct: u64,
    /// Gas price multiplier in percent for swaps.
    pub swap_price_multiplier_pct: u64,
    #[serde(flatten)]
    pub limits: StandardGasLimits,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            jitter_max: 10_000,
            price_multiplier_pct: 115,
            swap_price_multiplier_pct: 120,
            limits: StandardGasLimits::default(),
        }
    }
}

impl GasConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_jitter(mut self, jitter_max: u64) -> Self {
        self.jitter_max = jitter_max;
        self
    }

    pub fn with_multipliers(mut self, price_pct: u64, swap_pct: u64) -> Self {
        self.price_multiplier_pct = price_pct;
        self.swap_price_multiplier_pct = swap_pct;
        self
    }

    /// `base + rand(1..=jitter_max)`, or `base` when jitter is disabled.
    pub fn jittered_limit<R: Rng + ?Sized>(&self, base: u64, rng: &mut R) -> u64 {
        if self.jitter_max == 0 {
            base
        } else {
            base + rng.gen_range(1..=self.jitter_max)
        }
    }

    pub fn limit_contract_call(&self) -> u64 {
        self.limits.contract_call
    }

    pub fn limit_collectible_mint(&self) -> u64 {
        self.limits.collectible_mint
    }

    pub fn limit_deploy(&self) -> u64 {
        self.limits.deploy
    }
}

/// Applies a percentage multiplier to a wei amount.
pub fn bump_by_pct(price_wei: u128, pct: u64) -> u128 {
    price_wei.saturating_mul(pct as u128) / 100
}
