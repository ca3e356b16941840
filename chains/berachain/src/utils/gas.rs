use anyhow::{anyhow, Result};
use core_logic::{bump_by_pct, GasConfig};
use ethers::prelude::*;
use std::sync::Arc;

/// Legacy gas pricing: network price times a percentage, base limits plus jitter.
#[derive(Clone, Debug)]
pub struct GasManager<P: JsonRpcClient = Http> {
    config: GasConfig,
    provider: Arc<Provider<P>>,
}

impl<P: JsonRpcClient> GasManager<P> {
    pub fn new(provider: Arc<Provider<P>>) -> Self {
        Self {
            config: GasConfig::new(),
            provider,
        }
    }

    pub fn with_config(mut self, config: GasConfig) -> Self {
        self.config = config;
        self
    }

    /// Current gas price bumped by `pct` percent.
    pub async fn bumped_gas_price(&self, pct: u64) -> Result<U256> {
        let network = self.provider.get_gas_price().await?;
        let network = u128::try_from(network).map_err(|_| anyhow!("Gas price out of range: {}", network))?;
        Ok(U256::from(bump_by_pct(network, pct)))
    }

    pub fn call_price_pct(&self) -> u64 {
        self.config.price_multiplier_pct
    }

    pub fn swap_price_pct(&self) -> u64 {
        self.config.swap_price_multiplier_pct
    }

    pub fn limit_contract_call(&self) -> u64 {
        self.config.limit_contract_call()
    }

    pub fn limit_collectible_mint(&self) -> u64 {
        self.config.limit_collectible_mint()
    }

    pub fn limit_deploy(&self) -> u64 {
        self.config.limit_deploy()
    }

    pub fn jittered(&self, base: u64) -> U256 {
        U256::from(self.config.jittered_limit(base, &mut rand::thread_rng()))
    }
}
