use anyhow::{Context, Result};
use config::{Config, Environment, File};
use core_logic::config::{ChainConfig, DelayPolicy};
use core_logic::{ConfigError, GasConfig, PollConfig};
use ethers::types::Address;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct BeraConfig {
    pub chain: ChainConfig,
    #[serde(default)]
    pub files: FilesConfig,
    pub contracts: ContractBook,
    #[serde(default)]
    pub gas: GasConfig,
    pub swap: SwapConfig,
    pub captcha: CaptchaConfig,
    pub faucet: FaucetConfig,
    #[serde(default)]
    pub pacing: PacingConfig,
    #[serde(default)]
    pub amounts: AmountsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FilesConfig {
    pub wallets: String,
    pub proxies: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            wallets: core_logic::WalletManager::DEFAULT_FILE.to_string(),
            proxies: core_logic::ProxyManager::DEFAULT_FILE.to_string(),
        }
    }
}

/// Addresses of every contract the bot talks to.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct ContractBook {
    pub bex_vault: Address,
    /// Spender approved before adding liquidity.
    pub bex_liquidity_spender: Address,
    pub usdc_pool: Address,
    pub weth_pool: Address,
    /// Stands in for native BERA when querying routes.
    pub wbera: Address,
    pub usdc: Address,
    pub weth: Address,
    pub honey: Address,
    pub honey_router: Address,
    pub bend_pool: Address,
    pub honey_jar: Address,
    pub bera_names: Address,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SwapConfig {
    pub router_url: String,
    #[serde(default)]
    pub origin: Option<String>,
    /// Cut applied to the final hop's quoted output, in basis points.
    #[serde(default = "default_slippage_bps")]
    pub slippage_bps: u32,
}

fn default_slippage_bps() -> u32 {
    5_000
}

#[derive(Debug, Deserialize, Clone)]
pub struct CaptchaConfig {
    pub api_url: String,
    #[serde(default)]
    pub api_key: String,
    pub site_key: String,
    pub page_url: String,
    #[serde(default = "default_captcha_action")]
    pub action: String,
    #[serde(default = "default_min_score")]
    pub min_score: f64,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_captcha_action() -> String {
    "submit".to_string()
}

fn default_min_score() -> f64 {
    0.5
}

fn default_max_attempts() -> u32 {
    60
}

fn default_interval_secs() -> u64 {
    3
}

impl CaptchaConfig {
    pub fn poll_config(&self) -> PollConfig {
        PollConfig::new(self.max_attempts, Duration::from_secs(self.interval_secs))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct FaucetConfig {
    pub url: String,
    pub origin: String,
    pub user_agent: String,
}

/// Pause after each activity call, per mode.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct PacingConfig {
    pub claim: DelayPolicy,
    pub route: DelayPolicy,
    pub selective: DelayPolicy,
    pub random: DelayPolicy,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            claim: DelayPolicy::Fixed { secs: 2 },
            route: DelayPolicy::Fixed { secs: 5 },
            selective: DelayPolicy::Fixed { secs: 3 },
            random: DelayPolicy::Random {
                min_secs: 5,
                max_secs: 30,
            },
        }
    }
}

/// Inclusive range of tenths of a balance to spend.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct FractionRange {
    pub min: u8,
    pub max: u8,
}

impl FractionRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn pick<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        rng.gen_range(self.min..=self.max)
    }
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct AmountsConfig {
    pub route_tenths: FractionRange,
    pub selective_tenths: FractionRange,
    pub borrow_amount_wei: u64,
}

impl Default for AmountsConfig {
    fn default() -> Self {
        Self {
            route_tenths: FractionRange::new(1, 2),
            selective_tenths: FractionRange::new(1, 4),
            borrow_amount_wei: 10_000_000_000_000_000,
        }
    }
}

impl BeraConfig {
    /// Reads the TOML file and layers `BERA__SECTION__KEY` environment overrides on top.
    pub fn load(path: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name(path))
            .add_source(
                Environment::with_prefix("BERA")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to read config {}", path))?;

        let config: BeraConfig = settings
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!(e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if url::Url::parse(&self.chain.rpc_endpoint).is_err() {
            return Err(ConfigError::InvalidRpcUrl {
                url: self.chain.rpc_endpoint.clone(),
            });
        }

        if self.swap.slippage_bps > 10_000 {
            return Err(ConfigError::InvalidValue {
                field: "swap.slippage_bps".into(),
                reason: format!("{} exceeds 10000", self.swap.slippage_bps),
            });
        }

        if self.captcha.max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "captcha.max_attempts".into(),
                reason: "must be at least 1".into(),
            });
        }

        for (field, range) in [
            ("amounts.route_tenths", self.amounts.route_tenths),
            ("amounts.selective_tenths", self.amounts.selective_tenths),
        ] {
            if range.min == 0 || range.min > range.max || range.max > 10 {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    reason: format!("expected 1 <= min <= max <= 10, got {}..={}", range.min, range.max),
                });
            }
        }

        Ok(())
    }
}
