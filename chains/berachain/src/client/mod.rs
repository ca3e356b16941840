//! Chain client: one node connection, the contract address table and one
//! method per on-chain action.
//!
//! Every submission is a legacy transaction priced at the network gas price
//! times a percentage, with a jittered gas limit and the pending nonce read
//! right before signing. Nothing waits for inclusion except approvals.

pub mod bend;
pub mod bex;
pub mod deploy;
pub mod honey;
pub mod names;

pub use honey::JarMint;

use crate::config::{BeraConfig, ContractBook};
use crate::contracts::{ApproveCall, Erc20};
use crate::error::ActivityError;
use crate::services::{build_http_client, RouteClient};
use crate::utils::GasManager;
use anyhow::{Context, Result};
use ethers::abi::AbiEncode;
use ethers::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

const POLL_INTERVAL: Duration = Duration::from_secs(2);
const APPROVAL_TIMEOUT: Duration = Duration::from_secs(120);

/// Formats a transaction hash as `0x`-prefixed lowercase hex.
pub fn hash_hex(hash: TxHash) -> String {
    format!("{:#x}", hash)
}

/// One transaction to sign: target (none for a deployment), calldata, value and gas policy.
#[derive(Debug, Clone)]
pub(crate) struct TxCall {
    to: Option<Address>,
    data: Bytes,
    value: U256,
    base_gas: u64,
    price_pct: u64,
}

impl TxCall {
    pub(crate) fn to(to: Address, data: impl Into<Bytes>) -> Self {
        Self {
            to: Some(to),
            data: data.into(),
            value: U256::zero(),
            base_gas: 0,
            price_pct: 100,
        }
    }

    pub(crate) fn create(bytecode: impl Into<Bytes>) -> Self {
        Self {
            to: None,
            ..Self::to(Address::zero(), bytecode)
        }
    }

    pub(crate) fn value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    pub(crate) fn gas(mut self, base_gas: u64, price_pct: u64) -> Self {
        self.base_gas = base_gas;
        self.price_pct = price_pct;
        self
    }
}

pub struct BeraClient<P: JsonRpcClient = Http> {
    provider: Arc<Provider<P>>,
    gas: GasManager<P>,
    contracts: ContractBook,
    router: RouteClient,
    slippage_bps: u32,
    chain_id: u64,
}

impl BeraClient<Http> {
    /// Connects to the configured RPC endpoint.
    pub fn connect(config: &BeraConfig) -> Result<Self> {
        let url = reqwest::Url::parse(&config.chain.rpc_endpoint)
            .with_context(|| format!("Invalid RPC URL {}", config.chain.rpc_endpoint))?;
        let http = Http::new_with_client(url, build_http_client(None)?);
        Self::new(Provider::new(http).interval(POLL_INTERVAL), config)
    }
}

impl<P: JsonRpcClient + Clone + 'static> BeraClient<P> {
    pub fn new(provider: Provider<P>, config: &BeraConfig) -> Result<Self> {
        let provider = Arc::new(provider);
        Ok(Self {
            gas: GasManager::new(provider.clone()).with_config(config.gas.clone()),
            provider,
            contracts: config.contracts,
            router: RouteClient::new(&config.swap)?,
            slippage_bps: config.swap.slippage_bps,
            chain_id: config.chain.chain_id,
        })
    }

    pub fn contracts(&self) -> &ContractBook {
        &self.contracts
    }

    /// Parses a hex private key into a signer bound to this chain.
    pub fn signer_from_key(&self, key: &str) -> Result<LocalWallet> {
        let wallet = key
            .parse::<LocalWallet>()
            .context("Invalid private key")?;
        Ok(wallet.with_chain_id(self.chain_id))
    }

    pub async fn native_balance(&self, owner: Address) -> Result<U256> {
        self.provider
            .get_balance(owner, None)
            .await
            .context("Failed to read BERA balance")
    }

    pub async fn token_balance(&self, token: Address, owner: Address) -> Result<U256> {
        Erc20::new(token, self.provider.clone())
            .balance_of(owner)
            .call()
            .await
            .with_context(|| format!("Failed to read {} balance", self.token_label(token)))
    }

    pub async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256> {
        Erc20::new(token, self.provider.clone())
            .allowance(owner, spender)
            .call()
            .await
            .with_context(|| format!("Failed to read {} allowance", self.token_label(token)))
    }

    pub(crate) fn token_label(&self, token: Address) -> String {
        let book = &self.contracts;
        match token {
            t if t == book.wbera => "BERA".into(),
            t if t == book.usdc => "USDC".into(),
            t if t == book.weth => "WETH".into(),
            t if t == book.honey => "HONEY".into(),
            t => format!("{:?}", t),
        }
    }

    /// Balance must be non-zero and cover `amount`.
    pub(crate) fn require_balance(
        &self,
        token: Address,
        balance: U256,
        amount: U256,
    ) -> Result<(), ActivityError> {
        if balance.is_zero() {
            return Err(ActivityError::ZeroBalance {
                token: self.token_label(token),
            });
        }
        if balance < amount {
            return Err(ActivityError::InsufficientFunds {
                token: self.token_label(token),
                have: balance,
                need: amount,
            });
        }
        Ok(())
    }

    /// Approves `spender` for the maximum amount when the current allowance is below `needed`.
    ///
    /// Returns the approval hash, or `None` when nothing had to be sent. The
    /// allowance is read fresh on every call.
    pub async fn ensure_allowance(
        &self,
        wallet: &LocalWallet,
        token: Address,
        spender: Address,
        needed: U256,
    ) -> Result<Option<TxHash>> {
        let current = self.allowance(token, wallet.address(), spender).await?;
        if current >= needed {
            debug!(
                "{} allowance for {:?} sufficient ({} >= {})",
                self.token_label(token),
                spender,
                current,
                needed
            );
            return Ok(None);
        }

        let approval_error = |reason: String| ActivityError::Approval {
            token,
            spender,
            reason,
        };

        let data = ApproveCall {
            spender,
            amount: U256::MAX,
        }
        .encode();
        let call = TxCall::to(token, data).gas(self.gas.limit_contract_call(), self.gas.call_price_pct());
        let hash = self
            .submit(wallet, call)
            .await
            .map_err(|e| approval_error(format!("{:#}", e)))?;

        let pending = PendingTransaction::new(hash, self.provider.as_ref());
        let receipt = tokio::time::timeout(APPROVAL_TIMEOUT, pending)
            .await
            .map_err(|_| approval_error(format!("{} not mined within {:?}", hash_hex(hash), APPROVAL_TIMEOUT)))?
            .map_err(|e| approval_error(e.to_string()))?;

        match receipt {
            Some(r) if r.status == Some(U64::from(1)) => {
                info!(
                    "Approved {} for {:?} (tx: {})",
                    self.token_label(token),
                    spender,
                    hash_hex(hash)
                );
                Ok(Some(hash))
            }
            Some(_) => Err(approval_error(format!("{} reverted", hash_hex(hash))).into()),
            None => Err(approval_error(format!("{} dropped", hash_hex(hash))).into()),
        }
    }

    /// Signs and broadcasts `call` as a legacy transaction from `wallet`.
    pub(crate) async fn submit(&self, wallet: &LocalWallet, call: TxCall) -> Result<TxHash> {
        let from = wallet.address();
        let gas_price = self.gas.bumped_gas_price(call.price_pct).await?;
        let gas_limit = self.gas.jittered(call.base_gas);
        let nonce = self
            .provider
            .get_transaction_count(from, Some(BlockNumber::Pending.into()))
            .await
            .context("Failed to read pending nonce")?;

        let mut tx = TransactionRequest::new()
            .from(from)
            .data(call.data)
            .value(call.value)
            .gas(gas_limit)
            .gas_price(gas_price)
            .nonce(nonce)
            .chain_id(self.chain_id);
        if let Some(to) = call.to {
            tx = tx.to(to);
        }

        let signer = SignerMiddleware::new(
            self.provider.as_ref().clone(),
            wallet.clone().with_chain_id(self.chain_id),
        );
        let pending = signer
            .send_transaction(tx, None)
            .await
            .context("Failed to submit transaction")?;
        Ok(pending.tx_hash())
    }
}
