use super::{BeraClient, TxCall};
use crate::contracts::{BuyCall, HoneyJar, MintCall, RedeemCall};
use anyhow::{Context, Result};
use ethers::abi::AbiEncode;
use ethers::prelude::*;

/// HONEY allowance the jar contract needs before a mint (4.2 HONEY).
pub const JAR_MIN_ALLOWANCE: U256 = U256([4_200_000_000_000_000_000, 0, 0, 0]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JarMint {
    Minted(TxHash),
    AlreadyMinted,
}

impl<P: JsonRpcClient + Clone + 'static> BeraClient<P> {
    /// Mints HONEY against `amount` USDC collateral.
    pub async fn honey_mint(&self, wallet: &LocalWallet, amount: U256) -> Result<TxHash> {
        let owner = wallet.address();
        let usdc = self.contracts.usdc;

        let balance = self.token_balance(usdc, owner).await?;
        self.require_balance(usdc, balance, amount)?;
        self.ensure_allowance(wallet, usdc, self.contracts.honey_router, amount)
            .await?;

        let data = MintCall {
            to: owner,
            collateral: usdc,
            amount,
        }
        .encode();
        let call = TxCall::to(self.contracts.honey_router, data)
            .gas(self.gas.limit_contract_call(), self.gas.call_price_pct());
        self.submit(wallet, call).await
    }

    /// Redeems `amount` HONEY back into USDC.
    pub async fn honey_redeem(&self, wallet: &LocalWallet, amount: U256) -> Result<TxHash> {
        let owner = wallet.address();
        let honey = self.contracts.honey;

        let balance = self.token_balance(honey, owner).await?;
        self.require_balance(honey, balance, amount)?;
        self.ensure_allowance(wallet, honey, self.contracts.honey_router, amount)
            .await?;

        let data = RedeemCall {
            to: owner,
            amount,
            collateral: self.contracts.usdc,
        }
        .encode();
        let call = TxCall::to(self.contracts.honey_router, data)
            .gas(self.gas.limit_contract_call(), self.gas.call_price_pct());
        self.submit(wallet, call).await
    }

    /// One honey jar per wallet; a second call reports `AlreadyMinted`.
    pub async fn honey_jar_mint(&self, wallet: &LocalWallet) -> Result<JarMint> {
        let owner = wallet.address();
        let jar = self.contracts.honey_jar;

        let minted = HoneyJar::new(jar, self.provider.clone())
            .has_minted(owner)
            .call()
            .await
            .context("Failed to read honey jar mint status")?;
        if minted {
            return Ok(JarMint::AlreadyMinted);
        }

        self.ensure_allowance(wallet, self.contracts.honey, jar, JAR_MIN_ALLOWANCE)
            .await?;

        let call = TxCall::to(jar, BuyCall.encode())
            .gas(self.gas.limit_collectible_mint(), self.gas.call_price_pct());
        self.submit(wallet, call).await.map(JarMint::Minted)
    }
}
