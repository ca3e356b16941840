use super::{BeraClient, TxCall};
use crate::contracts::{BorrowCall, SupplyCall, INTEREST_RATE_VARIABLE};
use anyhow::Result;
use ethers::abi::AbiEncode;
use ethers::prelude::*;

impl<P: JsonRpcClient + Clone + 'static> BeraClient<P> {
    /// Supplies `amount` of `asset` to Bend, approving that same asset first.
    pub async fn bend_deposit(
        &self,
        wallet: &LocalWallet,
        asset: Address,
        amount: U256,
    ) -> Result<TxHash> {
        let owner = wallet.address();
        let pool = self.contracts.bend_pool;

        let balance = self.token_balance(asset, owner).await?;
        self.require_balance(asset, balance, amount)?;
        self.ensure_allowance(wallet, asset, pool, amount).await?;

        let data = SupplyCall {
            asset,
            amount,
            on_behalf_of: owner,
            referral_code: 0,
        }
        .encode();
        let call = TxCall::to(pool, data).gas(self.gas.limit_contract_call(), self.gas.call_price_pct());
        self.submit(wallet, call).await
    }

    /// Variable-rate borrow of `amount` of `asset` against supplied collateral.
    pub async fn bend_borrow(
        &self,
        wallet: &LocalWallet,
        asset: Address,
        amount: U256,
    ) -> Result<TxHash> {
        let data = BorrowCall {
            asset,
            amount,
            interest_rate_mode: U256::from(INTEREST_RATE_VARIABLE),
            referral_code: 0,
            on_behalf_of: wallet.address(),
        }
        .encode();
        let call = TxCall::to(self.contracts.bend_pool, data)
            .gas(self.gas.limit_contract_call(), self.gas.call_price_pct());
        self.submit(wallet, call).await
    }
}
