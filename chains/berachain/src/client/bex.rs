use super::{BeraClient, TxCall};
use crate::contracts::{AddLiquidityCall, BatchSwapCall, SWAP_DEADLINE, SWAP_KIND_GIVEN_IN};
use crate::services::build_batch_steps;
use anyhow::Result;
use ethers::abi::AbiEncode;
use ethers::prelude::*;

impl<P: JsonRpcClient + Clone + 'static> BeraClient<P> {
    /// Swaps `amount_in` of `asset_in` along the router's path.
    ///
    /// Passing the wrapped-BERA address as `asset_in` spends native BERA.
    pub async fn bex_swap(
        &self,
        wallet: &LocalWallet,
        asset_in: Address,
        asset_out: Address,
        amount_in: U256,
    ) -> Result<TxHash> {
        let owner = wallet.address();
        let vault = self.contracts.bex_vault;
        let native_in = asset_in == self.contracts.wbera;

        let balance = if native_in {
            self.native_balance(owner).await?
        } else {
            self.token_balance(asset_in, owner).await?
        };
        self.require_balance(asset_in, balance, amount_in)?;

        if !native_in {
            self.ensure_allowance(wallet, asset_in, vault, amount_in).await?;
        }

        let route = self.router.fetch_route(asset_in, asset_out, amount_in).await?;
        let data = BatchSwapCall {
            kind: SWAP_KIND_GIVEN_IN,
            swaps: build_batch_steps(&route, native_in, self.slippage_bps)?,
            deadline: U256::from(SWAP_DEADLINE),
        }
        .encode();

        let value = if native_in { amount_in } else { U256::zero() };
        let call = TxCall::to(vault, data)
            .value(value)
            .gas(self.gas.limit_contract_call(), self.gas.swap_price_pct());
        self.submit(wallet, call).await
    }

    /// Single-sided deposit of `amount` of `asset_in` into `pool`.
    pub async fn bex_add_liquidity(
        &self,
        wallet: &LocalWallet,
        pool: Address,
        asset_in: Address,
        amount: U256,
    ) -> Result<TxHash> {
        let owner = wallet.address();

        let balance = self.token_balance(asset_in, owner).await?;
        self.require_balance(asset_in, balance, amount)?;
        self.ensure_allowance(wallet, asset_in, self.contracts.bex_liquidity_spender, amount)
            .await?;

        let data = AddLiquidityCall {
            pool,
            receiver: owner,
            assets_in: vec![asset_in],
            amounts_in: vec![amount],
        }
        .encode();

        let call = TxCall::to(self.contracts.bex_vault, data)
            .gas(self.gas.limit_contract_call(), self.gas.call_price_pct());
        self.submit(wallet, call).await
    }
}
