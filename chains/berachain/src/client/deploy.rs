use super::{BeraClient, TxCall};
use crate::contracts::DEPLOY_BYTECODE;
use anyhow::{Context, Result};
use ethers::prelude::*;

impl<P: JsonRpcClient + Clone + 'static> BeraClient<P> {
    /// Deploys the minimal constant-returning contract.
    pub async fn deploy_contract(&self, wallet: &LocalWallet) -> Result<TxHash> {
        let balance = self.native_balance(wallet.address()).await?;
        self.require_balance(self.contracts.wbera, balance, U256::zero())?;

        let bytecode = ethers::utils::hex::decode(DEPLOY_BYTECODE).context("Invalid deploy bytecode")?;
        let call = TxCall::create(bytecode).gas(self.gas.limit_deploy(), self.gas.call_price_pct());
        self.submit(wallet, call).await
    }
}
