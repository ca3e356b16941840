use crate::client::hash_hex;
use crate::task::{portion, Task, TaskContext, TaskOutcome};
use anyhow::Result;
use async_trait::async_trait;
use ethers::prelude::*;

/// Supplies part of the USDC balance to Bend.
pub struct BendDepositTask;

#[async_trait]
impl<P: JsonRpcClient + Clone + 'static> Task<TaskContext<P>> for BendDepositTask {
    fn name(&self) -> &str {
        "05_bendDeposit"
    }

    async fn run(&self, ctx: TaskContext<P>) -> Result<TaskOutcome> {
        let client = &ctx.client;
        let usdc = client.contracts().usdc;

        let balance = client.token_balance(usdc, ctx.wallet.address()).await?;
        let tenths = ctx.fraction.pick(&mut rand::thread_rng());
        let amount = portion(balance, tenths);

        let hash = client.bend_deposit(&ctx.wallet, usdc, amount).await?;

        Ok(TaskOutcome::success(
            hash_hex(hash),
            format!("Deposited {} USDC (base units) to Bend", amount),
        ))
    }
}
