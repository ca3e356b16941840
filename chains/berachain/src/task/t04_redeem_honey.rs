use crate::client::hash_hex;
use crate::task::{portion, Task, TaskContext, TaskOutcome};
use anyhow::Result;
use async_trait::async_trait;
use ethers::prelude::*;
use ethers::utils::format_ether;

pub struct RedeemHoneyTask;

#[async_trait]
impl<P: JsonRpcClient + Clone + 'static> Task<TaskContext<P>> for RedeemHoneyTask {
    fn name(&self) -> &str {
        "04_redeemHoney"
    }

    async fn run(&self, ctx: TaskContext<P>) -> Result<TaskOutcome> {
        let client = &ctx.client;
        let honey = client.contracts().honey;

        let balance = client.token_balance(honey, ctx.wallet.address()).await?;
        let tenths = ctx.fraction.pick(&mut rand::thread_rng());
        let amount = portion(balance, tenths);

        let hash = client.honey_redeem(&ctx.wallet, amount).await?;

        Ok(TaskOutcome::success(
            hash_hex(hash),
            format!("Redeemed {} HONEY for USDC", format_ether(amount)),
        ))
    }
}
