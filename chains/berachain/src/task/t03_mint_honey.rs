use crate::client::hash_hex;
use crate::task::{portion, Task, TaskContext, TaskOutcome};
use anyhow::Result;
use async_trait::async_trait;
use ethers::prelude::*;

pub struct MintHoneyTask;

#[async_trait]
impl<P: JsonRpcClient + Clone + 'static> Task<TaskContext<P>> for MintHoneyTask {
    fn name(&self) -> &str {
        "03_mintHoney"
    }

    async fn run(&self, ctx: TaskContext<P>) -> Result<TaskOutcome> {
        let client = &ctx.client;
        let usdc = client.contracts().usdc;

        let balance = client.token_balance(usdc, ctx.wallet.address()).await?;
        let tenths = ctx.fraction.pick(&mut rand::thread_rng());
        let amount = portion(balance, tenths);

        let hash = client.honey_mint(&ctx.wallet, amount).await?;

        Ok(TaskOutcome::success(
            hash_hex(hash),
            format!("Minted HONEY with {} USDC (base units)", amount),
        ))
    }
}
