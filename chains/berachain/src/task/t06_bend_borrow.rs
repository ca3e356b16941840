use crate::client::hash_hex;
use crate::task::{Task, TaskContext, TaskOutcome};
use anyhow::Result;
use async_trait::async_trait;
use ethers::prelude::*;
use ethers::utils::format_ether;

pub struct BendBorrowTask;

#[async_trait]
impl<P: JsonRpcClient + Clone + 'static> Task<TaskContext<P>> for BendBorrowTask {
    fn name(&self) -> &str {
        "06_bendBorrow"
    }

    async fn run(&self, ctx: TaskContext<P>) -> Result<TaskOutcome> {
        let weth = ctx.client.contracts().weth;
        let hash = ctx
            .client
            .bend_borrow(&ctx.wallet, weth, ctx.borrow_amount)
            .await?;

        Ok(TaskOutcome::success(
            hash_hex(hash),
            format!("Borrowed {} WETH from Bend", format_ether(ctx.borrow_amount)),
        ))
    }
}
