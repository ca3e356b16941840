use crate::client::hash_hex;
use crate::task::{Task, TaskContext, TaskOutcome};
use anyhow::Result;
use async_trait::async_trait;
use ethers::prelude::*;

pub struct BeraNameTask;

#[async_trait]
impl<P: JsonRpcClient + Clone + 'static> Task<TaskContext<P>> for BeraNameTask {
    fn name(&self) -> &str {
        "09_beraName"
    }

    async fn run(&self, ctx: TaskContext<P>) -> Result<TaskOutcome> {
        let (name, hash) = ctx.client.create_bera_name(&ctx.wallet).await?;
        Ok(TaskOutcome::success(
            hash_hex(hash),
            format!("Registered bera name {}", name),
        ))
    }
}
