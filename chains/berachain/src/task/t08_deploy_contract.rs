use crate::client::hash_hex;
use crate::task::{Task, TaskContext, TaskOutcome};
use anyhow::Result;
use async_trait::async_trait;
use ethers::prelude::*;

pub struct DeployContractTask;

#[async_trait]
impl<P: JsonRpcClient + Clone + 'static> Task<TaskContext<P>> for DeployContractTask {
    fn name(&self) -> &str {
        "08_deployContract"
    }

    async fn run(&self, ctx: TaskContext<P>) -> Result<TaskOutcome> {
        let hash = ctx.client.deploy_contract(&ctx.wallet).await?;
        Ok(TaskOutcome::success(hash_hex(hash), "Deployed contract"))
    }
}
