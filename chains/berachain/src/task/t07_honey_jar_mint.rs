use crate::client::{hash_hex, JarMint};
use crate::task::{Task, TaskContext, TaskOutcome};
use anyhow::Result;
use async_trait::async_trait;
use ethers::prelude::*;

pub struct HoneyJarMintTask;

#[async_trait]
impl<P: JsonRpcClient + Clone + 'static> Task<TaskContext<P>> for HoneyJarMintTask {
    fn name(&self) -> &str {
        "07_honeyJarMint"
    }

    async fn run(&self, ctx: TaskContext<P>) -> Result<TaskOutcome> {
        match ctx.client.honey_jar_mint(&ctx.wallet).await? {
            JarMint::Minted(hash) => Ok(TaskOutcome::success(hash_hex(hash), "Minted honey jar")),
            JarMint::AlreadyMinted => Ok(TaskOutcome::already_done("Honey jar already minted")),
        }
    }
}
