use crate::task::{Task, TaskContext, TaskOutcome};
use anyhow::{Context, Result};
use async_trait::async_trait;
use ethers::prelude::*;

/// Captcha-gated faucet claim through the wallet's paired proxy.
pub struct ClaimFaucetTask;

#[async_trait]
impl<P: JsonRpcClient + Clone + 'static> Task<TaskContext<P>> for ClaimFaucetTask {
    fn name(&self) -> &str {
        "10_claimFaucet"
    }

    async fn run(&self, ctx: TaskContext<P>) -> Result<TaskOutcome> {
        let token = ctx
            .claim
            .captcha
            .solve()
            .await
            .context("Cannot get captcha token")?;

        let body = ctx
            .claim
            .faucet
            .claim(ctx.wallet.address(), &token, ctx.proxy.as_ref())
            .await?;

        let via = ctx
            .proxy
            .as_ref()
            .map(|p| p.display_host().to_string())
            .unwrap_or_else(|| "direct".to_string());

        Ok(TaskOutcome::Success {
            tx_hash: None,
            message: format!("Claimed BERA via {}: {}", via, body.trim()),
        })
    }
}
