use crate::client::hash_hex;
use crate::task::{portion, Task, TaskContext, TaskOutcome};
use anyhow::Result;
use async_trait::async_trait;
use ethers::prelude::*;
use ethers::utils::format_ether;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapTarget {
    Usdc,
    Weth,
}

/// Native BERA into USDC or WETH through the BEX router.
pub struct BexSwapTask {
    target: SwapTarget,
}

impl BexSwapTask {
    pub fn new(target: SwapTarget) -> Self {
        Self { target }
    }
}

#[async_trait]
impl<P: JsonRpcClient + Clone + 'static> Task<TaskContext<P>> for BexSwapTask {
    fn name(&self) -> &str {
        match self.target {
            SwapTarget::Usdc => "01_bexSwapUsdc",
            SwapTarget::Weth => "01_bexSwapWeth",
        }
    }

    async fn run(&self, ctx: TaskContext<P>) -> Result<TaskOutcome> {
        let client = &ctx.client;
        let book = *client.contracts();
        let (asset_out, symbol) = match self.target {
            SwapTarget::Usdc => (book.usdc, "USDC"),
            SwapTarget::Weth => (book.weth, "WETH"),
        };

        let balance = client.native_balance(ctx.wallet.address()).await?;
        let tenths = ctx.fraction.pick(&mut rand::thread_rng());
        let amount = portion(balance, tenths);

        let hash = client
            .bex_swap(&ctx.wallet, book.wbera, asset_out, amount)
            .await?;

        Ok(TaskOutcome::success(
            hash_hex(hash),
            format!("Swapped {} BERA to {}", format_ether(amount), symbol),
        ))
    }
}
