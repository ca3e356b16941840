use crate::client::hash_hex;
use crate::task::{portion, Task, TaskContext, TaskOutcome};
use anyhow::Result;
use async_trait::async_trait;
use ethers::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiquidityPool {
    Usdc,
    Weth,
}

/// Single-asset deposit into the USDC or WETH pool.
pub struct AddLiquidityTask {
    pool: LiquidityPool,
}

impl AddLiquidityTask {
    pub fn new(pool: LiquidityPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl<P: JsonRpcClient + Clone + 'static> Task<TaskContext<P>> for AddLiquidityTask {
    fn name(&self) -> &str {
        match self.pool {
            LiquidityPool::Usdc => "02_addLiquidityUsdc",
            LiquidityPool::Weth => "02_addLiquidityWeth",
        }
    }

    async fn run(&self, ctx: TaskContext<P>) -> Result<TaskOutcome> {
        let client = &ctx.client;
        let book = *client.contracts();
        let (pool, asset, symbol) = match self.pool {
            LiquidityPool::Usdc => (book.usdc_pool, book.usdc, "USDC"),
            LiquidityPool::Weth => (book.weth_pool, book.weth, "WETH"),
        };

        let balance = client.token_balance(asset, ctx.wallet.address()).await?;
        let tenths = ctx.fraction.pick(&mut rand::thread_rng());
        let amount = portion(balance, tenths);

        let hash = client
            .bex_add_liquidity(&ctx.wallet, pool, asset, amount)
            .await?;

        Ok(TaskOutcome::success(
            hash_hex(hash),
            format!("Added {} {} (base units) to pool {:?}", amount, symbol, pool),
        ))
    }
}
