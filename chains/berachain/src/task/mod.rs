use crate::client::BeraClient;
use crate::config::FractionRange;
use crate::services::ClaimServices;
use ethers::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;

pub mod t01_bex_swap;
pub mod t02_add_liquidity;
pub mod t03_mint_honey;
pub mod t04_redeem_honey;
pub mod t05_bend_deposit;
pub mod t06_bend_borrow;
pub mod t07_honey_jar_mint;
pub mod t08_deploy_contract;
pub mod t09_bera_name;
pub mod t10_claim_faucet;

pub use self::t01_bex_swap::{BexSwapTask, SwapTarget};
pub use self::t02_add_liquidity::{AddLiquidityTask, LiquidityPool};
pub use self::t03_mint_honey::MintHoneyTask;
pub use self::t04_redeem_honey::RedeemHoneyTask;
pub use self::t05_bend_deposit::BendDepositTask;
pub use self::t06_bend_borrow::BendBorrowTask;
pub use self::t07_honey_jar_mint::HoneyJarMintTask;
pub use self::t08_deploy_contract::DeployContractTask;
pub use self::t09_bera_name::BeraNameTask;
pub use self::t10_claim_faucet::ClaimFaucetTask;

pub use core_logic::traits::{Task, TaskOutcome};

/// Everything one activity call needs for one wallet.
#[derive(Clone)]
pub struct TaskContext<P: JsonRpcClient = Http> {
    pub client: Arc<BeraClient<P>>,
    pub claim: Arc<ClaimServices>,
    pub wallet: LocalWallet,
    pub proxy: Option<core_logic::ProxyConfig>,
    /// Share of the queried balance to spend, in tenths.
    pub fraction: FractionRange,
    pub borrow_amount: U256,
}

pub type BeraTask<P = Http> = dyn Task<TaskContext<P>>;

/// `tenths / 10` of `balance`, rounded down and saturating at `U256::MAX`.
pub fn portion(balance: U256, tenths: u8) -> U256 {
    let scaled = balance.full_mul(U256::from(tenths)) / U512::from(10u8);
    U256::try_from(scaled).unwrap_or(U256::MAX)
}

/// One on-chain step of a wallet's route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    SwapToUsdc,
    SwapToWeth,
    LiquidityUsdc,
    LiquidityWeth,
    MintHoney,
    RedeemHoney,
    BendDeposit,
    BendBorrow,
    HoneyJarMint,
    DeployContract,
    BeraName,
}

impl Activity {
    /// Fixed route order, also the full set shuffled in randomized mode.
    pub const ROUTE: [Activity; 11] = [
        Activity::SwapToUsdc,
        Activity::SwapToWeth,
        Activity::LiquidityUsdc,
        Activity::LiquidityWeth,
        Activity::MintHoney,
        Activity::RedeemHoney,
        Activity::BendDeposit,
        Activity::BendBorrow,
        Activity::HoneyJarMint,
        Activity::DeployContract,
        Activity::BeraName,
    ];

    pub fn task<P: JsonRpcClient + Clone + 'static>(self) -> Box<BeraTask<P>> {
        match self {
            Activity::SwapToUsdc => Box::new(BexSwapTask::new(SwapTarget::Usdc)),
            Activity::SwapToWeth => Box::new(BexSwapTask::new(SwapTarget::Weth)),
            Activity::LiquidityUsdc => Box::new(AddLiquidityTask::new(LiquidityPool::Usdc)),
            Activity::LiquidityWeth => Box::new(AddLiquidityTask::new(LiquidityPool::Weth)),
            Activity::MintHoney => Box::new(MintHoneyTask),
            Activity::RedeemHoney => Box::new(RedeemHoneyTask),
            Activity::BendDeposit => Box::new(BendDepositTask),
            Activity::BendBorrow => Box::new(BendBorrowTask),
            Activity::HoneyJarMint => Box::new(HoneyJarMintTask),
            Activity::DeployContract => Box::new(DeployContractTask),
            Activity::BeraName => Box::new(BeraNameTask),
        }
    }

    /// Uniformly random permutation of the full route.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Vec<Activity> {
        let mut order = Self::ROUTE.to_vec();
        order.shuffle(rng);
        order
    }
}

/// Entries of the "choose activity" menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    BexSwap,
    AddLiquidity,
    MintHoney,
    RedeemHoney,
    BendDeposit,
    BendBorrow,
    HoneyJarMint,
    DeployContract,
    BeraName,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 9] = [
        ActivityKind::BexSwap,
        ActivityKind::AddLiquidity,
        ActivityKind::MintHoney,
        ActivityKind::RedeemHoney,
        ActivityKind::BendDeposit,
        ActivityKind::BendBorrow,
        ActivityKind::HoneyJarMint,
        ActivityKind::DeployContract,
        ActivityKind::BeraName,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::BexSwap => "Bex Swap",
            ActivityKind::AddLiquidity => "Add Liquidity",
            ActivityKind::MintHoney => "Mint Honey",
            ActivityKind::RedeemHoney => "Redeem Honey",
            ActivityKind::BendDeposit => "Deposit to Bend",
            ActivityKind::BendBorrow => "Borrow from Bend",
            ActivityKind::HoneyJarMint => "Mint Honey Jar",
            ActivityKind::DeployContract => "Deploy contract",
            ActivityKind::BeraName => "Bera name create",
        }
    }

    /// Steps run per wallet when this entry is selected.
    pub fn activities(self) -> &'static [Activity] {
        match self {
            ActivityKind::BexSwap => &[Activity::SwapToUsdc, Activity::SwapToWeth],
            ActivityKind::AddLiquidity => &[Activity::LiquidityUsdc, Activity::LiquidityWeth],
            ActivityKind::MintHoney => &[Activity::MintHoney],
            ActivityKind::RedeemHoney => &[Activity::RedeemHoney],
            ActivityKind::BendDeposit => &[Activity::BendDeposit],
            ActivityKind::BendBorrow => &[Activity::BendBorrow],
            ActivityKind::HoneyJarMint => &[Activity::HoneyJarMint],
            ActivityKind::DeployContract => &[Activity::DeployContract],
            ActivityKind::BeraName => &[Activity::BeraName],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_portion_rounds_down() {
        assert_eq!(portion(U256::from(1_000), 2), U256::from(200));
        assert_eq!(portion(U256::from(9), 1), U256::zero());
        assert_eq!(portion(U256::zero(), 4), U256::zero());
    }

    #[test]
    fn test_portion_of_huge_balance() {
        assert_eq!(portion(U256::MAX, 10), U256::MAX);
        assert_eq!(portion(U256::MAX, 5), U256::MAX / 2);
        assert_eq!(portion(U256::MAX, 20), U256::MAX);
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let order = Activity::shuffled(&mut rng);
            assert_eq!(order.len(), Activity::ROUTE.len());
            let unique: HashSet<_> = order.iter().collect();
            assert_eq!(unique.len(), Activity::ROUTE.len());
        }
    }

    #[test]
    fn test_kinds_cover_route() {
        let covered: Vec<Activity> = ActivityKind::ALL
            .iter()
            .flat_map(|k| k.activities().iter().copied())
            .collect();
        assert_eq!(covered, Activity::ROUTE.to_vec());
    }

    #[test]
    fn test_task_names_unique() {
        let names: HashSet<String> = Activity::ROUTE
            .iter()
            .map(|a| a.task::<Http>().name().to_string())
            .collect();
        assert_eq!(names.len(), Activity::ROUTE.len());
    }
}
