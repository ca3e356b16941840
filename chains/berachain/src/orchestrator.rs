//! Batch modes: faucet claims, the fixed route, one selected activity and
//! the randomized route. Wallets run one after another, activities one at
//! a time, with the mode's delay policy applied after every call.

use crate::client::BeraClient;
use crate::config::{AmountsConfig, BeraConfig, FractionRange, PacingConfig};
use crate::services::ClaimServices;
use crate::task::{Activity, ActivityKind, BeraTask, ClaimFaucetTask, TaskContext};
use core_logic::{
    ActivityRunner, BatchReport, DelayPolicy, ProxyConfig, ProxySlot, WalletManager, ACTIVITY_TARGET,
};
use ethers::prelude::*;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Claim,
    FixedRoute,
    Selective(ActivityKind),
    Randomized,
}

impl Mode {
    pub fn label(&self) -> String {
        match self {
            Mode::Claim => "Faucet claim".to_string(),
            Mode::FixedRoute => "Fixed route".to_string(),
            Mode::Selective(kind) => format!("Selected activity ({})", kind.label()),
            Mode::Randomized => "Randomized route".to_string(),
        }
    }
}

pub struct Orchestrator<P: JsonRpcClient = Http> {
    client: Arc<BeraClient<P>>,
    claim: Arc<ClaimServices>,
    wallets: WalletManager,
    proxies: Vec<ProxySlot>,
    pacing: PacingConfig,
    amounts: AmountsConfig,
}

/// A wallet whose key parsed into a signer.
struct Resolved {
    id: String,
    address: String,
    wallet: LocalWallet,
}

impl<P: JsonRpcClient + Clone + 'static> Orchestrator<P> {
    pub fn new(
        client: BeraClient<P>,
        claim: ClaimServices,
        wallets: WalletManager,
        proxies: Vec<ProxySlot>,
        config: &BeraConfig,
    ) -> Self {
        Self {
            client: Arc::new(client),
            claim: Arc::new(claim),
            wallets,
            proxies,
            pacing: config.pacing,
            amounts: config.amounts,
        }
    }

    /// Replaces the configured delay policies.
    pub fn with_pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = pacing;
        self
    }

    pub async fn run(&self, mode: Mode) -> BatchReport {
        info!(
            target: ACTIVITY_TARGET,
            "{} started for {} wallets",
            mode.label(),
            self.wallets.count()
        );

        let mut runner = ActivityRunner::new();
        match mode {
            Mode::Claim => self.claim_all(&mut runner).await,
            Mode::FixedRoute => {
                let fraction = self.amounts.route_tenths;
                self.for_each_wallet(&mut runner, fraction, &self.pacing.route, |_| {
                    Activity::ROUTE.to_vec()
                })
                .await
            }
            Mode::Selective(kind) => {
                let fraction = self.amounts.selective_tenths;
                self.for_each_wallet(&mut runner, fraction, &self.pacing.selective, |_| {
                    kind.activities().to_vec()
                })
                .await
            }
            Mode::Randomized => {
                let fraction = self.amounts.route_tenths;
                self.for_each_wallet(&mut runner, fraction, &self.pacing.random, |_| {
                    Activity::shuffled(&mut rand::thread_rng())
                })
                .await
            }
        }
        runner.finish(&mode.label())
    }

    fn resolve(&self, runner: &mut ActivityRunner, index: usize) -> Option<Resolved> {
        let id = format!("{:03}", index + 1);
        let key = match self.wallets.get(index) {
            Ok(key) => key,
            Err(e) => {
                runner.record_failure(&id, "wallet", &e.to_string());
                return None;
            }
        };

        match self.client.signer_from_key(key.expose()) {
            Ok(wallet) => Some(Resolved {
                id,
                address: format!("{:?}", wallet.address()),
                wallet,
            }),
            Err(e) => {
                runner.record_failure(&id, "wallet", &format!("{:#}", e));
                None
            }
        }
    }

    fn context(
        &self,
        wallet: LocalWallet,
        proxy: Option<ProxyConfig>,
        fraction: FractionRange,
    ) -> TaskContext<P> {
        TaskContext {
            client: self.client.clone(),
            claim: self.claim.clone(),
            wallet,
            proxy,
            fraction,
            borrow_amount: U256::from(self.amounts.borrow_amount_wei),
        }
    }

    async fn for_each_wallet<F>(
        &self,
        runner: &mut ActivityRunner,
        fraction: FractionRange,
        pause: &DelayPolicy,
        mut plan: F,
    ) where
        F: FnMut(usize) -> Vec<Activity>,
    {
        for index in 0..self.wallets.count() {
            let Some(resolved) = self.resolve(runner, index) else {
                continue;
            };
            let activities = plan(index);

            info!(
                target: ACTIVITY_TARGET,
                "[WL:{}] {} running {} activities",
                resolved.id,
                resolved.address,
                activities.len()
            );

            for activity in activities {
                let task = activity.task::<P>();
                let ctx = self.context(resolved.wallet.clone(), None, fraction);
                runner
                    .run_task(&resolved.id, &resolved.address, task.as_ref(), ctx)
                    .await;
                runner.pause(pause).await;
            }
        }
    }

    /// One claim per wallet/proxy pair, matched by line position. An unusable
    /// proxy line fails its wallet's claim without shifting the others.
    async fn claim_all(&self, runner: &mut ActivityRunner) {
        let wallets = self.wallets.count();
        if wallets != self.proxies.len() {
            warn!(
                "{} wallets but {} proxies. Only {} claims will run.",
                wallets,
                self.proxies.len(),
                wallets.min(self.proxies.len())
            );
        }

        let task: &BeraTask<P> = &ClaimFaucetTask;
        for (index, proxy) in self.proxies.iter().take(wallets).enumerate() {
            let Some(resolved) = self.resolve(runner, index) else {
                continue;
            };
            let proxy = match proxy {
                Ok(proxy) => proxy,
                Err(e) => {
                    runner.record_failure(&resolved.id, task.name(), &e.to_string());
                    continue;
                }
            };

            info!(
                target: ACTIVITY_TARGET,
                "[WL:{}] Claiming BERA for {} using proxy {}",
                resolved.id,
                resolved.address,
                proxy.display_host()
            );

            let ctx = self.context(resolved.wallet, Some(proxy.clone()), self.amounts.route_tenths);
            runner
                .run_task(&resolved.id, &resolved.address, task, ctx)
                .await;
            runner.pause(&self.pacing.claim).await;
        }
    }
}
