//! HTTP services outside the chain: swap routing, captcha solving and the faucet.

pub mod captcha;
pub mod faucet;
pub mod router;

pub use captcha::CaptchaSolver;
pub use faucet::FaucetClient;
pub use router::{build_batch_steps, RouteClient, RouteStep};

use anyhow::{Context, Result};
use core_logic::ProxyConfig;
use std::time::Duration;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Plain client, or one tunnelled through `proxy` with its credentials.
pub fn build_http_client(proxy: Option<&ProxyConfig>) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().timeout(HTTP_TIMEOUT);
    if let Some(proxy_conf) = proxy {
        let mut proxy = reqwest::Proxy::all(&proxy_conf.url)
            .with_context(|| format!("Invalid proxy {}", proxy_conf.display_host()))?;
        if let (Some(u), Some(p)) = (&proxy_conf.username, &proxy_conf.password) {
            proxy = proxy.basic_auth(u, p);
        }
        builder = builder.proxy(proxy);
    }
    builder.build().context("Failed to build HTTP client")
}

/// Faucet-side services shared by every claim.
#[derive(Debug, Clone)]
pub struct ClaimServices {
    pub captcha: CaptchaSolver,
    pub faucet: FaucetClient,
}
