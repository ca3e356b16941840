use crate::config::SwapConfig;
use crate::contracts::BatchSwapStep;
use crate::error::ActivityError;
use anyhow::{Context, Result};
use ethers::types::{Address, Bytes, U256, U512};
use serde::{de, Deserialize, Deserializer};
use tracing::debug;

/// One hop of a route as returned by the dex router.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStep {
    pub pool: Address,
    pub asset_in: Address,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount_in: U256,
    pub asset_out: Address,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount_out: U256,
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
    #[serde(default)]
    steps: Vec<RouteStep>,
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => {
            let parsed = match s.strip_prefix("0x") {
                Some(hex) => U256::from_str_radix(hex, 16).map_err(|e| e.to_string()),
                None => U256::from_dec_str(&s).map_err(|e| e.to_string()),
            };
            parsed.map_err(|e| de::Error::custom(format!("invalid amount '{}': {}", s, e)))
        }
        serde_json::Value::Number(n) => number_amount(&n)
            .ok_or_else(|| de::Error::custom(format!("invalid amount {}", n))),
        other => Err(de::Error::custom(format!("invalid amount {}", other))),
    }
}

/// Plain JSON integers above `u64::MAX` arrive as floats.
fn number_amount(n: &serde_json::Number) -> Option<U256> {
    if let Some(v) = n.as_u64() {
        return Some(U256::from(v));
    }
    let f = n.as_f64()?;
    if !f.is_finite() || f < 0.0 || f.fract() != 0.0 {
        return None;
    }
    U256::from_dec_str(&format!("{:.0}", f)).ok()
}

#[derive(Debug, Clone)]
pub struct RouteClient {
    http: reqwest::Client,
    base_url: String,
    origin: Option<String>,
}

impl RouteClient {
    pub fn new(config: &SwapConfig) -> Result<Self> {
        Ok(Self {
            http: super::build_http_client(None)?,
            base_url: config.router_url.trim_end_matches('/').to_string(),
            origin: config.origin.clone(),
        })
    }

    /// GET `/dex/route` for a given-in swap of `amount_in`.
    pub async fn fetch_route(
        &self,
        asset_in: Address,
        asset_out: Address,
        amount_in: U256,
    ) -> Result<Vec<RouteStep>> {
        let url = format!("{}/dex/route", self.base_url);
        let mut request = self.http.get(&url).header("accept", "*/*").query(&[
            ("quoteAsset", format!("{:?}", asset_out)),
            ("baseAsset", format!("{:?}", asset_in)),
            ("amount", amount_in.to_string()),
            ("swap_type", "given_in".to_string()),
        ]);
        if let Some(origin) = &self.origin {
            request = request
                .header("origin", origin)
                .header("referer", format!("{}/", origin));
        }

        let response = request.send().await.context("Route request failed")?;
        let status = response.status();
        if !status.is_success() {
            return Err(ActivityError::Route {
                reason: format!("router answered HTTP {}", status.as_u16()),
            }
            .into());
        }

        let body: RouteResponse = response
            .json()
            .await
            .context("Failed to parse route response")?;
        if body.steps.is_empty() {
            return Err(ActivityError::Route {
                reason: "router returned no steps".into(),
            }
            .into());
        }

        debug!("Route {:?} -> {:?}: {} hops", asset_in, asset_out, body.steps.len());
        Ok(body.steps)
    }
}

/// Turns router hops into batch-swap steps.
///
/// Only the last hop expects output, cut by `slippage_bps`. With a native
/// input the first hop spends the zero address instead of the wrapped token.
pub fn build_batch_steps(
    steps: &[RouteStep],
    native_in: bool,
    slippage_bps: u32,
) -> Result<Vec<BatchSwapStep>, ActivityError> {
    let last = steps.len().saturating_sub(1);
    let keep_bps = U256::from(10_000u32.saturating_sub(slippage_bps));

    steps
        .iter()
        .enumerate()
        .map(|(i, step)| -> Result<BatchSwapStep, ActivityError> {
            let amount_out = if i == last {
                min_output(step.amount_out, keep_bps)?
            } else {
                U256::zero()
            };
            Ok(BatchSwapStep {
                pool_id: step.pool,
                asset_in: if i == 0 && native_in {
                    Address::zero()
                } else {
                    step.asset_in
                },
                amount_in: step.amount_in,
                asset_out: step.asset_out,
                amount_out,
                user_data: Bytes::new(),
            })
        })
        .collect()
}

/// `quoted * keep_bps / 10_000` computed in 512 bits.
fn min_output(quoted: U256, keep_bps: U256) -> Result<U256, ActivityError> {
    U256::try_from(quoted.full_mul(keep_bps) / U512::from(10_000u32)).map_err(|_| {
        ActivityError::Route {
            reason: format!("quoted output {} out of range", quoted),
        }
    })
}
