use crate::config::FaucetConfig;
use crate::error::ActivityError;
use anyhow::{Context, Result};
use core_logic::ProxyConfig;
use ethers::types::Address;
use ethers::utils::to_checksum;

#[derive(Debug, Clone)]
pub struct FaucetClient {
    config: FaucetConfig,
}

impl FaucetClient {
    pub fn new(config: FaucetConfig) -> Self {
        Self { config }
    }

    /// Posts one claim for `address`, authorised by the captcha token and sent through `proxy`.
    pub async fn claim(
        &self,
        address: Address,
        captcha_token: &str,
        proxy: Option<&ProxyConfig>,
    ) -> Result<String> {
        let http = super::build_http_client(proxy)?;
        let address = to_checksum(&address, None);
        let body = serde_json::json!({ "address": address }).to_string();

        let response = http
            .post(&self.config.url)
            .query(&[("address", address.as_str())])
            .header("accept", "*/*")
            .header("authorization", format!("Bearer {}", captcha_token))
            .header("cache-control", "no-cache")
            .header("content-type", "text/plain;charset=UTF-8")
            .header("origin", &self.config.origin)
            .header("pragma", "no-cache")
            .header("referer", format!("{}/", self.config.origin))
            .header("user-agent", &self.config.user_agent)
            .body(body)
            .send()
            .await
            .context("Faucet request failed")?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(ActivityError::Faucet {
                status: status.as_u16(),
                body: text,
            }
            .into());
        }
        Ok(text)
    }
}
