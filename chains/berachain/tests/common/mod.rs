#![allow(dead_code)]

use async_trait::async_trait;
use bera_project::client::BeraClient;
use bera_project::config::{BeraConfig, CaptchaConfig, FaucetConfig, PacingConfig};
use core_logic::DelayPolicy;
use ethers::abi::AbiEncode;
use ethers::prelude::*;
use ethers::providers::MockError;
use ethers::utils::rlp::Rlp;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const PRIVATE_KEY: &str = "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

pub fn test_config() -> BeraConfig {
    let mut config = BeraConfig::load("config.toml").unwrap();
    config.captcha.api_key = String::new();
    config
}

pub fn mocked_client() -> (BeraClient<MockProvider>, MockProvider) {
    let (provider, mock) = Provider::mocked();
    let client = BeraClient::new(provider, &test_config()).unwrap();
    (client, mock)
}

pub fn test_wallet<P: JsonRpcClient + Clone + 'static>(client: &BeraClient<P>) -> LocalWallet {
    client.signer_from_key(PRIVATE_KEY).unwrap()
}

/// Mocked node that also keeps every request it answered.
///
/// Responses are served last-pushed-first, like `MockProvider`.
#[derive(Debug, Clone, Default)]
pub struct RecordingNode {
    mock: MockProvider,
    requests: Arc<Mutex<Vec<(String, serde_json::Value)>>>,
}

impl RecordingNode {
    pub fn push<T: Serialize + Send + Sync>(&self, value: T) {
        self.mock.push::<T, T>(value).unwrap();
    }

    pub fn methods(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(method, _)| method.clone())
            .collect()
    }

    /// Every `eth_sendRawTransaction` payload, decoded with its recovered sender.
    pub fn sent_transactions(&self) -> Vec<TransactionRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(method, _)| method == "eth_sendRawTransaction")
            .map(|(_, params)| {
                let raw: Bytes = serde_json::from_value(params[0].clone()).unwrap();
                TransactionRequest::decode_signed_rlp(&Rlp::new(raw.as_ref()))
                    .unwrap()
                    .0
            })
            .collect()
    }
}

#[async_trait]
impl JsonRpcClient for RecordingNode {
    type Error = MockError;

    async fn request<T, R>(&self, method: &str, params: T) -> Result<R, MockError>
    where
        T: Debug + Serialize + Send + Sync,
        R: DeserializeOwned + Send,
    {
        let recorded = serde_json::to_value(&params)?;
        self.requests
            .lock()
            .unwrap()
            .push((method.to_string(), recorded));
        JsonRpcClient::request(&self.mock, method, params).await
    }
}

/// Client over a recording node that polls pending transactions every 10ms.
pub fn recording_client(config: &BeraConfig) -> (BeraClient<RecordingNode>, RecordingNode) {
    let node = RecordingNode::default();
    let provider = Provider::new(node.clone()).interval(Duration::from_millis(10));
    let client = BeraClient::new(provider, config).unwrap();
    (client, node)
}

/// Mined transaction and successful (`status = 1`) or reverted receipt for `hash`.
pub fn mined(hash: TxHash, success: bool) -> (Transaction, TransactionReceipt) {
    let tx = Transaction {
        hash,
        block_number: Some(U64::from(1)),
        ..Default::default()
    };
    let receipt = TransactionReceipt {
        transaction_hash: hash,
        block_number: Some(U64::from(1)),
        status: Some(U64::from(success as u64)),
        ..Default::default()
    };
    (tx, receipt)
}

/// Return value of an `eth_call` that yields a single word.
pub fn call_result<T: AbiEncode>(value: T) -> Bytes {
    Bytes::from(value.encode())
}

pub fn no_pauses() -> PacingConfig {
    PacingConfig {
        claim: DelayPolicy::None,
        route: DelayPolicy::None,
        selective: DelayPolicy::None,
        random: DelayPolicy::None,
    }
}

pub fn captcha_config(api_url: &str, api_key: &str, max_attempts: u32) -> CaptchaConfig {
    CaptchaConfig {
        api_url: api_url.to_string(),
        api_key: api_key.to_string(),
        site_key: "site-key".to_string(),
        page_url: "https://faucet.example/".to_string(),
        action: "submit".to_string(),
        min_score: 0.5,
        max_attempts,
        interval_secs: 0,
    }
}

pub fn faucet_config(url: &str) -> FaucetConfig {
    FaucetConfig {
        url: url.to_string(),
        origin: "https://faucet.example".to_string(),
        user_agent: "test-agent".to_string(),
    }
}
