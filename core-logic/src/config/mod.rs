use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl ProxyConfig {
    /// Host and port only, credentials stripped, for logs.
    pub fn display_host(&self) -> &str {
        let without_scheme = self.url.split("://").last().unwrap_or(self.url.as_str());
        without_scheme.rsplit('@').next().unwrap_or(without_scheme)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainConfig {
    pub name: String,
    pub rpc_endpoint: String,
    pub chain_id: u64,
}

/// Pause applied after every activity call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DelayPolicy {
    None,
    Fixed { secs: u64 },
    Random { min_secs: u64, max_secs: u64 },
}

impl Default for DelayPolicy {
    fn default() -> Self {
        DelayPolicy::Fixed { secs: 2 }
    }
}

impl DelayPolicy {
    pub fn next_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        match *self {
            DelayPolicy::None => Duration::ZERO,
            DelayPolicy::Fixed { secs } => Duration::from_secs(secs),
            DelayPolicy::Random { min_secs, max_secs } => {
                let (lo, hi) = if min_secs <= max_secs {
                    (min_secs, max_secs)
                } else {
                    (max_secs, min_secs)
                };
                Duration::from_secs(rng.gen_range(lo..=hi))
            }
        }
    }
}
