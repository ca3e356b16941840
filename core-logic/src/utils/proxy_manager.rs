use crate::config::ProxyConfig;
use crate::error::NetworkError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// One proxy line: parsed, or the reason it could not be.
pub type ProxySlot = Result<ProxyConfig, NetworkError>;

pub struct ProxyManager;

impl ProxyManager {
    pub const DEFAULT_FILE: &'static str = "data/proxy.txt";

    /// Loads proxies, one slot per line, keeping file order so they pair with wallets by index.
    /// Accepted forms: `ip:port`, `ip:port:user:pass`, `user:pass@ip:port`, or a full URL.
    pub fn load_proxies(path: impl AsRef<Path>) -> Result<Vec<ProxySlot>> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("{} not found. Running without proxies.", path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let proxies = Self::parse_lines(&content);

        let unusable = proxies.iter().filter(|p| p.is_err()).count();
        info!(
            "Loaded {} proxies from {} ({} unusable)",
            proxies.len(),
            path.display(),
            unusable
        );
        Ok(proxies)
    }

    /// Blank and `#` lines are ignored; every other line keeps its slot.
    pub fn parse_lines(content: &str) -> Vec<ProxySlot> {
        let mut proxies = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let slot = Self::parse_line(line);
            if let Err(e) = &slot {
                warn!("Unusable proxy line: {}", e);
            }
            proxies.push(slot);
        }

        proxies
    }

    pub fn parse_line(line: &str) -> Result<ProxyConfig, NetworkError> {
        let invalid = |reason: &str| NetworkError::InvalidProxy {
            proxy: line.to_string(),
            reason: reason.to_string(),
        };

        // Full URL, credentials (if any) stay embedded
        if line.contains("://") {
            return Ok(ProxyConfig {
                url: line.to_string(),
                username: None,
                password: None,
            });
        }

        // user:pass@ip:port
        if let Some((creds, host)) = line.rsplit_once('@') {
            let (user, pass) = creds
                .split_once(':')
                .ok_or_else(|| invalid("expected user:pass before '@'"))?;
            let (ip, port) = host
                .split_once(':')
                .ok_or_else(|| invalid("expected ip:port after '@'"))?;
            Self::check_port(port).map_err(|_| invalid("port is not a number"))?;
            return Ok(ProxyConfig {
                url: format!("http://{}:{}", ip, port),
                username: Some(user.to_string()),
                password: Some(pass.to_string()),
            });
        }

        // ip:port:user:pass -> 4 parts
        // ip:port -> 2 parts
        let parts: Vec<&str> = line.split(':').collect();
        match parts.len() {
            2 | 4 => {
                Self::check_port(parts[1]).map_err(|_| invalid("port is not a number"))?;
                let url = format!("http://{}:{}", parts[0], parts[1]);
                let (username, password) = if parts.len() == 4 {
                    (Some(parts[2].to_string()), Some(parts[3].to_string()))
                } else {
                    (None, None)
                };
                Ok(ProxyConfig {
                    url,
                    username,
                    password,
                })
            }
            _ => Err(invalid("expected ip:port or ip:port:user:pass")),
        }
    }

    fn check_port(port: &str) -> Result<u16, std::num::ParseIntError> {
        port.parse::<u16>()
    }
}
