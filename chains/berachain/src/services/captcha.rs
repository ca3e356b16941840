use crate::config::CaptchaConfig;
use crate::error::CaptchaError;
use anyhow::{Context, Result};
use core_logic::{poll_until, NetworkError};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct SolverResponse {
    status: i64,
    request: String,
}

/// reCAPTCHA v3 solver client for a 2captcha-compatible API.
#[derive(Debug, Clone)]
pub struct CaptchaSolver {
    http: reqwest::Client,
    config: CaptchaConfig,
}

impl CaptchaSolver {
    pub fn new(config: CaptchaConfig) -> Result<Self> {
        Ok(Self {
            http: super::build_http_client(None)?,
            config,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path)
    }

    /// Submits the challenge and polls for the token within the configured budget.
    pub async fn solve(&self) -> Result<String> {
        if self.config.api_key.trim().is_empty() {
            return Err(CaptchaError::MissingApiKey.into());
        }

        let min_score = self.config.min_score.to_string();
        let submit: SolverResponse = self
            .http
            .get(self.endpoint("in.php"))
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("method", "userrecaptcha"),
                ("version", "v3"),
                ("action", self.config.action.as_str()),
                ("min_score", min_score.as_str()),
                ("googlekey", self.config.site_key.as_str()),
                ("pageurl", self.config.page_url.as_str()),
                ("json", "1"),
            ])
            .send()
            .await
            .context("Captcha submit failed")?
            .json()
            .await
            .context("Failed to parse captcha submit response")?;

        if submit.status != 1 {
            return Err(CaptchaError::Rejected {
                response: submit.request,
            }
            .into());
        }

        let task_id = submit.request;
        debug!("Captcha task {} submitted", task_id);

        poll_until(self.config.poll_config(), "captcha token", || {
            self.check(&task_id)
        })
        .await
        .map_err(|e| match e.downcast_ref::<NetworkError>() {
            Some(NetworkError::PollExhausted { attempts, .. }) => {
                anyhow::Error::from(CaptchaError::Timeout { attempts: *attempts })
            }
            _ => e,
        })
    }

    async fn check(&self, task_id: &str) -> Result<Option<String>> {
        let res: SolverResponse = self
            .http
            .get(self.endpoint("res.php"))
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("action", "get"),
                ("id", task_id),
                ("json", "1"),
            ])
            .send()
            .await
            .context("Captcha poll failed")?
            .json()
            .await
            .context("Failed to parse captcha poll response")?;

        if res.status == 1 {
            Ok(Some(res.request))
        } else {
            Ok(None)
        }
    }
}
