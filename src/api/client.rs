//! HTTP client for the feedback service
//!
//! Posts drafts as JSON to `{base}/feedback` and reads flags from
//! `{base}/feature-flags`.

use super::traits::FeedbackApi;
use crate::state::{Draft, FeatureFlags};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Environment variable overriding the configured service address
pub const API_URL_ENV: &str = "FEEDBACK_API_URL";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Client for a feedback service reachable over HTTP
#[derive(Debug, Clone)]
pub struct HttpFeedbackClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpFeedbackClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

#[async_trait]
impl FeedbackApi for HttpFeedbackClient {
    async fn submit_feedback(&self, draft: &Draft) -> Result<()> {
        let response = self
            .http
            .post(self.endpoint("feedback"))
            .json(draft)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to reach feedback service: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Feedback service answered {}", status));
        }
        Ok(())
    }

    async fn fetch_feature_flags(&self) -> Result<FeatureFlags> {
        let response = self
            .http
            .get(self.endpoint("feature-flags"))
            .send()
            .await
            .map_err(|e| anyhow!("Failed to fetch feature flags: {}", e))?
            .error_for_status()
            .map_err(|e| anyhow!("Feature flag request rejected: {}", e))?;

        response
            .json::<FeatureFlags>()
            .await
            .context("Malformed feature flag payload")
    }
}
