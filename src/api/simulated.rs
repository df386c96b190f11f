//! Stand-in feedback service used when no service address is configured

use super::traits::FeedbackApi;
use crate::state::{Draft, FeatureFlags};
use anyhow::{bail, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Simulates network latency and intermittent failures
#[derive(Debug, Clone)]
pub struct SimulatedFeedbackClient {
    flags: FeatureFlags,
    failure_rate: f64,
    flags_delay: Duration,
    min_submit_delay: Duration,
    max_extra_delay: Duration,
}

impl SimulatedFeedbackClient {
    pub fn new() -> Self {
        Self {
            flags: FeatureFlags {
                email_required: true,
                dark_mode: false,
            },
            failure_rate: 0.2,
            flags_delay: Duration::from_millis(500),
            min_submit_delay: Duration::from_millis(500),
            max_extra_delay: Duration::from_millis(1000),
        }
    }

    /// Instant responses with a fixed failure rate
    pub fn without_latency(failure_rate: f64) -> Self {
        Self {
            failure_rate,
            flags_delay: Duration::ZERO,
            min_submit_delay: Duration::ZERO,
            max_extra_delay: Duration::ZERO,
            ..Self::new()
        }
    }

    pub fn with_flags(mut self, flags: FeatureFlags) -> Self {
        self.flags = flags;
        self
    }
}

impl Default for SimulatedFeedbackClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedbackApi for SimulatedFeedbackClient {
    async fn submit_feedback(&self, draft: &Draft) -> Result<()> {
        let extra = self.max_extra_delay.mul_f64(rand::random::<f64>());
        tokio::time::sleep(self.min_submit_delay + extra).await;

        if rand::random::<f64>() < self.failure_rate {
            bail!("Submission failed");
        }
        tracing::debug!(
            "Simulated delivery of {} feedback ({} chars)",
            draft.category.label(),
            draft.message.chars().count()
        );
        Ok(())
    }

    async fn fetch_feature_flags(&self) -> Result<FeatureFlags> {
        tokio::time::sleep(self.flags_delay).await;
        Ok(self.flags)
    }
}
