//! Trait abstraction for the feedback service to enable mocking in tests

use crate::state::{Draft, FeatureFlags};
use anyhow::Result;
use async_trait::async_trait;

/// Operations the widget needs from the feedback service.
///
/// Every error is treated the same way by the widget: as retryable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackApi: Send + Sync {
    /// Deliver one feedback payload
    async fn submit_feedback(&self, draft: &Draft) -> Result<()>;

    /// Fetch the feature flags, once at startup
    async fn fetch_feature_flags(&self) -> Result<FeatureFlags>;
}
