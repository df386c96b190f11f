//! Feature flags supplied by the host at startup

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Externally supplied toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureFlags {
    /// Email becomes a required field
    pub email_required: bool,
    /// Use the dark palette
    pub dark_mode: bool,
}

/// Owner of the flag values for the lifetime of the host.
///
/// Starts with safe defaults and accepts exactly one resolution.
#[derive(Debug)]
pub struct FeatureFlagProvider {
    tx: watch::Sender<FeatureFlags>,
    resolved: bool,
}

impl FeatureFlagProvider {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(FeatureFlags::default());
        Self {
            tx,
            resolved: false,
        }
    }

    /// Read access for the widget
    pub fn handle(&self) -> FlagsHandle {
        FlagsHandle {
            rx: self.tx.subscribe(),
        }
    }

    /// Publish the fetched flags. Returns false if already resolved.
    pub fn resolve(&mut self, flags: FeatureFlags) -> bool {
        if self.resolved {
            tracing::warn!("Ignoring repeated feature flag resolution: {flags:?}");
            return false;
        }
        self.resolved = true;
        self.tx.send_replace(flags);
        tracing::info!(
            "Feature flags resolved: email_required={}, dark_mode={}",
            flags.email_required,
            flags.dark_mode
        );
        true
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }
}

impl Default for FeatureFlagProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of the provider's current flags
#[derive(Debug, Clone)]
pub struct FlagsHandle {
    rx: watch::Receiver<FeatureFlags>,
}

impl FlagsHandle {
    /// Current flags; defaults until the provider resolves
    pub fn current(&self) -> FeatureFlags {
        *self.rx.borrow()
    }

    /// A handle pinned to fixed values, with no provider behind it
    #[cfg(test)]
    pub fn fixed(flags: FeatureFlags) -> Self {
        let (_tx, rx) = watch::channel(flags);
        Self { rx }
    }
}
