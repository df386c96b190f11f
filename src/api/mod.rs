//! Client side of the feedback service: submission and feature flags

mod client;
mod simulated;
mod traits;

pub use client::{HttpFeedbackClient, API_URL_ENV};
pub use simulated::SimulatedFeedbackClient;
pub use traits::FeedbackApi;

#[cfg(test)]
pub use traits::MockFeedbackApi;
