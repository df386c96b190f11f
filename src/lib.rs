//! Feedback widget engine
//!
//! The headless widget lives in [`state`]; [`ui`] renders it with ratatui and
//! [`app`] drives it from terminal events. [`api`] holds the submission and
//! feature flag collaborators.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod platform;
pub mod state;
pub mod ui;
