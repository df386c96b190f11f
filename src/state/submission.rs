//! Submission lifecycle: validate, send once, succeed or offer retry

use super::controls::ControlId;
use super::draft::Draft;
use super::flags::FeatureFlags;
use super::validation::{validate, FieldError, ValidationErrors};
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Thank you for your feedback!";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Identifies one call to the submission collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttemptId(u64);

/// Everything the event loop needs to perform one attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    pub attempt: AttemptId,
    pub payload: Draft,
}

/// Why `begin` refused to start an attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("draft failed validation with {} error(s)", .0.len())]
    Invalid(ValidationErrors),
}

/// How a completion was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Succeeded,
    Failed,
    /// Not the outstanding attempt; nothing changed
    Stale,
}

/// User-visible outcome banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Success,
    Failure,
}

impl Banner {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Success => SUCCESS_MESSAGE,
            Self::Failure => FAILURE_MESSAGE,
        }
    }
}

#[derive(Debug, Default)]
pub struct SubmissionController {
    state: SubmissionState,
    next_attempt: u64,
    in_flight: Option<AttemptId>,
    errors: ValidationErrors,
    /// Set once a submit has been blocked by validation; later edits revalidate
    revalidate_on_edit: bool,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Validate `draft` and, if it passes, start a new attempt
    pub fn begin(
        &mut self,
        draft: &Draft,
        flags: &FeatureFlags,
    ) -> Result<SubmissionTicket, SubmitRejected> {
        if self.in_flight.is_some() {
            tracing::debug!("Ignoring submit while an attempt is in flight");
            return Err(SubmitRejected::InFlight);
        }

        if let Err(errors) = validate(draft, flags) {
            tracing::info!("Submission blocked by {} validation error(s)", errors.len());
            self.errors = errors.clone();
            self.revalidate_on_edit = true;
            return Err(SubmitRejected::Invalid(errors));
        }

        self.errors = ValidationErrors::default();
        self.next_attempt += 1;
        let attempt = AttemptId(self.next_attempt);
        self.in_flight = Some(attempt);
        self.state = SubmissionState::Submitting;
        tracing::info!("Submitting feedback (attempt {})", attempt.0);

        Ok(SubmissionTicket {
            attempt,
            payload: draft.clone(),
        })
    }

    /// Apply the collaborator's answer for `attempt`
    pub fn finish(&mut self, attempt: AttemptId, result: &anyhow::Result<()>) -> Resolution {
        if self.in_flight != Some(attempt) {
            tracing::debug!("Dropping completion for stale attempt {}", attempt.0);
            return Resolution::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(()) => {
                tracing::info!("Feedback delivered (attempt {})", attempt.0);
                self.state = SubmissionState::Succeeded;
                self.revalidate_on_edit = false;
                Resolution::Succeeded
            }
            Err(e) => {
                tracing::warn!("Feedback submission failed (attempt {}): {e:#}", attempt.0);
                self.state = SubmissionState::Failed;
                Resolution::Failed
            }
        }
    }

    /// Return to idle on reopen, dropping banners and field errors.
    ///
    /// An attempt that is still outstanding keeps the controller in
    /// `Submitting` so that a second attempt cannot start alongside it.
    pub fn reset(&mut self) {
        self.errors = ValidationErrors::default();
        self.revalidate_on_edit = false;
        if self.in_flight.is_none() {
            self.state = SubmissionState::Idle;
        }
    }

    /// Refresh field errors after an edit, once a submit has been blocked
    pub fn revalidate(&mut self, draft: &Draft, flags: &FeatureFlags) {
        if !self.revalidate_on_edit {
            return;
        }
        self.errors = validate(draft, flags).err().unwrap_or_default();
    }

    pub fn field_error(&self, field: ControlId) -> Option<&FieldError> {
        self.errors.for_field(field)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn banner(&self) -> Option<Banner> {
        match self.state {
            SubmissionState::Succeeded => Some(Banner::Success),
            SubmissionState::Failed => Some(Banner::Failure),
            SubmissionState::Idle | SubmissionState::Submitting => None,
        }
    }

    /// Label of the submit control; it doubles as the retry control
    pub fn submit_label(&self) -> &'static str {
        match self.state {
            SubmissionState::Submitting => "Sending...",
            SubmissionState::Failed => "Retry",
            SubmissionState::Idle | SubmissionState::Succeeded => "Submit",
        }
    }
}
