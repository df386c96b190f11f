//! Field-level validation of a draft before submission

use super::controls::ControlId;
use super::draft::{message_length, Draft, MAX_MESSAGE_LENGTH};
use super::flags::FeatureFlags;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// A validation message attached to one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ControlId,
    pub message: String,
}

impl FieldError {
    fn new(field: ControlId, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// All validation failures of one submission attempt, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn for_field(&self, field: ControlId) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

/// Check a draft against the submission rules
pub fn validate(draft: &Draft, flags: &FeatureFlags) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    // Values are checked exactly as they will be sent
    if draft.email.is_empty() {
        if flags.email_required {
            errors.push(FieldError::new(ControlId::Email, "Email is required"));
        }
    } else if !EMAIL_PATTERN.is_match(&draft.email) {
        errors.push(FieldError::new(ControlId::Email, "Invalid email format"));
    }

    if draft.message.is_empty() {
        errors.push(FieldError::new(ControlId::Message, "Message is required"));
    } else if message_length(&draft.message) > MAX_MESSAGE_LENGTH {
        errors.push(FieldError::new(
            ControlId::Message,
            format!("Max {MAX_MESSAGE_LENGTH} characters"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { errors })
    }
}
