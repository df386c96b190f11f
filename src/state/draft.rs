//! Draft value objects

use serde::{Deserialize, Serialize};

/// Storage key for the in-progress feedback draft
pub const DRAFT_KEY: &str = "feedback-draft";

/// Maximum number of characters accepted in the message field
pub const MAX_MESSAGE_LENGTH: usize = 500;

/// Feedback category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Bug,
    Feature,
    Other,
}

impl Category {
    pub fn next(&self) -> Self {
        match self {
            Self::Bug => Self::Feature,
            Self::Feature => Self::Other,
            Self::Other => Self::Bug,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Bug => Self::Other,
            Self::Feature => Self::Bug,
            Self::Other => Self::Feature,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Bug => "Bug",
            Self::Feature => "Feature",
            Self::Other => "Other",
        }
    }
}

/// In-progress content of the feedback form.
///
/// Every field is always present; an empty string means "unset". Missing
/// fields in persisted JSON fall back to their defaults one by one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub message: String,
    pub category: Category,
}

impl Draft {
    /// Enforce the message length limit on a draft loaded from elsewhere
    pub fn normalized(mut self) -> Self {
        self.message = truncate_message(&self.message);
        self
    }

    /// Whether this draft equals the freshly-created default
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

/// Cut a message down to `MAX_MESSAGE_LENGTH` characters.
///
/// Applying it to an already-truncated value returns the value unchanged.
pub fn truncate_message(message: &str) -> String {
    match message.char_indices().nth(MAX_MESSAGE_LENGTH) {
        Some((byte_idx, _)) => message[..byte_idx].to_string(),
        None => message.to_string(),
    }
}

/// Number of characters in a message, as shown by the length counter
pub fn message_length(message: &str) -> usize {
    message.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod category {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_bug() {
            assert_eq!(Category::default(), Category::Bug);
        }

        #[test]
        fn test_next_cycles_through_all() {
            let mut category = Category::Bug;
            for _ in 0..3 {
                category = category.next();
            }
            assert_eq!(category, Category::Bug);
        }

        #[test]
        fn test_prev_is_inverse_of_next() {
            for category in [Category::Bug, Category::Feature, Category::Other] {
                assert_eq!(category.next().prev(), category);
            }
        }

        #[test]
        fn test_serializes_as_label() {
            let json = serde_json::to_string(&Category::Feature).unwrap();
            assert_eq!(json, "\"Feature\"");
        }
    }

    mod draft {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_fully_populated() {
            let draft = Draft::default();
            assert_eq!(draft.name, "");
            assert_eq!(draft.email, "");
            assert_eq!(draft.message, "");
            assert_eq!(draft.category, Category::Bug);
            assert!(draft.is_blank());
        }

        #[test]
        fn test_serialized_layout() {
            let draft = Draft {
                message: "Great app!".to_string(),
                ..Default::default()
            };
            let json = serde_json::to_string(&draft).unwrap();
            assert_eq!(
                json,
                r#"{"name":"","email":"","message":"Great app!","category":"Bug"}"#
            );
        }

        #[test]
        fn test_missing_fields_fall_back_individually() {
            let json = r#"{"name": "John", "category": "Other"}"#;
            let draft: Draft = serde_json::from_str(json).unwrap();
            assert_eq!(draft.name, "John");
            assert_eq!(draft.email, "");
            assert_eq!(draft.message, "");
            assert_eq!(draft.category, Category::Other);
        }

        #[test]
        fn test_unknown_fields_are_ignored() {
            let json = r#"{"message": "hi", "rating": 5}"#;
            let draft: Draft = serde_json::from_str(json).unwrap();
            assert_eq!(draft.message, "hi");
        }

        #[test]
        fn test_normalized_truncates_long_message() {
            let draft = Draft {
                message: "x".repeat(MAX_MESSAGE_LENGTH + 20),
                ..Default::default()
            }
            .normalized();
            assert_eq!(message_length(&draft.message), MAX_MESSAGE_LENGTH);
        }
    }

    mod truncation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_short_message_unchanged() {
            assert_eq!(truncate_message("hello"), "hello");
        }

        #[test]
        fn test_exact_limit_unchanged() {
            let message = "a".repeat(MAX_MESSAGE_LENGTH);
            assert_eq!(truncate_message(&message), message);
        }

        #[test]
        fn test_long_message_cut_to_limit() {
            let message = "a".repeat(MAX_MESSAGE_LENGTH + 1);
            assert_eq!(message_length(&truncate_message(&message)), MAX_MESSAGE_LENGTH);
        }

        #[test]
        fn test_truncation_is_idempotent() {
            let message = "b".repeat(MAX_MESSAGE_LENGTH * 2);
            let once = truncate_message(&message);
            let twice = truncate_message(&once);
            assert_eq!(once, twice);
        }

        #[test]
        fn test_counts_characters_not_bytes() {
            let message = "é".repeat(MAX_MESSAGE_LENGTH + 5);
            let truncated = truncate_message(&message);
            assert_eq!(message_length(&truncated), MAX_MESSAGE_LENGTH);
            assert_eq!(truncated.len(), MAX_MESSAGE_LENGTH * 2);
        }
    }
}
