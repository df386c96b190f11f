//! Declared controls of the feedback panel

/// Identity of the toggle button on the host page
pub const WIDGET_BUTTON_ID: &str = "widget-button";
/// Identity of the open panel
pub const FEEDBACK_PANEL_ID: &str = "feedback-form";
/// Identity of the success banner
pub const FEEDBACK_SUCCESS_ID: &str = "feedback-success";
/// Identity of the submission failure banner
pub const FEEDBACK_ERROR_ID: &str = "feedback-error";

/// Accessible label of the toggle button
pub const WIDGET_BUTTON_LABEL: &str = "Open feedback form";

/// Focusable control inside the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    Name,
    Email,
    Message,
    Category,
    Submit,
    Close,
    /// Close button shown after a successful submission
    Dismiss,
}

/// Accessibility role of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    TextInput,
    TextArea,
    Select,
    Button,
    Dialog,
    /// Polite announcement (success banner)
    Status,
    /// Assertive announcement (errors)
    Alert,
}

impl ControlId {
    /// Focus order of the form view
    pub const FORM: [ControlId; 6] = [
        ControlId::Name,
        ControlId::Email,
        ControlId::Message,
        ControlId::Category,
        ControlId::Submit,
        ControlId::Close,
    ];

    /// Focus order of the success view
    pub const SUCCESS: [ControlId; 1] = [ControlId::Dismiss];

    pub fn test_id(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
            Self::Category => "category",
            Self::Submit => "submit",
            Self::Close => "close",
            Self::Dismiss => "dismiss",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
            Self::Category => "Category",
            Self::Submit => "Submit",
            Self::Close | Self::Dismiss => "Close",
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Name => Some("Enter your name"),
            Self::Email => Some("Enter your email"),
            Self::Message => Some("Enter your feedback"),
            _ => None,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Self::Name | Self::Email => Role::TextInput,
            Self::Message => Role::TextArea,
            Self::Category => Role::Select,
            Self::Submit | Self::Close | Self::Dismiss => Role::Button,
        }
    }

    /// Whether typed characters edit this control
    pub fn is_text(&self) -> bool {
        matches!(self.role(), Role::TextInput | Role::TextArea)
    }

    pub fn is_multiline(&self) -> bool {
        self.role() == Role::TextArea
    }

    /// Id of the element that carries this field's validation message
    pub fn error_id(&self) -> Option<&'static str> {
        match self {
            Self::Email => Some("email-error"),
            Self::Message => Some("message-error"),
            _ => None,
        }
    }
}
