//! The feedback widget: toggle, panel and everything behind them
//!
//! `FeedbackWidget` composes the mode state machine, the responsive reading,
//! the focus trap, the draft store and the submission controller. It is pure
//! state: the event loop feeds it keys, resizes and submission completions,
//! and performs the collaborator calls it hands out as tickets.

use super::controls::{
    ControlId, Role, FEEDBACK_ERROR_ID, FEEDBACK_PANEL_ID, FEEDBACK_SUCCESS_ID, WIDGET_BUTTON_ID,
    WIDGET_BUTTON_LABEL,
};
use super::draft::{truncate_message, Category, Draft, DRAFT_KEY};
use super::draft_store::{DraftStore, MemoryStorage};
use super::flags::{FeatureFlags, FlagsHandle};
use super::focus_trap::{FocusTrap, TrapOutcome};
use super::mode::{Mode, ModeController, ModeTransition};
use super::responsive::{LayoutReading, ResponsiveObserver, COMPACT_THRESHOLD_PX};
use super::submission::{
    AttemptId, Banner, Resolution, SubmissionController, SubmissionState, SubmissionTicket,
    SubmitRejected,
};
use crate::api::FeedbackApi;
use crate::error::WidgetError;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which content the open panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelView {
    Form,
    Success,
}

impl PanelView {
    /// Declared focus order of this view
    pub fn controls(&self) -> &'static [ControlId] {
        match self {
            Self::Form => &ControlId::FORM,
            Self::Success => &ControlId::SUCCESS,
        }
    }
}

/// What the widget did with a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not for the widget; the host may handle it
    Ignored,
    Handled,
    /// The panel closed
    Closed,
    /// A submission attempt must now be performed by the caller
    SubmissionStarted(SubmissionTicket),
}

/// One node of the widget's accessibility tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibleNode {
    pub id: &'static str,
    pub role: Role,
    pub label: String,
    pub required: bool,
    pub invalid: bool,
    pub described_by: Option<&'static str>,
    pub focused: bool,
}

impl AccessibleNode {
    fn new(id: &'static str, role: Role, label: impl Into<String>) -> Self {
        Self {
            id,
            role,
            label: label.into(),
            required: false,
            invalid: false,
            described_by: None,
            focused: false,
        }
    }
}

/// Builder for `FeedbackWidget`
pub struct WidgetBuilder {
    flags: Option<FlagsHandle>,
    store: Option<DraftStore>,
    draft_key: String,
    width_px: u32,
}

impl WidgetBuilder {
    /// Flags from the host's `FeatureFlagProvider`. Required.
    pub fn flags(mut self, flags: FlagsHandle) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Persistence for drafts. Defaults to in-memory storage.
    pub fn store(mut self, store: DraftStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn draft_key(mut self, key: impl Into<String>) -> Self {
        self.draft_key = key.into();
        self
    }

    /// Initial viewport width
    pub fn width_px(mut self, width_px: u32) -> Self {
        self.width_px = width_px;
        self
    }

    pub fn build(self) -> Result<FeedbackWidget, WidgetError> {
        let flags = self.flags.ok_or(WidgetError::MissingFlagProvider)?;
        let store = self
            .store
            .unwrap_or_else(|| DraftStore::new(MemoryStorage::new()));
        let draft = store.get(&self.draft_key, Draft::default()).normalized();

        Ok(FeedbackWidget {
            modes: ModeController::new(),
            observer: ResponsiveObserver::new(self.width_px),
            trap: FocusTrap::new(),
            submission: SubmissionController::new(),
            store,
            draft_key: self.draft_key,
            draft,
            flags,
        })
    }
}

pub struct FeedbackWidget {
    modes: ModeController,
    observer: ResponsiveObserver,
    trap: FocusTrap,
    submission: SubmissionController,
    store: DraftStore,
    draft_key: String,
    /// In-memory draft; authoritative even when persistence fails
    draft: Draft,
    flags: FlagsHandle,
}

impl FeedbackWidget {
    pub fn builder() -> WidgetBuilder {
        WidgetBuilder {
            flags: None,
            store: None,
            draft_key: DRAFT_KEY.to_string(),
            width_px: COMPACT_THRESHOLD_PX,
        }
    }

    pub fn mode(&self) -> Mode {
        self.modes.mode()
    }

    pub fn is_open(&self) -> bool {
        self.modes.mode().is_open()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn flags(&self) -> FeatureFlags {
        self.flags.current()
    }

    pub fn submission(&self) -> &SubmissionController {
        &self.submission
    }

    pub fn layout(&self) -> LayoutReading {
        self.observer.reading()
    }

    pub fn focused(&self) -> Option<ControlId> {
        self.trap.focused()
    }

    pub fn panel_view(&self) -> PanelView {
        if self.submission.state() == SubmissionState::Succeeded {
            PanelView::Success
        } else {
            PanelView::Form
        }
    }

    pub fn resize(&mut self, width_px: u32) {
        self.observer.observe(width_px);
    }

    pub fn resize_columns(&mut self, columns: u16) {
        self.observer.observe_columns(columns);
    }

    /// Activate the toggle button
    pub fn toggle(&mut self) -> ModeTransition {
        let transition = self.modes.toggle(self.observer.reading());
        self.apply_transition(transition);
        transition
    }

    /// Explicit close signal (close button, dismissal, Escape)
    pub fn close(&mut self) -> ModeTransition {
        let transition = self.modes.close();
        self.apply_transition(transition);
        transition
    }

    fn apply_transition(&mut self, transition: ModeTransition) {
        match transition {
            ModeTransition::Opened(_) => {
                self.submission.reset();
                self.trap.activate(self.panel_view().controls());
            }
            ModeTransition::Closed => self.trap.deactivate(),
            ModeTransition::Unchanged => {}
        }
    }

    /// Replace the value of a text field and autosave
    pub fn set_field(&mut self, field: ControlId, value: &str) -> bool {
        match field {
            ControlId::Name => self.draft.name = value.to_string(),
            ControlId::Email => self.draft.email = value.to_string(),
            ControlId::Message => self.draft.message = truncate_message(value),
            _ => return false,
        }
        self.after_edit();
        true
    }

    pub fn set_category(&mut self, category: Category) {
        self.draft.category = category;
        self.after_edit();
    }

    /// Step the category select forward or backward, wrapping
    pub fn cycle_category(&mut self, forward: bool) {
        let category = if forward {
            self.draft.category.next()
        } else {
            self.draft.category.prev()
        };
        self.set_category(category);
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) -> bool {
        let Some(field) = self.focused().filter(ControlId::is_text) else {
            return false;
        };
        let mut value = self.field_value(field).to_string();
        value.push(c);
        self.set_field(field, &value)
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) -> bool {
        let Some(field) = self.focused().filter(ControlId::is_text) else {
            return false;
        };
        let mut value = self.field_value(field).to_string();
        if value.pop().is_none() {
            return false;
        }
        self.set_field(field, &value)
    }

    pub fn field_value(&self, field: ControlId) -> &str {
        match field {
            ControlId::Name => &self.draft.name,
            ControlId::Email => &self.draft.email,
            ControlId::Message => &self.draft.message,
            ControlId::Category => self.draft.category.label(),
            _ => "",
        }
    }

    fn after_edit(&mut self) {
        self.store.set(&self.draft_key, &self.draft);
        self.submission.revalidate(&self.draft, &self.flags.current());
    }

    /// Validate and start an attempt with the current draft
    pub fn submit(&mut self) -> Result<SubmissionTicket, SubmitRejected> {
        let result = self.submission.begin(&self.draft, &self.flags.current());
        if let Err(SubmitRejected::Invalid(errors)) = &result {
            if let Some(first) = errors.iter().next() {
                self.trap.focus(first.field);
            }
        }
        result
    }

    /// Apply the outcome of an attempt, whether or not the panel is still open
    pub fn finish_submission(
        &mut self,
        attempt: AttemptId,
        result: &anyhow::Result<()>,
    ) -> Resolution {
        let resolution = self.submission.finish(attempt, result);
        if resolution == Resolution::Succeeded {
            self.draft = Draft::default();
            self.store.set(&self.draft_key, &self.draft);
            if self.is_open() {
                self.trap.activate(PanelView::Success.controls());
            }
        }
        resolution
    }

    /// Run one attempt inline against `api`
    pub async fn submit_with(&mut self, api: &dyn FeedbackApi) -> Result<Resolution, SubmitRejected> {
        let ticket = self.submit()?;
        let result = api.submit_feedback(&ticket.payload).await;
        Ok(self.finish_submission(ticket.attempt, &result))
    }

    /// Route a key press while the panel is open
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if !self.is_open() {
            return KeyOutcome::Ignored;
        }

        if key.code == KeyCode::Char('s')
            && key.modifiers.contains(KeyModifiers::CONTROL)
            && self.panel_view() == PanelView::Form
        {
            return self.submit_outcome();
        }

        match self.trap.handle_key(&key) {
            TrapOutcome::Close => {
                self.close();
                return KeyOutcome::Closed;
            }
            TrapOutcome::Moved(_) => return KeyOutcome::Handled,
            TrapOutcome::Ignored => {}
        }

        let Some(focused) = self.focused() else {
            return KeyOutcome::Ignored;
        };

        match (focused, key.code) {
            (ControlId::Message, KeyCode::Enter) => self.input_char('\n').into(),
            (field, KeyCode::Enter) if field.is_text() => self.submit_outcome(),
            (field, KeyCode::Char(c))
                if field.is_text() && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.input_char(c).into()
            }
            (field, KeyCode::Backspace) if field.is_text() => self.backspace().into(),
            (ControlId::Category, KeyCode::Right | KeyCode::Down | KeyCode::Char(' ')) => {
                self.cycle_category(true);
                KeyOutcome::Handled
            }
            (ControlId::Category, KeyCode::Left | KeyCode::Up) => {
                self.cycle_category(false);
                KeyOutcome::Handled
            }
            (ControlId::Submit, KeyCode::Enter | KeyCode::Char(' ')) => self.submit_outcome(),
            (ControlId::Close | ControlId::Dismiss, KeyCode::Enter | KeyCode::Char(' ')) => {
                self.close();
                KeyOutcome::Closed
            }
            _ => KeyOutcome::Ignored,
        }
    }

    fn submit_outcome(&mut self) -> KeyOutcome {
        match self.submit() {
            Ok(ticket) => KeyOutcome::SubmissionStarted(ticket),
            Err(_) => KeyOutcome::Handled,
        }
    }

    /// Everything an assistive technology (or a test) can query
    pub fn accessibility_tree(&self) -> Vec<AccessibleNode> {
        let mut nodes = vec![AccessibleNode::new(
            WIDGET_BUTTON_ID,
            Role::Button,
            WIDGET_BUTTON_LABEL,
        )];
        if !self.is_open() {
            return nodes;
        }

        nodes.push(AccessibleNode::new(FEEDBACK_PANEL_ID, Role::Dialog, "Feedback"));

        if self.panel_view() == PanelView::Success {
            nodes.push(AccessibleNode::new(
                FEEDBACK_SUCCESS_ID,
                Role::Status,
                Banner::Success.text(),
            ));
        }

        for control in self.panel_view().controls() {
            let label = match control {
                ControlId::Submit => self.submission.submit_label(),
                other => other.label(),
            };
            let mut node = AccessibleNode::new(control.test_id(), control.role(), label);
            node.focused = self.focused() == Some(*control);
            node.required = match control {
                ControlId::Message => true,
                ControlId::Email => self.flags().email_required,
                _ => false,
            };
            if let Some(error) = self.submission.field_error(*control) {
                node.invalid = true;
                node.described_by = control.error_id();
                nodes.push(node);
                if let Some(error_id) = control.error_id() {
                    nodes.push(AccessibleNode::new(error_id, Role::Alert, error.message.clone()));
                }
                continue;
            }
            nodes.push(node);
        }

        if self.submission.banner() == Some(Banner::Failure) {
            nodes.push(AccessibleNode::new(
                FEEDBACK_ERROR_ID,
                Role::Alert,
                Banner::Failure.text(),
            ));
        }

        nodes
    }

    /// Look up a node by its stable id
    pub fn query(&self, id: &str) -> Option<AccessibleNode> {
        self.accessibility_tree().into_iter().find(|node| node.id == id)
    }
}

impl From<bool> for KeyOutcome {
    fn from(handled: bool) -> Self {
        if handled {
            KeyOutcome::Handled
        } else {
            KeyOutcome::Ignored
        }
    }
}
