//! Application state and core logic

use crate::api::FeedbackApi;
use crate::platform::TOGGLE_MODIFIER;
use crate::state::{AttemptId, FeatureFlagProvider, FeedbackWidget, KeyOutcome, Mode, SubmissionTicket};
use crate::ui::{create_layout, toggle_button_area};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Result of one background submission attempt
type Completion = (AttemptId, anyhow::Result<()>);

/// Main application struct
pub struct App {
    /// The feedback widget hosted on this screen
    pub widget: FeedbackWidget,
    /// Submission collaborator
    api: Arc<dyn FeedbackApi>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for hit testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    pub fn new(widget: FeedbackWidget, api: Arc<dyn FeedbackApi>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            widget,
            api,
            completions_tx,
            completions_rx,
            quit: false,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Global toggle shortcut works whether or not the panel is open
        let toggle_shortcut =
            key.code == KeyCode::Char('f') && key.modifiers.contains(TOGGLE_MODIFIER);
        if toggle_shortcut || key.code == KeyCode::F(2) {
            self.widget.toggle();
            return;
        }

        if !self.widget.is_open() {
            match key.code {
                KeyCode::Enter | KeyCode::Char('f') => {
                    self.widget.toggle();
                }
                KeyCode::Char('q') => self.quit = true,
                _ => {}
            }
            return;
        }

        if let KeyOutcome::SubmissionStarted(ticket) = self.widget.handle_key(key) {
            self.spawn_submission(ticket);
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        // The full-screen panel covers the toggle
        if self.widget.mode() == Mode::Full {
            return;
        }
        let Some((height, width)) = self.terminal_size else {
            return;
        };

        let toggle = toggle_button_area(create_layout(Rect::new(0, 0, width, height)));
        if toggle.contains(Position::new(mouse.column, mouse.row)) {
            self.widget.toggle();
        }
    }

    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.terminal_size = Some((height, width));
        self.widget.resize_columns(width);
    }

    /// Apply every submission result that has arrived since the last tick
    pub fn poll_background(&mut self) -> usize {
        let mut applied = 0;
        while let Ok((attempt, result)) = self.completions_rx.try_recv() {
            self.widget.finish_submission(attempt, &result);
            applied += 1;
        }
        applied
    }

    /// Perform the attempt on a background task; its result comes back
    /// through `poll_background`, even if the panel has closed meanwhile
    fn spawn_submission(&self, ticket: SubmissionTicket) {
        let api = Arc::clone(&self.api);
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            let result = api.submit_feedback(&ticket.payload).await;
            if tx.send((ticket.attempt, result)).is_err() {
                tracing::debug!("App gone before submission completed");
            }
        });
    }
}

/// Fetch flags once and publish them; a failure keeps the defaults
pub fn spawn_flag_fetch(
    api: Arc<dyn FeedbackApi>,
    mut provider: FeatureFlagProvider,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        match api.fetch_feature_flags().await {
            Ok(flags) => {
                provider.resolve(flags);
            }
            Err(e) => tracing::warn!("Feature flag fetch failed, keeping defaults: {e:#}"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockFeedbackApi;
    use crate::state::{
        ControlId, DraftStore, FeatureFlags, FlagsHandle, MemoryStorage, SubmissionState,
    };
    use anyhow::anyhow;
    use crossterm::event::KeyModifiers;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn widget(flags: FlagsHandle) -> FeedbackWidget {
        FeedbackWidget::builder()
            .flags(flags)
            .store(DraftStore::new(MemoryStorage::new()))
            .width_px(1024)
            .build()
            .unwrap()
    }

    fn app(api: MockFeedbackApi) -> App {
        App::new(widget(FlagsHandle::fixed(FeatureFlags::default())), Arc::new(api))
    }

    async fn wait_for_completion(app: &mut App) {
        for _ in 0..100 {
            if app.poll_background() > 0 {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("submission never completed");
    }

    mod keys {
        use super::*;

        #[test]
        fn test_enter_opens_when_collapsed() {
            let mut app = app(MockFeedbackApi::new());
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.widget.mode(), Mode::Expanded);
        }

        #[test]
        fn test_q_quits_only_when_collapsed() {
            let mut app = app(MockFeedbackApi::new());
            app.handle_key(key(KeyCode::Char('f')));
            app.handle_key(key(KeyCode::Char('q')));
            assert!(!app.should_quit());
            assert_eq!(app.widget.draft().name, "q");

            app.handle_key(key(KeyCode::Esc));
            app.handle_key(key(KeyCode::Char('q')));
            assert!(app.should_quit());
        }

        #[test]
        fn test_toggle_shortcut_closes_open_panel() {
            let mut app = app(MockFeedbackApi::new());
            app.handle_key(key(KeyCode::F(2)));
            assert!(app.widget.is_open());
            app.handle_key(KeyEvent::new(KeyCode::Char('f'), TOGGLE_MODIFIER));
            assert_eq!(app.widget.mode(), Mode::Collapsed);
        }

        #[test]
        fn test_release_events_ignored() {
            let mut app = app(MockFeedbackApi::new());
            let mut release = key(KeyCode::Enter);
            release.kind = KeyEventKind::Release;
            app.handle_key(release);
            assert!(!app.widget.is_open());
        }
    }

    mod mouse {
        use super::*;

        fn click(column: u16, row: u16) -> MouseEvent {
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            }
        }

        #[test]
        fn test_click_on_toggle_opens() {
            let mut app = app(MockFeedbackApi::new());
            app.handle_resize(120, 40);
            let toggle = toggle_button_area(create_layout(Rect::new(0, 0, 120, 40)));
            app.handle_mouse(click(toggle.x + 1, toggle.y + 1));
            assert_eq!(app.widget.mode(), Mode::Expanded);
        }

        #[test]
        fn test_click_elsewhere_ignored() {
            let mut app = app(MockFeedbackApi::new());
            app.handle_resize(120, 40);
            app.handle_mouse(click(0, 0));
            assert!(!app.widget.is_open());
        }

        #[test]
        fn test_resize_drives_compact_reading() {
            let mut app = app(MockFeedbackApi::new());
            app.handle_resize(80, 30);
            app.handle_mouse(click(70, 28));
            assert_eq!(app.widget.mode(), Mode::Full);
        }
    }

    mod background {
        use super::*;

        fn fill_message(app: &mut App) {
            app.handle_key(key(KeyCode::Enter));
            app.widget.set_field(ControlId::Message, "Great app!");
        }

        #[tokio::test]
        async fn test_submission_runs_in_background() {
            let mut api = MockFeedbackApi::new();
            api.expect_submit_feedback()
                .withf(|draft| draft.message == "Great app!")
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app(api);
            fill_message(&mut app);

            app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
            assert_eq!(app.widget.submission().state(), SubmissionState::Submitting);

            wait_for_completion(&mut app).await;
            assert_eq!(app.widget.submission().state(), SubmissionState::Succeeded);
            assert!(app.widget.draft().is_blank());
        }

        #[tokio::test]
        async fn test_failure_keeps_draft_for_retry() {
            let mut api = MockFeedbackApi::new();
            api.expect_submit_feedback()
                .times(1)
                .returning(|_| Err(anyhow!("Submission failed")));
            let mut app = app(api);
            fill_message(&mut app);

            app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
            wait_for_completion(&mut app).await;

            assert_eq!(app.widget.submission().state(), SubmissionState::Failed);
            assert_eq!(app.widget.submission().submit_label(), "Retry");
            assert_eq!(app.widget.draft().message, "Great app!");
        }

        #[tokio::test]
        async fn test_completion_after_close_clears_draft() {
            let mut api = MockFeedbackApi::new();
            api.expect_submit_feedback().times(1).returning(|_| Ok(()));
            let mut app = app(api);
            fill_message(&mut app);

            app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
            app.handle_key(key(KeyCode::Esc));
            assert!(!app.widget.is_open());

            wait_for_completion(&mut app).await;
            assert!(app.widget.draft().is_blank());
        }

        #[test]
        fn test_poll_with_nothing_pending() {
            let mut app = app(MockFeedbackApi::new());
            assert_eq!(app.poll_background(), 0);
        }
    }

    mod flags {
        use super::*;

        #[tokio::test]
        async fn test_flag_fetch_resolves_provider() {
            let mut api = MockFeedbackApi::new();
            api.expect_fetch_feature_flags().times(1).returning(|| {
                Ok(FeatureFlags {
                    email_required: true,
                    dark_mode: false,
                })
            });
            let provider = FeatureFlagProvider::new();
            let handle = provider.handle();

            spawn_flag_fetch(Arc::new(api), provider).await.unwrap();
            assert!(handle.current().email_required);
        }

        #[tokio::test]
        async fn test_flag_fetch_failure_keeps_defaults() {
            let mut api = MockFeedbackApi::new();
            api.expect_fetch_feature_flags()
                .times(1)
                .returning(|| Err(anyhow!("unreachable")));
            let provider = FeatureFlagProvider::new();
            let handle = provider.handle();

            spawn_flag_fetch(Arc::new(api), provider).await.unwrap();
            assert_eq!(handle.current(), FeatureFlags::default());
        }
    }
}
