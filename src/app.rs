//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{
    AfterSuccess, AppState, Form, FormKind, SplashState, SubmissionStatus, View, WizardButton, WizardEvent,
};
use crate::submit::{LeadSubmitter, SubmitError};
use anyhow::Result;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Outcome of a background submission, routed back to the form that sent it
#[derive(Debug)]
pub struct SubmissionEvent {
    pub kind: FormKind,
    pub lead_id: Uuid,
    pub result: Result<(), SubmitError>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where accepted leads are sent
    submitter: Arc<dyn LeadSubmitter>,
    /// Loaded settings, written back when the locale changes
    config: TuiConfig,
    persist_config: bool,
    results_tx: mpsc::UnboundedSender<SubmissionEvent>,
    results_rx: mpsc::UnboundedReceiver<SubmissionEvent>,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig, submitter: Arc<dyn LeadSubmitter>, now: Instant) -> Self {
        let mut state = AppState::new(&config, now);

        let splash_state = if config.skip_splash.unwrap_or(false) {
            None
        } else {
            state.current_view = View::Splash;
            Some(SplashState::new(now))
        };

        let (results_tx, results_rx) = mpsc::unbounded_channel();

        Self {
            state,
            submitter,
            config,
            persist_config: true,
            results_tx,
            results_rx,
            quit: false,
            copy_message: None,
            splash_state,
        }
    }

    /// Update splash animation state
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, now: Instant, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(now, terminal_height);
            if splash.is_complete() {
                self.splash_state = None;
                self.navigate(View::Home);
                return true;
            }
        }
        false
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Whether any timed transition is pending, so the loop should redraw often.
    /// Confirmations that wait for the user do not count.
    pub fn is_animating(&self) -> bool {
        self.in_splash()
            || [
                FormKind::Booking,
                FormKind::Consultation,
                FormKind::ServiceConsultation,
                FormKind::Contact,
                FormKind::Newsletter,
            ]
            .into_iter()
            .any(|kind| {
                let status = self.state.wizard(kind).status();
                status.is_submitting()
                    || (status.is_submitted() && kind.after_success() != AfterSuccess::Acknowledge)
            })
    }

    /// Apply every submission result that has arrived
    pub fn poll_submissions(&mut self, now: Instant) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.results_rx.try_recv() {
            let SubmissionEvent {
                kind,
                lead_id,
                result,
            } = event;
            let accepted = result.is_ok();
            if self
                .state
                .wizard_mut(kind)
                .complete_submission(lead_id, result, now, Utc::now())
            {
                tracing::info!(%lead_id, ?kind, accepted, "submission completed");
                applied += 1;
            }
        }
        applied
    }

    /// Advance timers: submission results, confirmation windows, the carousel
    pub fn tick(&mut self, now: Instant) {
        self.poll_submissions(now);
        for (kind, event) in self.state.tick(now) {
            match event {
                WizardEvent::ResetAndClose => tracing::debug!(?kind, "form reset and closed"),
                WizardEvent::Reset => tracing::debug!(?kind, "form reset"),
            }
        }
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if self.in_splash() {
            self.handle_splash_key(key);
            return Ok(());
        }

        // Clear any status messages on key press
        self.copy_message = None;

        if key.code == KeyCode::Char('l') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.toggle_locale();
            return Ok(());
        }

        // Lead dialogs are modal over whichever view opened them
        if let Some(kind) = self.state.open_dialog_kind() {
            self.handle_dialog_key(kind, key);
            return Ok(());
        }

        if self.newsletter_modal_open() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.newsletter.acknowledge();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Splash => self.handle_splash_key(key),
            View::Home => self.handle_home_key(key),
            View::Services => self.handle_services_key(key),
            View::Contact => self.handle_inline_form_key(FormKind::Contact, key),
            View::Newsletter => self.handle_inline_form_key(FormKind::Newsletter, key),
        }

        Ok(())
    }

    /// The newsletter confirmation waits for the user on its own view
    pub fn newsletter_modal_open(&self) -> bool {
        self.state.current_view == View::Newsletter && self.state.newsletter.status().is_submitted()
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        // entering home mounts a fresh carousel
        if view == View::Home && self.state.current_view != View::Home {
            self.state.restart_rotator(Instant::now());
        }
        if view != View::Newsletter {
            self.state.newsletter.acknowledge();
        }
        self.state.current_view = view;
    }

    fn cycle_view(&mut self, forward: bool) {
        let views = View::NAVIGABLE;
        let current = views
            .iter()
            .position(|v| *v == self.state.current_view)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % views.len()
        } else {
            (current + views.len() - 1) % views.len()
        };
        self.navigate(views[next]);
    }

    fn toggle_locale(&mut self) {
        self.state.toggle_locale();
        let locale = self.state.locale;
        tracing::info!(locale = locale.code(), "locale changed");
        self.config.locale = Some(locale);
        if self.persist_config {
            if let Err(err) = self.config.save() {
                self.push_error(format!("Failed to save settings: {err}"));
            }
        }
    }

    fn handle_splash_key(&mut self, _key: KeyEvent) {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
        }
        self.splash_state = None;
        self.navigate(View::Home);
    }

    /// Keys shared by the browsing views; returns true when handled
    fn handle_browse_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Tab => self.cycle_view(true),
            KeyCode::BackTab => self.cycle_view(false),
            KeyCode::Char('b') => self.state.open_dialog(FormKind::Booking),
            KeyCode::Char('c') => self.state.open_dialog(FormKind::Consultation),
            _ => return false,
        }
        true
    }

    /// Handle keys in Home view
    fn handle_home_key(&mut self, key: KeyEvent) {
        if self.handle_browse_key(key) {
            return;
        }
        let rotator = &mut self.state.rotator;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => rotator.previous(),
            KeyCode::Right | KeyCode::Char('l') => rotator.next(),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(digit) = c.to_digit(10) {
                    rotator.select(digit as usize - 1);
                }
            }
            _ => {}
        }
    }

    /// Handle keys in Services view
    fn handle_services_key(&mut self, key: KeyEvent) {
        if self.handle_browse_key(key) {
            return;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.select_prev_service(),
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next_service(),
            KeyCode::Enter => {
                let index = self.state.selected_service;
                self.state.open_service_consultation(index);
            }
            _ => {}
        }
    }

    /// Handle keys while a lead dialog is open
    fn handle_dialog_key(&mut self, kind: FormKind, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            if let Some(dialog) = self.state.dialog_mut(kind) {
                dialog.cancel();
            }
            return;
        }

        match self.state.wizard(kind).status() {
            SubmissionStatus::Submitted {
                reference: Some(reference),
                ..
            } => {
                if key.code == KeyCode::Char('y') {
                    let reference = reference.clone();
                    self.copy_reference(&reference);
                }
            }
            SubmissionStatus::Submitted { .. } | SubmissionStatus::Submitting { .. } => {}
            SubmissionStatus::Idle | SubmissionStatus::Failed { .. } => {
                self.handle_form_input(kind, key)
            }
        }
    }

    /// Handle keys on the contact and newsletter views
    fn handle_inline_form_key(&mut self, kind: FormKind, key: KeyEvent) {
        if kind == FormKind::Contact
            && key.code == KeyCode::Char('b')
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.state.open_dialog(FormKind::Booking);
            return;
        }
        // stay put until the pending submission lands
        if self.state.wizard(kind).status().is_submitting() {
            return;
        }
        if key.code == KeyCode::Esc {
            self.navigate(View::Home);
            return;
        }
        if self.state.wizard(kind).status().is_editable() {
            self.handle_form_input(kind, key);
        }
    }

    /// Field editing, focus movement and button presses for any lead form
    fn handle_form_input(&mut self, kind: FormKind, key: KeyEvent) {
        let wizard = self.state.wizard_mut(kind);
        let on_buttons = wizard.is_buttons_row_active();

        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit(kind)
            }
            KeyCode::Tab | KeyCode::Down => wizard.next_field(),
            KeyCode::BackTab | KeyCode::Up => wizard.prev_field(),
            KeyCode::Left if on_buttons => wizard.prev_button(),
            KeyCode::Right if on_buttons => wizard.next_button(),
            KeyCode::Enter if on_buttons => {
                if let Some(button) = wizard.pressed_button() {
                    self.press_button(kind, button);
                }
            }
            KeyCode::Left | KeyCode::Right => {
                if let Some(field) = wizard.get_active_field_mut() {
                    field.cycle(key.code == KeyCode::Right);
                }
            }
            KeyCode::Enter => match wizard.get_active_field_mut() {
                Some(field) if field.is_multiline => field.push_char('\n'),
                _ => wizard.next_field(),
            },
            KeyCode::Backspace => {
                if let Some(field) = wizard.get_active_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = wizard.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            _ => {}
        }
    }

    fn press_button(&mut self, kind: FormKind, button: WizardButton) {
        match button {
            WizardButton::Next => {
                self.state.wizard_mut(kind).next_step();
            }
            WizardButton::Previous => {
                self.state.wizard_mut(kind).prev_step();
            }
            WizardButton::Submit => self.submit(kind),
            WizardButton::Cancel => {
                if let Some(dialog) = self.state.dialog_mut(kind) {
                    dialog.cancel();
                }
            }
        }
    }

    /// Hand the form to the submitter on a background task
    fn submit(&mut self, kind: FormKind) {
        let locale = self.state.locale;
        let Some(lead) = self.state.wizard_mut(kind).begin_submit(locale, Utc::now()) else {
            return;
        };
        let lead_id = lead.id;
        tracing::info!(%lead_id, ?kind, locale = locale.code(), "submitting lead");

        let submitter = Arc::clone(&self.submitter);
        let results_tx = self.results_tx.clone();
        tokio::spawn(async move {
            let result = submitter.submit_lead(lead).await;
            // the receiver only goes away when the app shuts down
            let _ = results_tx.send(SubmissionEvent {
                kind,
                lead_id,
                result,
            });
        });
    }

    fn copy_reference(&mut self, reference: &str) {
        match self.copy_to_clipboard(reference) {
            Ok(()) => self.copy_message = Some(format!("Copied {reference}")),
            Err(err) => self.push_error(format!("Failed to copy reference: {err}")),
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Locale, WizardStep};
    use crate::submit::MockLeadSubmitter;
    use std::time::Duration;

    fn app_with(submitter: MockLeadSubmitter) -> App {
        let config = TuiConfig {
            skip_splash: Some(true),
            ..Default::default()
        };
        let mut app = App::new(config, Arc::new(submitter), Instant::now());
        app.persist_config = false;
        app
    }

    fn idle_app() -> App {
        let mut submitter = MockLeadSubmitter::new();
        submitter.expect_submit_lead().never();
        app_with(submitter)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    async fn press(app: &mut App, code: KeyCode) {
        app.handle_key(key(code)).await.unwrap();
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c)).await;
        }
    }

    /// Drain results until the form has left the submitting state
    async fn await_submission(app: &mut App, kind: FormKind) {
        for _ in 0..200 {
            app.poll_submissions(Instant::now());
            if !app.state.wizard(kind).status().is_submitting() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("submission for {kind:?} never completed");
    }

    /// Open the booking dialog and fill step one through the keyboard
    async fn fill_booking_step_one(app: &mut App) {
        press(app, KeyCode::Char('b')).await;
        for text in ["Ada", "ada@example.com", "555-0100", "2025-01-05"] {
            type_text(app, text).await;
            press(app, KeyCode::Tab).await;
        }
    }

    mod app_basic_tests {
        use super::*;

        #[test]
        fn test_should_quit_initially_false() {
            let app = idle_app();
            assert!(!app.should_quit());
        }

        #[test]
        fn test_starts_on_splash_unless_skipped() {
            let app = App::new(
                TuiConfig::default(),
                Arc::new(MockLeadSubmitter::new()),
                Instant::now(),
            );
            assert!(app.in_splash());
            assert!(app.splash_state.is_some());
            assert!(!idle_app().in_splash());
        }

        #[tokio::test]
        async fn test_q_quits_from_home() {
            let mut app = idle_app();
            press(&mut app, KeyCode::Char('q')).await;
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_error_dialog_swallows_keys_until_dismissed() {
            let mut app = idle_app();
            app.push_error("boom");
            press(&mut app, KeyCode::Char('q')).await;
            assert!(!app.should_quit());
            press(&mut app, KeyCode::Enter).await;
            assert!(!app.state.has_errors());
        }

        #[tokio::test]
        async fn test_ctrl_l_toggles_locale() {
            let mut app = idle_app();
            app.handle_key(ctrl('l')).await.unwrap();
            assert_eq!(app.state.locale, Locale::Ar);
            assert_eq!(app.config.locale, Some(Locale::Ar));
        }
    }

    mod splash_tests {
        use super::*;

        #[test]
        fn test_update_splash_no_splash_state() {
            let mut app = idle_app();
            assert!(!app.update_splash(Instant::now(), 24));
        }

        #[test]
        fn test_update_splash_transitions_when_complete() {
            let start = Instant::now();
            let mut app = App::new(
                TuiConfig::default(),
                Arc::new(MockLeadSubmitter::new()),
                start,
            );
            assert!(!app.update_splash(start, 24));
            assert!(app.update_splash(start + Duration::from_secs(5), 24));
            assert_eq!(app.state.current_view, View::Home);
            assert!(app.splash_state.is_none());
        }

        #[tokio::test]
        async fn test_any_key_skips_splash() {
            let mut app = App::new(
                TuiConfig::default(),
                Arc::new(MockLeadSubmitter::new()),
                Instant::now(),
            );
            press(&mut app, KeyCode::Char('x')).await;
            assert_eq!(app.state.current_view, View::Home);
        }
    }

    mod navigation_tests {
        use super::*;

        #[tokio::test]
        async fn test_tab_cycles_views() {
            let mut app = idle_app();
            press(&mut app, KeyCode::Tab).await;
            assert_eq!(app.state.current_view, View::Services);
            press(&mut app, KeyCode::BackTab).await;
            press(&mut app, KeyCode::BackTab).await;
            assert_eq!(app.state.current_view, View::Newsletter);
        }

        #[tokio::test]
        async fn test_inline_form_captures_typing() {
            let mut app = idle_app();
            app.navigate(View::Contact);
            type_text(&mut app, "q").await;
            assert!(!app.should_quit());
            assert_eq!(app.state.contact.form().field("name").unwrap().as_text(), "q");
            press(&mut app, KeyCode::Esc).await;
            assert_eq!(app.state.current_view, View::Home);
        }

        #[tokio::test]
        async fn test_contact_ctrl_b_opens_booking() {
            let mut app = idle_app();
            app.navigate(View::Contact);
            type_text(&mut app, "b").await;
            assert_eq!(app.state.open_dialog_kind(), None);

            app.handle_key(ctrl('b')).await.unwrap();
            assert_eq!(app.state.open_dialog_kind(), Some(FormKind::Booking));
            assert_eq!(app.state.contact.form().field("name").unwrap().as_text(), "b");
        }

        #[tokio::test]
        async fn test_home_moves_carousel() {
            let mut app = idle_app();
            press(&mut app, KeyCode::Right).await;
            assert_eq!(app.state.rotator.current(), 1);
            press(&mut app, KeyCode::Char('3')).await;
            assert_eq!(app.state.rotator.current(), 2);
            press(&mut app, KeyCode::Char('9')).await;
            assert_eq!(app.state.rotator.current(), 2);
            press(&mut app, KeyCode::Left).await;
            assert_eq!(app.state.rotator.current(), 1);
        }

        #[tokio::test]
        async fn test_returning_home_restarts_carousel() {
            let mut app = idle_app();
            press(&mut app, KeyCode::Right).await;
            app.navigate(View::Services);
            app.navigate(View::Home);
            assert_eq!(app.state.rotator.current(), 0);
        }

        #[tokio::test]
        async fn test_services_enter_opens_consultation() {
            let mut app = idle_app();
            app.navigate(View::Services);
            press(&mut app, KeyCode::Down).await;
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(
                app.state.open_dialog_kind(),
                Some(FormKind::ServiceConsultation)
            );
            assert_eq!(
                app.state.service_consultation.wizard.form().context(),
                Some("Real Estate")
            );
        }
    }

    mod dialog_tests {
        use super::*;

        #[tokio::test]
        async fn test_booking_flow_end_to_end() {
            let mut submitter = MockLeadSubmitter::new();
            submitter
                .expect_submit_lead()
                .withf(|lead| {
                    lead.kind == FormKind::Booking
                        && lead.text("name") == Some("Ada")
                        && lead.fields.get("agreedToTerms") == Some(&serde_json::Value::Bool(true))
                })
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with(submitter);

            fill_booking_step_one(&mut app).await;
            // preferred time is optional; move on to the buttons row
            press(&mut app, KeyCode::Tab).await;
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.booking.wizard.step(), WizardStep::Two);

            for _ in 0..3 {
                press(&mut app, KeyCode::Tab).await;
            }
            press(&mut app, KeyCode::Char(' ')).await;
            app.handle_key(ctrl('s')).await.unwrap();
            assert!(app.state.booking.wizard.status().is_submitting());

            await_submission(&mut app, FormKind::Booking).await;
            match app.state.booking.wizard.status() {
                SubmissionStatus::Submitted { reference, .. } => {
                    assert_eq!(reference.as_ref().map(String::len), Some(6));
                }
                other => panic!("expected submitted, got {other:?}"),
            }

            app.tick(Instant::now() + Duration::from_secs(3));
            assert!(!app.state.booking.is_open());
            assert_eq!(app.state.booking.wizard.step(), WizardStep::One);
            assert_eq!(
                app.state.booking.wizard.form().field("name").unwrap().as_text(),
                ""
            );
        }

        #[tokio::test]
        async fn test_next_blocked_until_step_valid() {
            let mut app = idle_app();
            press(&mut app, KeyCode::Char('b')).await;
            type_text(&mut app, "Ada").await;
            press(&mut app, KeyCode::BackTab).await;
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.booking.wizard.step(), WizardStep::One);
        }

        #[tokio::test]
        async fn test_escape_keeps_values_for_reopen() {
            let mut app = idle_app();
            fill_booking_step_one(&mut app).await;
            press(&mut app, KeyCode::Esc).await;
            assert_eq!(app.state.open_dialog_kind(), None);

            press(&mut app, KeyCode::Char('b')).await;
            assert_eq!(
                app.state.booking.wizard.form().field("email").unwrap().as_text(),
                "ada@example.com"
            );
        }

        #[tokio::test]
        async fn test_completion_lands_after_dialog_closed() {
            let mut submitter = MockLeadSubmitter::new();
            submitter.expect_submit_lead().times(1).returning(|_| Ok(()));
            let mut app = app_with(submitter);

            press(&mut app, KeyCode::Char('c')).await;
            for text in ["Ada", "a", "1"] {
                type_text(&mut app, text).await;
                press(&mut app, KeyCode::Tab).await;
            }
            app.handle_key(ctrl('s')).await.unwrap();
            press(&mut app, KeyCode::Esc).await;
            assert!(!app.state.consultation.is_open());

            await_submission(&mut app, FormKind::Consultation).await;
            assert!(app.state.consultation.wizard.status().is_submitted());
        }

        #[tokio::test]
        async fn test_failure_allows_retry() {
            let mut submitter = MockLeadSubmitter::new();
            submitter
                .expect_submit_lead()
                .times(2)
                .returning(|_| Err(SubmitError::Unavailable("offline".to_string())));
            let mut app = app_with(submitter);

            press(&mut app, KeyCode::Char('c')).await;
            for text in ["Ada", "a", "1"] {
                type_text(&mut app, text).await;
                press(&mut app, KeyCode::Tab).await;
            }
            for _ in 0..2 {
                app.handle_key(ctrl('s')).await.unwrap();
                await_submission(&mut app, FormKind::Consultation).await;
                assert!(matches!(
                    app.state.consultation.wizard.status(),
                    SubmissionStatus::Failed { .. }
                ));
            }
            assert_eq!(
                app.state
                    .consultation
                    .wizard
                    .form()
                    .field("name")
                    .unwrap()
                    .as_text(),
                "Ada"
            );
        }
    }

    mod inline_form_tests {
        use super::*;

        #[tokio::test]
        async fn test_newsletter_rejects_bad_address() {
            let mut app = idle_app();
            app.navigate(View::Newsletter);
            type_text(&mut app, "user@example").await;
            app.handle_key(ctrl('s')).await.unwrap();
            assert_eq!(app.state.newsletter.status(), &SubmissionStatus::Idle);
        }

        #[tokio::test]
        async fn test_newsletter_modal_until_acknowledged() {
            let mut submitter = MockLeadSubmitter::new();
            submitter
                .expect_submit_lead()
                .withf(|lead| lead.text("email") == Some("user@example.com"))
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with(submitter);
            app.navigate(View::Newsletter);

            type_text(&mut app, "user@example.com").await;
            app.handle_key(ctrl('s')).await.unwrap();
            await_submission(&mut app, FormKind::Newsletter).await;

            assert!(app.newsletter_modal_open());
            assert_eq!(
                app.state.newsletter.form().field("email").unwrap().as_text(),
                ""
            );
            app.tick(Instant::now() + Duration::from_secs(60));
            assert!(app.newsletter_modal_open());

            press(&mut app, KeyCode::Enter).await;
            assert!(!app.newsletter_modal_open());
            assert_eq!(app.state.newsletter.status(), &SubmissionStatus::Idle);
        }

        #[tokio::test]
        async fn test_escape_ignored_while_newsletter_submits() {
            let mut submitter = MockLeadSubmitter::new();
            submitter.expect_submit_lead().times(1).returning(|_| Ok(()));
            let mut app = app_with(submitter);
            app.navigate(View::Newsletter);

            type_text(&mut app, "user@example.com").await;
            app.handle_key(ctrl('s')).await.unwrap();
            assert!(app.state.newsletter.status().is_submitting());
            press(&mut app, KeyCode::Esc).await;
            assert_eq!(app.state.current_view, View::Newsletter);

            await_submission(&mut app, FormKind::Newsletter).await;
            app.tick(Instant::now() + Duration::from_secs(3600));
            assert!(app.newsletter_modal_open());
            assert!(!app.is_animating());
        }

        #[tokio::test]
        async fn test_leaving_newsletter_dismisses_confirmation() {
            let mut submitter = MockLeadSubmitter::new();
            submitter.expect_submit_lead().times(1).returning(|_| Ok(()));
            let mut app = app_with(submitter);
            app.navigate(View::Newsletter);

            type_text(&mut app, "user@example.com").await;
            app.handle_key(ctrl('s')).await.unwrap();
            await_submission(&mut app, FormKind::Newsletter).await;
            assert!(app.state.newsletter.status().is_submitted());

            app.navigate(View::Home);
            assert_eq!(app.state.newsletter.status(), &SubmissionStatus::Idle);
            assert!(!app.is_animating());
        }

        #[tokio::test]
        async fn test_contact_resets_after_window() {
            let mut submitter = MockLeadSubmitter::new();
            submitter
                .expect_submit_lead()
                .withf(|lead| lead.kind == FormKind::Contact && lead.context.is_none())
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with(submitter);
            app.navigate(View::Contact);

            for text in ["Ada", "555", "ada@example.com", "Lease", "Question"] {
                type_text(&mut app, text).await;
                press(&mut app, KeyCode::Tab).await;
            }
            press(&mut app, KeyCode::Enter).await;
            await_submission(&mut app, FormKind::Contact).await;
            assert!(app.state.contact.status().is_submitted());

            // typing is ignored while the confirmation shows
            type_text(&mut app, "x").await;
            app.tick(Instant::now() + Duration::from_secs(3));
            assert_eq!(app.state.contact.status(), &SubmissionStatus::Idle);
            assert_eq!(app.state.contact.form().field("name").unwrap().as_text(), "");
        }
    }
}
