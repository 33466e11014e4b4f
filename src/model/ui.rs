//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! the current screen, forms, dialogs and flash messages.

use std::collections::VecDeque;
use std::time::Instant;

use super::types::{
    AddBookForm, DeleteConfirmation, DetailForm, FlashKind, FlashMessage, LibraryFocus, LoginForm,
    RegisterForm, Screen,
};
use crate::api::BookId;
use crate::logic::flash::should_dismiss_flash;

#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    // ============================================
    // SCREENS & FORMS
    // ============================================
    pub screen: Screen,

    pub library_focus: LibraryFocus,

    pub add_form: AddBookForm,

    pub login_form: LoginForm,

    pub register_form: RegisterForm,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// Book detail/edit modal
    pub detail: Option<DetailForm>,

    /// Delete confirmation dialog
    pub confirm_delete: Option<DeleteConfirmation>,

    /// Alert dialog text
    pub alert: Option<String>,

    /// Alerts raised while another one is showing, shown in order
    pub queued_alerts: VecDeque<String>,

    /// Flash messages in arrival order
    pub flashes: Vec<FlashMessage>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            screen: Screen::Login,
            library_focus: LibraryFocus::List,
            add_form: AddBookForm::default(),
            login_form: LoginForm::default(),
            register_form: RegisterForm::default(),
            detail: None,
            confirm_delete: None,
            alert: None,
            queued_alerts: VecDeque::new(),
            flashes: Vec::new(),
            should_quit: false,
        }
    }

    /// Check if any modal dialog is currently showing
    pub fn has_modal(&self) -> bool {
        self.detail.is_some() || self.confirm_delete.is_some() || self.alert.is_some()
    }

    /// Close all modal dialogs
    pub fn close_all_modals(&mut self) {
        self.detail = None;
        self.confirm_delete = None;
        self.alert = None;
        self.queued_alerts.clear();
    }

    /// Hide the detail modal
    pub fn close_modal(&mut self) {
        self.detail = None;
    }

    /// Ask to delete `book_id`; replaces any pending confirmation
    pub fn open_confirm(&mut self, book_id: BookId) {
        self.confirm_delete = Some(DeleteConfirmation { book_id });
    }

    /// Hide the delete confirmation and forget its target
    pub fn close_confirm(&mut self) {
        self.confirm_delete = None;
    }

    pub fn pending_delete(&self) -> Option<BookId> {
        self.confirm_delete.map(|c| c.book_id)
    }

    pub fn show_alert(&mut self, message: String) {
        if self.alert.is_some() {
            self.queued_alerts.push_back(message);
        } else {
            self.alert = Some(message);
        }
    }

    /// Close the current alert; the next queued one takes its place
    pub fn dismiss_alert(&mut self) {
        self.alert = self.queued_alerts.pop_front();
    }

    pub fn show_flash(&mut self, text: String, kind: FlashKind) {
        self.show_flash_at(text, kind, Instant::now());
    }

    pub fn show_flash_at(&mut self, text: String, kind: FlashKind, shown_at: Instant) {
        self.flashes.push(FlashMessage { text, kind, shown_at });
    }

    /// Drop expired flash messages
    pub fn prune_flashes(&mut self, now: Instant) {
        self.flashes.retain(|flash| {
            !should_dismiss_flash(now.saturating_duration_since(flash.shown_at).as_millis())
        });
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.library_focus = LibraryFocus::List;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_ui_model_creation() {
        let model = UiModel::new(false);
        assert_eq!(model.screen, Screen::Login);
        assert!(!model.has_modal());
        assert!(!model.should_quit);
    }

    #[test]
    fn test_open_confirm_last_call_wins() {
        let mut model = UiModel::new(false);
        model.open_confirm(1);
        model.open_confirm(2);
        assert_eq!(model.pending_delete(), Some(2));
    }

    #[test]
    fn test_close_confirm_clears_target() {
        let mut model = UiModel::new(false);
        model.open_confirm(5);
        model.close_confirm();
        assert_eq!(model.pending_delete(), None);
        assert!(!model.has_modal());
    }

    #[test]
    fn test_flashes_expire_after_fade() {
        let mut model = UiModel::new(false);
        let start = Instant::now();
        model.show_flash_at("one".to_string(), FlashKind::Success, start);
        model.show_flash_at(
            "two".to_string(),
            FlashKind::Error,
            start + Duration::from_millis(1000),
        );

        model.prune_flashes(start + Duration::from_millis(3400));
        assert_eq!(model.flashes.len(), 2);

        model.prune_flashes(start + Duration::from_millis(3500));
        assert_eq!(model.flashes.len(), 1);
        assert_eq!(model.flashes[0].text, "two");

        model.prune_flashes(start + Duration::from_millis(4500));
        assert!(model.flashes.is_empty());
    }

    #[test]
    fn test_alerts_queue_behind_the_open_one() {
        let mut model = UiModel::new(false);
        model.show_alert("first".to_string());
        model.show_alert("second".to_string());
        assert_eq!(model.alert.as_deref(), Some("first"));
        model.dismiss_alert();
        assert_eq!(model.alert.as_deref(), Some("second"));
        model.dismiss_alert();
        assert!(model.alert.is_none());
    }

    #[test]
    fn test_close_all_modals() {
        let mut model = UiModel::new(false);
        model.open_confirm(1);
        model.show_alert("careful".to_string());
        model.show_alert("again".to_string());
        model.close_all_modals();
        assert!(!model.has_modal());
        assert!(model.queued_alerts.is_empty());
    }
}
