//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application:
//!
//! - **LibraryModel**: the books as last returned by the server
//! - **SessionModel**: who is signed in
//! - **UiModel**: screen, forms, dialogs, flash messages
//!
//! No services live here: handlers mutate the model and return the
//! requests the runtime should send.

pub mod library;
pub mod session;
pub mod types;
pub mod ui;

pub use library::LibraryModel;
pub use session::SessionModel;
pub use types::*;
pub use ui::UiModel;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub library: LibraryModel,
    pub session: SessionModel,
    pub ui: UiModel,
}

impl Model {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            library: LibraryModel::new(),
            session: SessionModel::new(),
            ui: UiModel::new(vim_mode),
        }
    }

    /// Single reporting path for every operation outcome
    pub fn report(&mut self, notice: Notice) {
        match notice {
            Notice::Silent => {}
            Notice::Log(message) => {
                tracing::warn!("{}", message);
            }
            Notice::Alert(message) => {
                tracing::info!(alert = %message, "showing alert");
                self.ui.show_alert(message);
            }
            Notice::Flash { text, kind } => {
                match kind {
                    FlashKind::Success => tracing::info!(flash = %text, "flash"),
                    FlashKind::Error => tracing::warn!(flash = %text, "flash"),
                }
                self.ui.show_flash(text, kind);
            }
        }
    }

    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    pub fn close_all_modals(&mut self) {
        self.ui.close_all_modals();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let model = Model::new(true);
        assert!(model.library.books.is_empty());
        assert!(!model.session.logged_in);
        assert!(model.ui.vim_mode);
    }

    #[test]
    fn test_report_silent_and_log_leave_ui_untouched() {
        let mut model = Model::new(false);
        model.report(Notice::Silent);
        model.report(Notice::Log("background failure".to_string()));
        assert!(!model.has_modal());
        assert!(model.ui.flashes.is_empty());
    }

    #[test]
    fn test_report_alert_opens_dialog() {
        let mut model = Model::new(false);
        model.report(Notice::Alert("Please enter a title!".to_string()));
        assert_eq!(model.ui.alert.as_deref(), Some("Please enter a title!"));
    }

    #[test]
    fn test_report_flash_pushes_message() {
        let mut model = Model::new(false);
        model.report(Notice::flash_success("Book deleted successfully!"));
        assert_eq!(model.ui.flashes.len(), 1);
        assert_eq!(model.ui.flashes[0].kind, FlashKind::Success);
    }
}
