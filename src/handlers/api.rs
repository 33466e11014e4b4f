//! API Response Handler
//!
//! Applies responses from the background service to the model and returns
//! the follow-up requests (mostly list reloads after a mutation).

use crate::logic::errors::{failure_notice, Operation};
use crate::model::{DetailForm, Model, Notice, Screen};
use crate::services::api::{ApiRequest, ApiResponse};

/// Handle API response from background service
///
/// Response types:
/// - BooksLoaded: replaces the list (401 is ignored)
/// - BookLoaded: opens the detail modal
///
/// Book reads that land after the library was left (logout, expiry) are dropped.
/// - DetailsSaved / StatusUpdated / BookCreated / BookDeleted: mutation results, followed by a reload
/// - Registered / LoggedIn / SessionChecked / LoggedOut: session changes
pub fn handle_api_response(model: &mut Model, response: ApiResponse) -> Vec<ApiRequest> {
    match response {
        ApiResponse::BooksLoaded(_) if !model.shows_library() => {
            tracing::debug!("dropping book list for a closed library");
            Vec::new()
        }

        ApiResponse::BooksLoaded(result) => {
            match result {
                Ok(books) => {
                    tracing::debug!(count = books.len(), "books loaded");
                    model.library.replace_books(books);
                }
                Err(err) => model.report(failure_notice(Operation::LoadBooks, &err)),
            }
            Vec::new()
        }

        ApiResponse::BookLoaded { id, .. } if !model.shows_library() => {
            tracing::debug!(id, "dropping book detail for a closed library");
            Vec::new()
        }

        ApiResponse::BookLoaded { id, book } => {
            match book {
                Ok(book) => model.show_details(DetailForm::from_book(&book)),
                Err(err) => {
                    tracing::debug!(id, "detail fetch failed");
                    model.report(failure_notice(Operation::OpenDetails, &err));
                }
            }
            Vec::new()
        }

        ApiResponse::DetailsSaved { id, result } => {
            // Outcome does not change the flow: close and reload either way
            if let Err(err) = result {
                model.report(failure_notice(Operation::SaveDetails, &err));
            }
            if model.ui.detail.as_ref().map(|d| d.book_id) == Some(id) {
                model.close_modal();
            }
            model.load_books()
        }

        ApiResponse::StatusUpdated { id, status, result } => match result {
            Ok(()) => {
                tracing::debug!(id, %status, "status updated");
                model.load_books()
            }
            Err(err) if err.is_unauthorized() => {
                model.end_session();
                Vec::new()
            }
            Err(err) => {
                model.report(failure_notice(Operation::UpdateStatus, &err));
                Vec::new()
            }
        },

        ApiResponse::BookDeleted { id, result } => match result {
            Ok(()) => {
                tracing::debug!(id, "book deleted");
                model.report(Notice::flash_success("Book deleted successfully!"));
                // A confirmation opened since then belongs to another book
                if model.ui.pending_delete() == Some(id) {
                    model.close_confirm();
                }
                if model.ui.detail.as_ref().map(|d| d.book_id) == Some(id) {
                    model.close_modal();
                }
                model.load_books()
            }
            Err(err) => {
                model.report(failure_notice(Operation::DeleteBook, &err));
                Vec::new()
            }
        },

        ApiResponse::BookCreated(result) => match result {
            Ok(created) => {
                tracing::debug!(id = ?created.id, "book created");
                model.ui.add_form.clear();
                model.load_books()
            }
            Err(err) if err.is_unauthorized() => {
                model.session.sign_out();
                model.ui.switch_screen(Screen::Register);
                Vec::new()
            }
            Err(err) => {
                model.report(failure_notice(Operation::AddBook, &err));
                Vec::new()
            }
        },

        ApiResponse::Registered(result) => match result {
            Ok(response) if response.success => {
                model.session.logged_in = true;
                model.session.username = Some(model.ui.register_form.username.as_str().to_string());
                model.ui.register_form = Default::default();
                model.enter_library()
            }
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| "Registration failed.".to_string());
                model.report(Notice::Alert(message));
                Vec::new()
            }
            Err(err) => {
                model.report(failure_notice(Operation::Register, &err));
                Vec::new()
            }
        },

        ApiResponse::LoggedIn(result) => match result {
            Ok(status) if status.logged_in => {
                model.session.apply_status(&status);
                model.ui.login_form = Default::default();
                let welcome = format!("Welcome back, {}!", model.session.display_name());
                model.report(Notice::flash_success(welcome));
                model.enter_library()
            }
            Ok(_) => {
                model.ui.login_form.password.clear();
                model.report(Notice::Alert("Invalid username or password".to_string()));
                Vec::new()
            }
            Err(err) => {
                model.report(failure_notice(Operation::Login, &err));
                Vec::new()
            }
        },

        ApiResponse::SessionChecked(result) => match result {
            Ok(status) => {
                model.session.apply_status(&status);
                if status.logged_in {
                    model.enter_library()
                } else {
                    model.ui.switch_screen(Screen::Login);
                    Vec::new()
                }
            }
            Err(err) => {
                model.session.checked = true;
                model.report(failure_notice(Operation::CheckSession, &err));
                model.ui.switch_screen(Screen::Login);
                Vec::new()
            }
        },

        ApiResponse::LoggedOut(result) => {
            if let Err(err) = result {
                model.report(failure_notice(Operation::Logout, &err));
            }
            model.end_session();
            Vec::new()
        }
    }
}
