//! Book operations
//!
//! List, detail, edit, status, delete and add flows. Each method updates the
//! model and returns the requests to send; responses are applied in
//! `handlers::api`.

use crate::api::{BookId, BookStatus};
use crate::logic::validation::validate_new_book;
use crate::model::{DetailForm, LibraryFocus, Model, Notice, Screen};
use crate::services::api::ApiRequest;

impl Model {
    /// Re-fetch the collection
    pub fn load_books(&self) -> Vec<ApiRequest> {
        vec![ApiRequest::LoadBooks]
    }

    /// Signed in and on the library screen, so book reads still apply
    pub fn shows_library(&self) -> bool {
        self.session.logged_in && self.ui.screen == Screen::Library
    }

    /// Fetch one book; the modal opens when it arrives
    pub fn open_book_details(&mut self, id: BookId) -> Vec<ApiRequest> {
        vec![ApiRequest::GetBook { id }]
    }

    pub fn open_selected_details(&mut self) -> Vec<ApiRequest> {
        match self.library.selected_book().map(|b| b.id) {
            Some(id) => self.open_book_details(id),
            None => Vec::new(),
        }
    }

    /// Show the fetched book in the edit modal
    pub fn show_details(&mut self, form: DetailForm) {
        self.ui.detail = Some(form);
    }

    /// Change the status in the open modal (page/rating inputs follow)
    pub fn toggle_fields(&mut self, status: BookStatus) {
        if let Some(detail) = self.ui.detail.as_mut() {
            detail.toggle_fields(status);
        }
    }

    /// PUT every modal field; the modal closes when the request completes
    pub fn save_details(&mut self) -> Vec<ApiRequest> {
        match &self.ui.detail {
            Some(detail) => vec![ApiRequest::SaveDetails {
                id: detail.book_id,
                patch: detail.to_patch(),
            }],
            None => Vec::new(),
        }
    }

    pub fn update_status(&mut self, id: BookId, status: BookStatus) -> Vec<ApiRequest> {
        vec![ApiRequest::UpdateStatus { id, status }]
    }

    /// Advance the selected book to its next status
    pub fn cycle_selected_status(&mut self) -> Vec<ApiRequest> {
        match self.library.selected_book().map(|b| (b.id, b.status)) {
            Some((id, status)) => self.update_status(id, status.next()),
            None => Vec::new(),
        }
    }

    /// Ask for confirmation before deleting; a second call retargets the dialog
    pub fn delete_book(&mut self, id: BookId) {
        self.ui.open_confirm(id);
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.library.selected_book().map(|b| b.id) {
            self.delete_book(id);
        }
    }

    /// Delete from inside the detail modal: the modal gives way to the dialog
    pub fn delete_from_details(&mut self) {
        if let Some(id) = self.ui.detail.as_ref().map(|d| d.book_id) {
            self.delete_book(id);
            self.ui.close_modal();
        }
    }

    /// Send the DELETE for the pending target
    pub fn confirm_delete(&mut self) -> Vec<ApiRequest> {
        match self.ui.pending_delete() {
            Some(id) => vec![ApiRequest::DeleteBook { id }],
            None => Vec::new(),
        }
    }

    pub fn close_modal(&mut self) {
        self.ui.close_modal();
    }

    pub fn close_confirm(&mut self) {
        self.ui.close_confirm();
    }

    /// Validate the add form and POST it
    pub fn add_book(&mut self) -> Vec<ApiRequest> {
        let form = &self.ui.add_form;
        match validate_new_book(form.title.as_str(), form.author.as_str()) {
            Ok(book) => vec![ApiRequest::CreateBook(book)],
            Err(err) => {
                self.report(Notice::Alert(err.to_string()));
                Vec::new()
            }
        }
    }

    pub fn focus_add_form(&mut self) {
        self.ui.library_focus = LibraryFocus::AddForm;
    }

    pub fn focus_list(&mut self) {
        self.ui.library_focus = LibraryFocus::List;
    }
}
