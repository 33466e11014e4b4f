//! Account operations: registration, login, session check, logout

use crate::logic::validation::{validate_credentials, validate_registration};
use crate::model::{Model, Notice, Screen};
use crate::services::api::ApiRequest;

impl Model {
    /// Validate the register form and POST it
    pub fn register_user(&mut self) -> Vec<ApiRequest> {
        let form = &self.ui.register_form;
        let registration = validate_registration(
            form.username.as_str(),
            form.email.as_str(),
            form.password.as_str(),
            form.confirm.as_str(),
        );

        match registration {
            Ok(registration) => vec![ApiRequest::Register(registration)],
            Err(err) => {
                self.report(Notice::Alert(err.to_string()));
                Vec::new()
            }
        }
    }

    pub fn login(&mut self) -> Vec<ApiRequest> {
        let form = &self.ui.login_form;
        match validate_credentials(form.username.as_str(), form.password.as_str()) {
            Ok(credentials) => vec![ApiRequest::Login(credentials)],
            Err(err) => {
                self.report(Notice::Alert(err.to_string()));
                Vec::new()
            }
        }
    }

    pub fn check_session(&self) -> Vec<ApiRequest> {
        vec![ApiRequest::CheckSession]
    }

    pub fn logout(&self) -> Vec<ApiRequest> {
        vec![ApiRequest::Logout]
    }

    /// Drop everything tied to the old session
    pub fn end_session(&mut self) {
        self.session.sign_out();
        self.library.clear();
        self.ui.close_all_modals();
        self.ui.add_form.clear();
        self.ui.switch_screen(Screen::Login);
    }

    /// Go to the library screen and fetch the books
    pub fn enter_library(&mut self) -> Vec<ApiRequest> {
        self.ui.switch_screen(Screen::Library);
        self.load_books()
    }
}
