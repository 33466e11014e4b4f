//! Keyboard Input Handler
//!
//! Routes key presses to the operation for whatever currently has focus.
//! Dialogs take priority: alert, then delete confirmation, then the detail
//! modal, then the active screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{LibraryFocus, Model, Screen};
use crate::services::api::ApiRequest;

/// Handle keyboard input
///
/// Returns the requests the key press produced.
pub fn handle_key(model: &mut Model, key: KeyEvent) -> Vec<ApiRequest> {
    if key.kind == KeyEventKind::Release {
        return Vec::new();
    }

    // AltGr arrives as CONTROL | ALT on some layouts and must still type
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::ALT);

    if ctrl && key.code == KeyCode::Char('c') {
        model.ui.should_quit = true;
        return Vec::new();
    }

    // Handle alert first: it blocks everything until dismissed
    if model.ui.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            model.ui.dismiss_alert();
        }
        return Vec::new();
    }

    if model.ui.confirm_delete.is_some() {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => model.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                model.close_confirm();
                Vec::new()
            }
            // Ignore other keys while prompt is showing
            _ => Vec::new(),
        };
    }

    if model.ui.detail.is_some() {
        return handle_detail_key(model, key, ctrl);
    }

    match model.ui.screen {
        Screen::Login => handle_login_key(model, key, ctrl),
        Screen::Register => handle_register_key(model, key, ctrl),
        Screen::Library => match model.ui.library_focus {
            LibraryFocus::List => handle_list_key(model, key),
            LibraryFocus::AddForm => handle_add_form_key(model, key),
        },
    }
}

fn handle_detail_key(model: &mut Model, key: KeyEvent, ctrl: bool) -> Vec<ApiRequest> {
    if ctrl {
        return match key.code {
            KeyCode::Char('s') => model.save_details(),
            KeyCode::Char('d') => {
                model.delete_from_details();
                Vec::new()
            }
            _ => Vec::new(),
        };
    }

    let Some(detail) = model.ui.detail.as_mut() else {
        return Vec::new();
    };

    match key.code {
        KeyCode::Esc => {
            model.close_modal();
            Vec::new()
        }
        KeyCode::Enter => model.save_details(),
        KeyCode::Tab | KeyCode::Down => {
            detail.focus_next();
            Vec::new()
        }
        KeyCode::BackTab | KeyCode::Up => {
            detail.focus_prev();
            Vec::new()
        }
        KeyCode::Left | KeyCode::Right if detail.focus == crate::model::DetailField::Status => {
            let status = if key.code == KeyCode::Right {
                detail.status.next()
            } else {
                detail.status.prev()
            };
            model.toggle_fields(status);
            Vec::new()
        }
        KeyCode::Backspace => {
            detail.backspace();
            Vec::new()
        }
        KeyCode::Char(c) => {
            detail.input_char(c);
            Vec::new()
        }
        _ => Vec::new(),
    }
}

fn handle_list_key(model: &mut Model, key: KeyEvent) -> Vec<ApiRequest> {
    let vim_mode = model.ui.vim_mode;

    match key.code {
        KeyCode::Up => model.library.select_prev(),
        KeyCode::Down => model.library.select_next(),
        KeyCode::Char('k') if vim_mode => model.library.select_prev(),
        KeyCode::Char('j') if vim_mode => model.library.select_next(),
        KeyCode::Home => model.library.select_first(),
        KeyCode::End => model.library.select_last(),
        KeyCode::Char('g') if vim_mode => model.library.select_first(),
        KeyCode::Char('G') if vim_mode => model.library.select_last(),
        KeyCode::Enter => return model.open_selected_details(),
        KeyCode::Char('a') => model.focus_add_form(),
        KeyCode::Char('s') => return model.cycle_selected_status(),
        KeyCode::Char('d') | KeyCode::Delete => model.delete_selected(),
        KeyCode::Char('r') => return model.load_books(),
        KeyCode::Char('L') => return model.logout(),
        KeyCode::Char('q') => model.ui.should_quit = true,
        _ => {}
    }

    Vec::new()
}

fn handle_add_form_key(model: &mut Model, key: KeyEvent) -> Vec<ApiRequest> {
    let form = &mut model.ui.add_form;

    match key.code {
        KeyCode::Esc => model.focus_list(),
        KeyCode::Enter => return model.add_book(),
        KeyCode::Tab | KeyCode::BackTab => form.author_focused = !form.author_focused,
        KeyCode::Backspace => form.focused_input().backspace(),
        KeyCode::Char(c) => form.focused_input().push(c),
        _ => {}
    }

    Vec::new()
}

fn handle_login_key(model: &mut Model, key: KeyEvent, ctrl: bool) -> Vec<ApiRequest> {
    if ctrl {
        if key.code == KeyCode::Char('r') {
            model.ui.switch_screen(Screen::Register);
        }
        return Vec::new();
    }

    let form = &mut model.ui.login_form;

    match key.code {
        KeyCode::Esc => model.ui.should_quit = true,
        KeyCode::Enter => return model.login(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => form.toggle_focus(),
        KeyCode::Backspace => form.focused_input().backspace(),
        KeyCode::Char(c) => form.focused_input().push(c),
        _ => {}
    }

    Vec::new()
}

fn handle_register_key(model: &mut Model, key: KeyEvent, ctrl: bool) -> Vec<ApiRequest> {
    if ctrl {
        if key.code == KeyCode::Char('l') {
            model.ui.switch_screen(Screen::Login);
        }
        return Vec::new();
    }

    let form = &mut model.ui.register_form;

    match key.code {
        KeyCode::Esc => model.ui.should_quit = true,
        KeyCode::Enter => return model.register_user(),
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Backspace => form.focused_input().backspace(),
        KeyCode::Char(c) => form.focused_input().push(c),
        _ => {}
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Book, BookStatus};
    use crate::model::DetailForm;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(model: &mut Model, text: &str) -> Vec<ApiRequest> {
        let mut requests = Vec::new();
        for c in text.chars() {
            requests.extend(handle_key(model, press(KeyCode::Char(c))));
        }
        requests
    }

    fn book(id: i64) -> Book {
        Book {
            id,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            status: BookStatus::Reading,
            current_page: 100,
            rating: 0,
            image_url: None,
            description: None,
        }
    }

    fn library_model() -> Model {
        let mut model = Model::new(false);
        model.ui.switch_screen(Screen::Library);
        model.library.replace_books(vec![book(1), book(2)]);
        model
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let mut model = library_model();
        model.ui.show_alert("hi".to_string());
        handle_key(&mut model, ctrl('c'));
        assert!(model.ui.should_quit);
    }

    #[test]
    fn test_alert_blocks_other_keys() {
        let mut model = library_model();
        model.ui.show_alert("hi".to_string());
        assert!(handle_key(&mut model, press(KeyCode::Char('r'))).is_empty());
        assert!(model.ui.alert.is_some());
        handle_key(&mut model, press(KeyCode::Enter));
        assert!(model.ui.alert.is_none());
    }

    #[test]
    fn test_enter_opens_selected_book() {
        let mut model = library_model();
        handle_key(&mut model, press(KeyCode::Down));
        let requests = handle_key(&mut model, press(KeyCode::Enter));
        assert_eq!(requests, vec![ApiRequest::GetBook { id: 2 }]);
    }

    #[test]
    fn test_whitespace_title_never_issues_request() {
        let mut model = library_model();
        handle_key(&mut model, press(KeyCode::Char('a')));
        assert!(type_text(&mut model, "   ").is_empty());
        assert!(handle_key(&mut model, press(KeyCode::Enter)).is_empty());
        assert!(model.ui.alert.is_some());
    }

    #[test]
    fn test_add_form_submits_title_and_author() {
        let mut model = library_model();
        handle_key(&mut model, press(KeyCode::Char('a')));
        type_text(&mut model, "Solaris");
        handle_key(&mut model, press(KeyCode::Tab));
        type_text(&mut model, "Lem");
        let requests = handle_key(&mut model, press(KeyCode::Enter));
        assert!(matches!(
            &requests[..],
            [ApiRequest::CreateBook(b)] if b.title == "Solaris" && b.author == "Lem"
        ));
    }

    #[test]
    fn test_delete_flow_confirm() {
        let mut model = library_model();
        handle_key(&mut model, press(KeyCode::Char('d')));
        assert_eq!(model.ui.pending_delete(), Some(1));
        let requests = handle_key(&mut model, press(KeyCode::Char('y')));
        assert_eq!(requests, vec![ApiRequest::DeleteBook { id: 1 }]);
    }

    #[test]
    fn test_delete_flow_cancel_clears_target() {
        let mut model = library_model();
        handle_key(&mut model, press(KeyCode::Delete));
        handle_key(&mut model, press(KeyCode::Esc));
        assert_eq!(model.ui.pending_delete(), None);
    }

    #[test]
    fn test_page_input_clamped_while_typing() {
        let mut model = library_model();
        model.show_details(DetailForm::from_book(&book(1)));
        // ImageUrl → Description → Status → CurrentPage
        for _ in 0..3 {
            handle_key(&mut model, press(KeyCode::Tab));
        }
        for _ in 0..3 {
            handle_key(&mut model, press(KeyCode::Backspace));
        }
        for c in "4567".chars() {
            handle_key(&mut model, press(KeyCode::Char(c)));
            let page = model.ui.detail.as_ref().unwrap().current_page.value();
            assert!(page <= 300, "page {page}");
        }
        assert_eq!(model.ui.detail.as_ref().unwrap().current_page.text(), "300");
    }

    #[test]
    fn test_status_selector_toggles_fields() {
        let mut model = library_model();
        model.show_details(DetailForm::from_book(&book(1)));
        handle_key(&mut model, press(KeyCode::Tab));
        handle_key(&mut model, press(KeyCode::Tab));
        handle_key(&mut model, press(KeyCode::Right));
        let detail = model.ui.detail.as_ref().unwrap();
        assert_eq!(detail.status, BookStatus::Finished);
        assert!(detail.is_visible(crate::model::DetailField::Rating));
        assert!(!detail.is_visible(crate::model::DetailField::CurrentPage));
    }

    #[test]
    fn test_ctrl_s_saves_details() {
        let mut model = library_model();
        model.show_details(DetailForm::from_book(&book(2)));
        let requests = handle_key(&mut model, ctrl('s'));
        assert!(matches!(&requests[..], [ApiRequest::SaveDetails { id: 2, .. }]));
    }

    #[test]
    fn test_register_screen_submits() {
        let mut model = Model::new(false);
        handle_key(&mut model, ctrl('r'));
        assert_eq!(model.ui.screen, Screen::Register);
        type_text(&mut model, "ann");
        handle_key(&mut model, press(KeyCode::Tab));
        type_text(&mut model, "a@yahoo.com");
        assert!(handle_key(&mut model, press(KeyCode::Enter)).is_empty());
        handle_key(&mut model, press(KeyCode::Enter));

        // Fix the address and try again
        for _ in 0.."yahoo.com".len() {
            handle_key(&mut model, press(KeyCode::Backspace));
        }
        type_text(&mut model, "gmail.com");
        let requests = handle_key(&mut model, press(KeyCode::Enter));
        assert!(matches!(&requests[..], [ApiRequest::Register(r)] if r.email == "a@gmail.com"));
    }

    #[test]
    fn test_altgr_at_sign_types_into_email() {
        let mut model = Model::new(false);
        handle_key(&mut model, ctrl('r'));
        handle_key(&mut model, press(KeyCode::Tab));
        type_text(&mut model, "a");
        let altgr = KeyEvent::new(KeyCode::Char('@'), KeyModifiers::CONTROL | KeyModifiers::ALT);
        handle_key(&mut model, altgr);
        type_text(&mut model, "gmail.com");
        assert_eq!(model.ui.register_form.email.as_str(), "a@gmail.com");
    }

    #[test]
    fn test_q_types_into_login_form_instead_of_quitting() {
        let mut model = Model::new(false);
        type_text(&mut model, "q");
        assert!(!model.ui.should_quit);
        assert_eq!(model.ui.login_form.username.as_str(), "q");
    }

    #[test]
    fn test_release_events_ignored() {
        let mut model = library_model();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut model, key);
        assert!(!model.ui.should_quit);
    }
}
