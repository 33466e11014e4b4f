//! Shared types for the Model
//!
//! Input widgets, forms and dialog states used by the UI model.

use std::time::Instant;

use crate::api::{Book, BookId, BookPatch, BookStatus};
use crate::logic;
use crate::logic::fields::field_visibility;
use crate::logic::validation::{clamp_numeric_input, numeric_value, MAX_PAGE, MAX_RATING};

/// Top-level screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Library,
}

/// Which part of the library screen receives keys
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LibraryFocus {
    List,
    AddForm,
}

/// Single-line text input; the cursor always sits at the end
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
}

impl TextInput {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Digit-only input clamped to `max` after every edit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumericInput {
    text: String,
    max: u32,
}

impl NumericInput {
    pub fn new(value: u32, max: u32) -> Self {
        Self {
            text: value.min(max).to_string(),
            max,
        }
    }

    pub fn push(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        self.text.push(c);
        self.text = clamp_numeric_input(&self.text, self.max);
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> u32 {
        numeric_value(&self.text, self.max)
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}

/// Add-book form at the bottom of the library screen
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddBookForm {
    pub title: TextInput,
    pub author: TextInput,
    /// false: title focused, true: author focused
    pub author_focused: bool,
}

impl AddBookForm {
    pub fn focused_input(&mut self) -> &mut TextInput {
        if self.author_focused {
            &mut self.author
        } else {
            &mut self.title
        }
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.author.clear();
        self.author_focused = false;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub username: TextInput,
    pub password: TextInput,
    pub focus: LoginField,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            username: TextInput::default(),
            password: TextInput::default(),
            focus: LoginField::Username,
        }
    }
}

impl LoginForm {
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterField {
    Username,
    Email,
    Password,
    Confirm,
}

impl RegisterField {
    pub const ALL: [RegisterField; 4] = [
        RegisterField::Username,
        RegisterField::Email,
        RegisterField::Password,
        RegisterField::Confirm,
    ];

    pub fn is_secret(&self) -> bool {
        matches!(self, RegisterField::Password | RegisterField::Confirm)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: TextInput,
    pub email: TextInput,
    pub password: TextInput,
    pub confirm: TextInput,
    pub focus: RegisterField,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            username: TextInput::default(),
            email: TextInput::default(),
            password: TextInput::default(),
            confirm: TextInput::default(),
            focus: RegisterField::Username,
        }
    }
}

impl RegisterForm {
    pub fn input(&self, field: RegisterField) -> &TextInput {
        match field {
            RegisterField::Username => &self.username,
            RegisterField::Email => &self.email,
            RegisterField::Password => &self.password,
            RegisterField::Confirm => &self.confirm,
        }
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            RegisterField::Username => &mut self.username,
            RegisterField::Email => &mut self.email,
            RegisterField::Password => &mut self.password,
            RegisterField::Confirm => &mut self.confirm,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = cycle_field(&RegisterField::ALL, self.focus, true);
    }

    pub fn focus_prev(&mut self) {
        self.focus = cycle_field(&RegisterField::ALL, self.focus, false);
    }
}

/// Fields of the detail modal, in focus order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailField {
    ImageUrl,
    Description,
    Status,
    CurrentPage,
    Rating,
}

/// Edit modal for one book
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailForm {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub image_url: TextInput,
    pub description: TextInput,
    pub status: BookStatus,
    pub current_page: NumericInput,
    pub rating: NumericInput,
    pub focus: DetailField,
}

impl DetailForm {
    pub fn from_book(book: &Book) -> Self {
        Self {
            book_id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            image_url: TextInput::with_value(book.image_url.clone().unwrap_or_default()),
            description: TextInput::with_value(book.description.clone().unwrap_or_default()),
            status: book.status,
            current_page: NumericInput::new(book.current_page, MAX_PAGE),
            rating: NumericInput::new(book.rating, MAX_RATING),
            focus: DetailField::ImageUrl,
        }
    }

    /// Focusable fields for the current status
    pub fn visible_fields(&self) -> Vec<DetailField> {
        let visibility = field_visibility(self.status);
        let mut fields = vec![DetailField::ImageUrl, DetailField::Description, DetailField::Status];
        if visibility.current_page {
            fields.push(DetailField::CurrentPage);
        }
        if visibility.rating {
            fields.push(DetailField::Rating);
        }
        fields
    }

    pub fn is_visible(&self, field: DetailField) -> bool {
        self.visible_fields().contains(&field)
    }

    /// Switch status and the page/rating inputs with it
    pub fn toggle_fields(&mut self, status: BookStatus) {
        self.status = status;
        if !self.is_visible(self.focus) {
            self.focus = DetailField::Status;
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = cycle_field(&self.visible_fields(), self.focus, true);
    }

    pub fn focus_prev(&mut self) {
        self.focus = cycle_field(&self.visible_fields(), self.focus, false);
    }

    /// Route a typed character to the focused field
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            DetailField::ImageUrl => self.image_url.push(c),
            DetailField::Description => self.description.push(c),
            DetailField::Status => {}
            DetailField::CurrentPage => self.current_page.push(c),
            DetailField::Rating => self.rating.push(c),
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            DetailField::ImageUrl => self.image_url.backspace(),
            DetailField::Description => self.description.backspace(),
            DetailField::Status => {}
            DetailField::CurrentPage => self.current_page.backspace(),
            DetailField::Rating => self.rating.backspace(),
        }
    }

    /// Every field goes out, hidden ones included
    pub fn to_patch(&self) -> BookPatch {
        BookPatch {
            image_url: Some(self.image_url.as_str().to_string()),
            description: Some(self.description.as_str().to_string()),
            status: Some(self.status),
            current_page: Some(self.current_page.value()),
            rating: Some(self.rating.value()),
        }
    }
}

/// Pending delete, scoped to the open confirmation dialog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub book_id: BookId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashMessage {
    pub text: String,
    pub kind: FlashKind,
    pub shown_at: Instant,
}

impl FlashMessage {
    pub fn phase_at(&self, now: Instant) -> logic::flash::FlashPhase {
        logic::flash::flash_phase(now.saturating_duration_since(self.shown_at).as_millis())
    }
}

/// Outcome of an operation as reported to the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Nothing to report
    Silent,
    /// Written to the debug log only
    Log(String),
    /// Modal alert the user must dismiss
    Alert(String),
    /// Auto-dismissing flash message
    Flash { text: String, kind: FlashKind },
}

impl Notice {
    pub fn flash_success(text: impl Into<String>) -> Self {
        Notice::Flash {
            text: text.into(),
            kind: FlashKind::Success,
        }
    }

    pub fn flash_error(text: impl Into<String>) -> Self {
        Notice::Flash {
            text: text.into(),
            kind: FlashKind::Error,
        }
    }
}

/// Step through `fields` from `current`, wrapping at both ends
fn cycle_field<T: Copy + PartialEq>(fields: &[T], current: T, forward: bool) -> T {
    let idx = fields.iter().position(|f| *f == current);
    let next = if forward {
        logic::navigation::next_selection(idx, fields.len())
    } else {
        logic::navigation::prev_selection(idx, fields.len())
    };
    next.and_then(|i| fields.get(i).copied()).unwrap_or(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(status: BookStatus) -> Book {
        Book {
            id: 3,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            status,
            current_page: 120,
            rating: 7,
            image_url: Some("http://img/dune.jpg".to_string()),
            description: None,
        }
    }

    #[test]
    fn test_page_input_never_exceeds_max() {
        let mut input = NumericInput::new(0, MAX_PAGE);
        for c in "99999".chars() {
            input.push(c);
            assert!(input.value() <= 300);
        }
        assert_eq!(input.text(), "300");
    }

    #[test]
    fn test_numeric_input_ignores_non_digits() {
        let mut input = NumericInput::new(1, MAX_RATING);
        input.push('x');
        input.push('-');
        assert_eq!(input.text(), "1");
        input.push('5');
        assert_eq!(input.text(), "10");
    }

    #[test]
    fn test_numeric_input_backspace_to_empty_reads_zero() {
        let mut input = NumericInput::new(7, MAX_RATING);
        input.backspace();
        assert_eq!(input.text(), "");
        assert_eq!(input.value(), 0);
    }

    #[test]
    fn test_numeric_input_new_clamps() {
        assert_eq!(NumericInput::new(500, MAX_PAGE).value(), 300);
    }

    #[test]
    fn test_detail_form_visible_fields_follow_status() {
        let mut form = DetailForm::from_book(&book(BookStatus::InPlan));
        assert!(!form.is_visible(DetailField::CurrentPage));
        assert!(!form.is_visible(DetailField::Rating));

        form.toggle_fields(BookStatus::Reading);
        assert!(form.is_visible(DetailField::CurrentPage));
        assert!(!form.is_visible(DetailField::Rating));

        form.toggle_fields(BookStatus::Finished);
        assert!(!form.is_visible(DetailField::CurrentPage));
        assert!(form.is_visible(DetailField::Rating));
    }

    #[test]
    fn test_toggle_moves_focus_off_hidden_field() {
        let mut form = DetailForm::from_book(&book(BookStatus::Reading));
        form.focus = DetailField::CurrentPage;
        form.toggle_fields(BookStatus::Finished);
        assert_eq!(form.focus, DetailField::Status);
    }

    #[test]
    fn test_focus_cycles_through_visible_fields_only() {
        let mut form = DetailForm::from_book(&book(BookStatus::InPlan));
        form.focus = DetailField::Status;
        form.focus_next();
        assert_eq!(form.focus, DetailField::ImageUrl);
        form.focus_prev();
        assert_eq!(form.focus, DetailField::Status);
    }

    #[test]
    fn test_patch_carries_hidden_fields() {
        let form = DetailForm::from_book(&book(BookStatus::InPlan));
        let patch = form.to_patch();
        assert_eq!(patch.status, Some(BookStatus::InPlan));
        assert_eq!(patch.current_page, Some(120));
        assert_eq!(patch.rating, Some(7));
        assert_eq!(patch.image_url.as_deref(), Some("http://img/dune.jpg"));
        assert_eq!(patch.description.as_deref(), Some(""));
    }

    #[test]
    fn test_register_focus_wraps() {
        let mut form = RegisterForm::default();
        form.focus_prev();
        assert_eq!(form.focus, RegisterField::Confirm);
        form.focus_next();
        assert_eq!(form.focus, RegisterField::Username);
    }

    #[test]
    fn test_add_form_clear_resets_focus() {
        let mut form = AddBookForm::default();
        form.author_focused = true;
        form.focused_input().push('x');
        form.clear();
        assert!(form.author.is_empty());
        assert!(!form.author_focused);
    }
}
