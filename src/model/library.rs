//! Library Model
//!
//! The signed-in user's books exactly as the server last returned them.
//! Nothing here is cached across mutations: every change triggers a reload.

use crate::api::{Book, BookId};
use crate::logic::navigation::{next_selection, prev_selection, retain_selection};

#[derive(Clone, Debug, Default)]
pub struct LibraryModel {
    pub books: Vec<Book>,

    /// Index into `books`
    pub selected: Option<usize>,

    /// Whether at least one list response has arrived
    pub loaded: bool,
}

impl LibraryModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list with a fresh server response
    pub fn replace_books(&mut self, books: Vec<Book>) {
        self.selected = retain_selection(self.selected, books.len());
        self.books = books;
        self.loaded = true;
    }

    pub fn clear(&mut self) {
        self.books.clear();
        self.selected = None;
        self.loaded = false;
    }

    pub fn selected_book(&self) -> Option<&Book> {
        self.selected.and_then(|idx| self.books.get(idx))
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn select_next(&mut self) {
        self.selected = next_selection(self.selected, self.books.len());
    }

    pub fn select_prev(&mut self) {
        self.selected = prev_selection(self.selected, self.books.len());
    }

    pub fn select_first(&mut self) {
        self.selected = if self.books.is_empty() { None } else { Some(0) };
    }

    pub fn select_last(&mut self) {
        self.selected = self.books.len().checked_sub(1);
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::BookStatus;

    fn book(id: BookId) -> Book {
        Book {
            id,
            title: format!("Book {}", id),
            author: String::new(),
            status: BookStatus::InPlan,
            current_page: 0,
            rating: 0,
            image_url: None,
            description: None,
        }
    }

    #[test]
    fn test_replace_selects_first_book() {
        let mut library = LibraryModel::new();
        library.replace_books(vec![book(1), book(2)]);
        assert!(library.loaded);
        assert_eq!(library.selected_book().map(|b| b.id), Some(1));
    }

    #[test]
    fn test_replace_keeps_selection_in_range() {
        let mut library = LibraryModel::new();
        library.replace_books(vec![book(1), book(2), book(3)]);
        library.select_last();
        library.replace_books(vec![book(1), book(2)]);
        assert_eq!(library.selected, Some(1));
    }

    #[test]
    fn test_replace_with_empty_clears_selection() {
        let mut library = LibraryModel::new();
        library.replace_books(vec![book(1)]);
        library.replace_books(vec![]);
        assert_eq!(library.selected, None);
        assert!(library.loaded);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut library = LibraryModel::new();
        library.replace_books(vec![book(1), book(2)]);
        library.select_next();
        library.select_next();
        assert_eq!(library.selected, Some(0));
        library.select_prev();
        assert_eq!(library.selected, Some(1));
    }

    #[test]
    fn test_get_by_id() {
        let mut library = LibraryModel::new();
        library.replace_books(vec![book(4), book(9)]);
        assert_eq!(library.get(9).map(|b| b.title.as_str()), Some("Book 9"));
        assert!(library.get(5).is_none());
    }
}
