//! Formatting and display logic
//!
//! Pure functions turning book data into the strings the list cards show.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::{Book, BookStatus};

/// Placeholder shown instead of the list when the collection is empty
pub const EMPTY_LIBRARY_TEXT: &str = "No books yet.";

/// Cover marker for a card: the cover itself cannot be drawn in a terminal
pub fn cover_marker(book: &Book) -> &'static str {
    if book.image_url.is_some() {
        "[cover]"
    } else {
        "No Cover"
    }
}

/// Badge text for a status, e.g. "[In plan]"
pub fn status_badge(status: BookStatus) -> String {
    format!("[{}]", status.as_str())
}

/// Status-conditional info line of a card
///
/// # Examples
/// ```
/// use shelftui::api::{Book, BookStatus};
/// use shelftui::logic::formatting::status_info_line;
///
/// let mut book = Book {
///     id: 1,
///     title: "Dune".into(),
///     author: "Frank Herbert".into(),
///     status: BookStatus::Reading,
///     current_page: 150,
///     rating: 0,
///     image_url: None,
///     description: None,
/// };
/// assert_eq!(status_info_line(&book).as_deref(), Some("Page: 150"));
///
/// book.status = BookStatus::Finished;
/// book.rating = 8;
/// assert_eq!(status_info_line(&book).as_deref(), Some("Rating: 8/10"));
///
/// book.status = BookStatus::InPlan;
/// assert_eq!(status_info_line(&book), None);
/// ```
pub fn status_info_line(book: &Book) -> Option<String> {
    match book.status {
        BookStatus::Reading => Some(format!("Page: {}", book.current_page)),
        BookStatus::Finished => Some(format!("Rating: {}/10", book.rating)),
        BookStatus::InPlan => None,
    }
}

/// Author line; books added without an author get a placeholder
pub fn author_line(book: &Book) -> &str {
    if book.author.trim().is_empty() {
        "Unknown author"
    } else {
        &book.author
    }
}

/// Truncate to a display width, appending "…" when cut
///
/// # Examples
/// ```
/// use shelftui::logic::formatting::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Dune", 10), "Dune");
/// assert_eq!(truncate_to_width("The Left Hand of Darkness", 10), "The Left …");
/// ```
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        // Reserve one column for the ellipsis
        if width + w > max_width - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// Mask a secret for display
pub fn mask(text: &str) -> String {
    "*".repeat(text.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(status: BookStatus) -> Book {
        Book {
            id: 1,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            status,
            current_page: 150,
            rating: 8,
            image_url: None,
            description: None,
        }
    }

    #[test]
    fn test_reading_card_shows_page() {
        let line = status_info_line(&book(BookStatus::Reading)).unwrap();
        assert!(line.contains("150"));
    }

    #[test]
    fn test_finished_card_shows_rating_out_of_ten() {
        let line = status_info_line(&book(BookStatus::Finished)).unwrap();
        assert!(line.contains("8/10"));
    }

    #[test]
    fn test_cover_marker() {
        let mut b = book(BookStatus::InPlan);
        assert_eq!(cover_marker(&b), "No Cover");
        b.image_url = Some("http://img".to_string());
        assert_eq!(cover_marker(&b), "[cover]");
    }

    #[test]
    fn test_status_badge() {
        assert_eq!(status_badge(BookStatus::InPlan), "[In plan]");
    }

    #[test]
    fn test_author_placeholder() {
        let mut b = book(BookStatus::InPlan);
        b.author = "  ".to_string();
        assert_eq!(author_line(&b), "Unknown author");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char is two columns wide
        assert_eq!(truncate_to_width("三体三体", 5), "三体…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_mask() {
        assert_eq!(mask("Secret1"), "*******");
        assert_eq!(mask(""), "");
    }
}
