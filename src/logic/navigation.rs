//! Selection logic
//!
//! Pure functions for moving a selection through the book list and through
//! the focusable fields of a form, wrapping at both ends.

/// Calculate the next selection index with wrapping
///
/// Advances to the next item, wrapping to the first one at the end.
/// With no current selection the first item is selected.
///
/// # Examples
/// ```
/// use shelftui::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i + 1 >= list_len => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous selection index with wrapping
///
/// Moves to the previous item, wrapping to the last one at the start.
/// With no current selection (or one past the end) the last item is selected.
///
/// # Examples
/// ```
/// use shelftui::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(2), 3), Some(1));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1,
        Some(i) if i >= list_len => list_len - 1,
        Some(i) => i - 1,
    })
}

/// Keep a selection valid after the list was replaced
///
/// The index is kept when still in range, pulled back to the last item when
/// the list shrank, and the first item is selected when nothing was.
pub fn retain_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) => i.min(list_len - 1),
        None => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_selection_empty_list() {
        assert_eq!(next_selection(None, 0), None);
        assert_eq!(next_selection(Some(3), 0), None);
    }

    #[test]
    fn test_next_selection_wrapping() {
        assert_eq!(next_selection(Some(0), 3), Some(1));
        assert_eq!(next_selection(Some(2), 3), Some(0));
        assert_eq!(next_selection(Some(0), 1), Some(0));
    }

    #[test]
    fn test_prev_selection_wrapping() {
        assert_eq!(prev_selection(Some(1), 3), Some(0));
        assert_eq!(prev_selection(Some(0), 3), Some(2));
        assert_eq!(prev_selection(Some(0), 1), Some(0));
    }

    #[test]
    fn test_selection_out_of_bounds() {
        assert_eq!(next_selection(Some(10), 3), Some(0));
        assert_eq!(prev_selection(Some(10), 3), Some(2));
    }

    #[test]
    fn test_retain_selection() {
        assert_eq!(retain_selection(None, 0), None);
        assert_eq!(retain_selection(Some(2), 0), None);
        assert_eq!(retain_selection(None, 4), Some(0));
        assert_eq!(retain_selection(Some(2), 4), Some(2));
        // List shrank after a delete
        assert_eq!(retain_selection(Some(4), 2), Some(1));
    }
}
