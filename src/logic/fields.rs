//! Status-dependent field visibility for the detail modal

use crate::api::BookStatus;

/// Which contextual inputs the detail modal shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldVisibility {
    pub current_page: bool,
    pub rating: bool,
}

/// The page input only matters while reading, the rating only once finished
///
/// # Examples
/// ```
/// use shelftui::api::BookStatus;
/// use shelftui::logic::fields::field_visibility;
///
/// assert!(field_visibility(BookStatus::Reading).current_page);
/// assert!(!field_visibility(BookStatus::Reading).rating);
/// assert!(field_visibility(BookStatus::Finished).rating);
/// ```
pub fn field_visibility(status: BookStatus) -> FieldVisibility {
    FieldVisibility {
        current_page: status == BookStatus::Reading,
        rating: status == BookStatus::Finished,
    }
}
