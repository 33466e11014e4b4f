//! Client-side input validation
//!
//! The server re-validates everything; these checks only stop requests that
//! are certain to be rejected and keep numeric inputs inside their ranges.

use thiserror::Error;

use crate::api::{Credentials, NewBook, Registration};

/// Highest page the page input accepts
pub const MAX_PAGE: u32 = 300;

/// Highest rating the rating input accepts
pub const MAX_RATING: u32 = 10;

/// Rejections shown to the user as an alert; the message is the alert text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a title!")]
    EmptyTitle,

    #[error("Please use a valid @gmail.com address.")]
    NonGmailEmail,

    #[error("Please enter a username!")]
    EmptyUsername,
}

/// Normalize a numeric input after an input event
///
/// Non-digits are dropped, leading zeros removed and the value clamped to
/// `max`. An empty input stays empty (and reads as 0).
///
/// # Examples
/// ```
/// use shelftui::logic::validation::clamp_numeric_input;
///
/// assert_eq!(clamp_numeric_input("150", 300), "150");
/// assert_eq!(clamp_numeric_input("3001", 300), "300");
/// assert_eq!(clamp_numeric_input("007", 300), "7");
/// assert_eq!(clamp_numeric_input("", 300), "");
/// ```
pub fn clamp_numeric_input(text: &str, max: u32) -> String {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return String::new();
    }

    // Anything too long for u64 is certainly above max
    let value = digits.parse::<u64>().unwrap_or(u64::MAX);
    value.min(max as u64).to_string()
}

/// Read a numeric input; empty reads as 0
pub fn numeric_value(text: &str, max: u32) -> u32 {
    clamp_numeric_input(text, max).parse().unwrap_or(0)
}

/// Build the add-book request body, rejecting blank titles
pub fn validate_new_book(title: &str, author: &str) -> Result<NewBook, ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    Ok(NewBook {
        title: title.to_string(),
        author: author.trim().to_string(),
    })
}

/// Only @gmail.com addresses are accepted by the server
pub fn is_gmail_address(email: &str) -> bool {
    email.ends_with("@gmail.com")
}

/// Build the registration body; the email domain is the only local check
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<Registration, ValidationError> {
    if !is_gmail_address(email) {
        return Err(ValidationError::NonGmailEmail);
    }

    Ok(Registration {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        confirm_password: confirm_password.to_string(),
    })
}

pub fn validate_credentials(username: &str, password: &str) -> Result<Credentials, ValidationError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(ValidationError::EmptyUsername);
    }

    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}
