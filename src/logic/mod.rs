//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: How failed requests are reported to the user
//! - fields: Status-dependent visibility of detail inputs
//! - flash: Flash message lifecycle timing
//! - formatting: Card text for books
//! - navigation: Selection wrapping for lists and form fields
//! - validation: Client-side input checks and numeric clamping

pub mod errors;
pub mod fields;
pub mod flash;
pub mod formatting;
pub mod navigation;
pub mod validation;
