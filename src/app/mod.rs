//! Model Operations
//!
//! The user-facing operations, kept as `impl Model` but grouped by domain.
//! Each one changes the model and returns the `ApiRequest`s to send:
//! - books: list, details, edit, status, delete, add
//! - account: register, login, session check, logout

mod account;
mod books;
