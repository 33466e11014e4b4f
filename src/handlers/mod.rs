//! Event Handlers
//!
//! This module contains handlers for the two kinds of events the loop sees:
//! - keyboard: User keyboard input
//! - api: API responses from the background service
//!
//! Handlers are pure over the Model: they mutate it and return the
//! `ApiRequest`s the runtime should send next.

pub mod api;
pub mod keyboard;

// Re-export for convenience
pub use api::handle_api_response;
pub use keyboard::handle_key;
