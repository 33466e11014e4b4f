//! Shelf TUI Library
//!
//! Terminal client for a personal book-tracking server. Exposes modules
//! for the binary and for testing.

pub mod api;
pub mod app;
pub mod config;
pub mod handlers;
pub mod logic;
pub mod model;
pub mod services;
pub mod ui;
pub mod utils;
