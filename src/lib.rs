//! PocketBrowser, the state core of a mobile tabbed browser.
//!
//! Owns tab, bookmark, history and settings state with JSON persistence;
//! page rendering and networking live in the platform web-view, which feeds
//! navigation metadata back through tab updates. This library crate exposes
//! all modules for use by the UI shell and integration tests.

pub mod app;
pub mod services;
pub mod stores;
pub mod types;
pub mod utils;
