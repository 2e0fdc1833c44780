/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures decoded from the API (data.rs)
/// - Filter option derivation and filter application (filter.rs)
/// - The screen state that owns characters and toggles (browser.rs)

pub mod browser;
pub mod data;
pub mod filter;
