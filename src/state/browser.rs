use tracing::{debug, error, info};

use super::data::{Character, CharacterPage};
use super::filter::{self, FilterToggleMap};
use crate::api::FetchError;

/// Everything the character screen knows about its data.
///
/// Owned by the application and mutated only from `update`. The filtered
/// view is rebuilt after every change to the characters or a toggle map.
#[derive(Debug, Default)]
pub struct BrowserState {
    /// Fetched characters, `None` until the first successful fetch
    characters: Option<Vec<Character>>,
    status_filters: FilterToggleMap,
    location_filters: FilterToggleMap,
    filtered: Vec<Character>,
}

impl BrowserState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle the outcome of the character fetch.
    ///
    /// On failure the error is logged and the current state is kept as is.
    /// Returns true when new characters were stored.
    pub fn receive(&mut self, result: Result<CharacterPage, FetchError>) -> bool {
        match result {
            Ok(page) => {
                if let Some(info) = &page.info {
                    info!(
                        "📊 API reports {} characters over {} pages (pagination not followed)",
                        info.count, info.pages
                    );
                }
                self.set_characters(page.results);
                true
            }
            Err(err) => {
                error!("Error fetching characters: {}", err);
                false
            }
        }
    }

    /// Replace the source characters, rebuilding both toggle maps
    pub fn set_characters(&mut self, characters: Vec<Character>) {
        self.status_filters = filter::status_options(&characters);
        self.location_filters = filter::location_options(&characters);
        debug!(
            statuses = self.status_filters.len(),
            locations = self.location_filters.len(),
            "derived filter options"
        );
        self.characters = Some(characters);
        self.refresh();
    }

    pub fn toggle_status(&mut self, status: &str) -> Option<bool> {
        let selected = self.status_filters.toggle(status)?;
        debug!(status, selected, "status filter toggled");
        self.refresh();
        Some(selected)
    }

    pub fn toggle_location(&mut self, location: &str) -> Option<bool> {
        let selected = self.location_filters.toggle(location)?;
        debug!(location, selected, "location filter toggled");
        self.refresh();
        Some(selected)
    }

    fn refresh(&mut self) {
        if let Some(characters) = &self.characters {
            self.filtered =
                filter::apply_filters(characters, &self.status_filters, &self.location_filters);
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.characters.is_some()
    }

    pub fn characters(&self) -> &[Character] {
        self.characters.as_deref().unwrap_or_default()
    }

    pub fn filtered(&self) -> &[Character] {
        &self.filtered
    }

    pub fn status_filters(&self) -> &FilterToggleMap {
        &self.status_filters
    }

    pub fn location_filters(&self) -> &FilterToggleMap {
        &self.location_filters
    }
}
