/// Status and location filters
///
/// Filter options are derived from the fetched characters. Each distinct
/// value gets a checkbox toggle that starts unselected. The filtered view is
/// always recomputed from scratch out of the source list and both toggle maps.

use std::collections::{BTreeMap, HashSet};

use super::data::Character;

/// Mapping from a distinct field value to its "selected" flag
///
/// Keys come from the data at runtime, so this is a map and not a record.
/// Iteration is alphabetical; callers must not depend on that order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterToggleMap {
    toggles: BTreeMap<String, bool>,
}

impl FilterToggleMap {
    /// Build a fresh map with every distinct value unselected
    pub fn derive<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut toggles = BTreeMap::new();
        for value in values {
            toggles.entry(value.to_owned()).or_insert(false);
        }
        Self { toggles }
    }

    /// Flip one key and return its new value
    ///
    /// Unknown keys are left alone and yield `None`.
    pub fn toggle(&mut self, key: &str) -> Option<bool> {
        let selected = self.toggles.get_mut(key)?;
        *selected = !*selected;
        Some(*selected)
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.toggles.get(key).copied().unwrap_or(false)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.toggles.contains_key(key)
    }

    /// All options with their current flag
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.toggles.iter().map(|(key, selected)| (key.as_str(), *selected))
    }

    /// Keys currently set to true
    pub fn active(&self) -> HashSet<&str> {
        self.iter()
            .filter_map(|(key, selected)| selected.then_some(key))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.toggles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toggles.is_empty()
    }
}

/// Distinct status values, all unselected
pub fn status_options(characters: &[Character]) -> FilterToggleMap {
    FilterToggleMap::derive(characters.iter().map(|c| c.status.as_str()))
}

/// Distinct location names, all unselected
pub fn location_options(characters: &[Character]) -> FilterToggleMap {
    FilterToggleMap::derive(characters.iter().map(|c| c.location.name.as_str()))
}

/// Compute the filtered view
///
/// A filter with no active keys lets everything through. The status filter
/// and the location filter must both pass. Source order is kept.
pub fn apply_filters(
    characters: &[Character],
    statuses: &FilterToggleMap,
    locations: &FilterToggleMap,
) -> Vec<Character> {
    let active_statuses = statuses.active();
    let active_locations = locations.active();

    characters
        .iter()
        .filter(|c| admits(&active_statuses, &c.status))
        .filter(|c| admits(&active_locations, &c.location.name))
        .cloned()
        .collect()
}

fn admits(active: &HashSet<&str>, value: &str) -> bool {
    active.is_empty() || active.contains(value)
}
