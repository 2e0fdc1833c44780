/// Shared data structures for the application state
///
/// These structs mirror the JSON returned by the character API and
/// flow unchanged from the api layer into the filter state and the UI.

use serde::{Deserialize, Deserializer};

/// Represents a single character fetched from the API
///
/// Every field falls back to its default when missing or null in the payload,
/// so partially-populated records still render (with blank values).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Character {
    /// Unique, stable API ID
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    /// Display name (e.g., "Rick Sanchez")
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Status label: "Alive", "Dead", "unknown", ...
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    /// Species label (e.g., "Human")
    #[serde(deserialize_with = "null_as_default")]
    pub species: String,
    /// Last known location
    #[serde(deserialize_with = "null_as_default")]
    pub location: Location,
    /// URL of the avatar image
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
}

/// A location reference: name plus API locator
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// Read an explicit `null` the same way as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Page metadata sent alongside the results
///
/// Only logged; pagination is never followed.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    /// Total characters known to the API
    pub count: u64,
    /// Total number of pages
    pub pages: u64,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// Body of `GET /api/character`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CharacterPage {
    #[serde(default)]
    pub info: Option<PageInfo>,
    pub results: Vec<Character>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_api_page() {
        let json = r#"{
            "info": {"count": 826, "pages": 42, "next": "https://rickandmortyapi.com/api/character?page=2", "prev": null},
            "results": [{
                "id": 1,
                "name": "Rick Sanchez",
                "status": "Alive",
                "species": "Human",
                "type": "",
                "gender": "Male",
                "location": {"name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3"},
                "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg"
            }]
        }"#;

        let page: CharacterPage = serde_json::from_str(json).unwrap();

        let info = page.info.unwrap();
        assert_eq!(info.count, 826);
        assert_eq!(info.pages, 42);
        assert!(info.prev.is_none());

        assert_eq!(page.results.len(), 1);
        let rick = &page.results[0];
        assert_eq!(rick.id, 1);
        assert_eq!(rick.status, "Alive");
        assert_eq!(rick.location.name, "Citadel of Ricks");
    }

    #[test]
    fn test_missing_fields_become_blank() {
        let json = r#"{"results": [{"id": 7, "name": "Abradolf Lincler"}]}"#;

        let page: CharacterPage = serde_json::from_str(json).unwrap();

        assert!(page.info.is_none());
        let character = &page.results[0];
        assert_eq!(character.name, "Abradolf Lincler");
        assert_eq!(character.status, "");
        assert_eq!(character.location, Location::default());
        assert_eq!(character.image, "");
    }

    #[test]
    fn test_null_fields_become_blank() {
        let json = r#"{"results": [
            {"id": 1, "name": "Rick Sanchez", "status": null, "species": null,
             "location": {"name": null, "url": null}, "image": null},
            {"id": 2, "name": "Morty Smith", "status": "Alive", "species": "Human",
             "location": null, "image": "https://rickandmortyapi.com/api/character/avatar/2.jpeg"},
            {"id": null, "name": null, "status": "Dead"}
        ]}"#;

        let page: CharacterPage = serde_json::from_str(json).unwrap();

        assert_eq!(page.results.len(), 3);
        let rick = &page.results[0];
        assert_eq!(rick.name, "Rick Sanchez");
        assert_eq!(rick.status, "");
        assert_eq!(rick.species, "");
        assert_eq!(rick.location, Location::default());
        assert_eq!(rick.image, "");

        let morty = &page.results[1];
        assert_eq!(morty.status, "Alive");
        assert_eq!(morty.location, Location::default());

        let unnamed = &page.results[2];
        assert_eq!(unnamed.id, 0);
        assert_eq!(unnamed.name, "");
        assert_eq!(unnamed.status, "Dead");
    }

    #[test]
    fn test_results_are_required() {
        let result: Result<CharacterPage, _> = serde_json::from_str(r#"{"error": "nope"}"#);
        assert!(result.is_err());
    }
}
