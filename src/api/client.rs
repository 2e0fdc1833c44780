use reqwest::Client;
use tracing::info;

use super::FetchError;
use crate::state::data::CharacterPage;

/// Character listing endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str = "https://rickandmortyapi.com/api/character";

/// Fetch the first page of characters.
///
/// A single best-effort attempt: no timeout, no retry, no pagination.
/// Takes owned arguments so the future can run as an iced task.
pub async fn fetch_characters(client: Client, endpoint: String) -> Result<CharacterPage, FetchError> {
    info!("📡 Fetching characters from {}", endpoint);

    let page = client
        .get(&endpoint)
        .send()
        .await?
        .error_for_status()?
        .json::<CharacterPage>()
        .await?;

    info!(
        "✅ Fetched {} characters at {}",
        page.results.len(),
        chrono::Local::now().format("%H:%M:%S")
    );

    Ok(page)
}
