/// Avatar thumbnails for the character cards
///
/// Downloads the image behind a character's `image` URL, decodes it off the
/// UI thread and scales it to a square thumbnail ready for display.

use image::imageops::FilterType;
use reqwest::Client;

use super::FetchError;

/// Edge length of generated avatar thumbnails (square)
pub const AVATAR_SIZE: u32 = 120;

/// Decoded RGBA thumbnail
#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    pub width: u32,
    pub height: u32,
    /// RGBA8 pixels, row-major
    pub pixels: Vec<u8>,
}

/// Download and decode an avatar
pub async fn fetch_avatar(client: Client, url: String) -> Result<Avatar, FetchError> {
    let bytes = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    // Decoding and resizing is CPU-bound
    tokio::task::spawn_blocking(move || decode_avatar(&bytes))
        .await
        .map_err(|e| FetchError::Image(format!("Task join error: {}", e)))?
}

/// Decode image bytes and crop-resize them to `AVATAR_SIZE`
pub fn decode_avatar(bytes: &[u8]) -> Result<Avatar, FetchError> {
    let img = image::load_from_memory(bytes)?;

    let thumbnail = img
        .resize_to_fill(AVATAR_SIZE, AVATAR_SIZE, FilterType::Lanczos3)
        .to_rgba8();
    let (width, height) = thumbnail.dimensions();

    Ok(Avatar {
        width,
        height,
        pixels: thumbnail.into_raw(),
    })
}
