use thiserror::Error;

/// Errors raised while talking to the character API
///
/// Messages carry the underlying error text rather than the error itself
/// so the value stays `Clone` and can ride along in UI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport failure: DNS, connect, TLS, invalid URL...
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status code
    #[error("server responded with HTTP {0}")]
    Status(u16),

    /// The body was not the JSON shape we expect
    #[error("could not decode response body: {0}")]
    Decode(String),

    /// The avatar bytes could not be decoded as an image
    #[error("could not decode image: {0}")]
    Image(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

impl From<image::ImageError> for FetchError {
    fn from(err: image::ImageError) -> Self {
        FetchError::Image(err.to_string())
    }
}
