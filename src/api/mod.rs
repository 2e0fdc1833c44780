/// Network access
///
/// This module handles:
/// - Fetching the character list (client.rs)
/// - Downloading and decoding avatar thumbnails (avatar.rs)
/// - Typed errors for both (error.rs)

pub mod avatar;
pub mod client;
mod error;

#[cfg(test)]
mod test_server;

pub use error::FetchError;
