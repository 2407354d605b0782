//! Resolving a photo reference into upload bytes.
//!
//! A draft's photo is one of:
//!
//! - an `http://` or `https://` URL (a generated avatar), downloaded with the
//!   client's own `reqwest::Client`;
//! - a `file://` URI or a plain filesystem path (a camera capture), read from
//!   disk.

use std::path::PathBuf;

use crate::error::ApiError;

pub const PHOTO_FILE_NAME: &str = "profile.jpg";
pub const PHOTO_MIME: &str = "image/jpeg";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhotoSource {
    Remote(String),
    Local(PathBuf),
}

impl PhotoSource {
    pub fn parse(reference: &str) -> Self {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            PhotoSource::Remote(reference.to_string())
        } else if let Some(path) = reference.strip_prefix("file://") {
            PhotoSource::Local(PathBuf::from(path))
        } else {
            PhotoSource::Local(PathBuf::from(reference))
        }
    }
}

pub async fn load_photo(http: &reqwest::Client, reference: &str) -> Result<Vec<u8>, ApiError> {
    let photo_err = |reason: String| ApiError::Photo {
        reference: reference.to_string(),
        reason,
    };

    match PhotoSource::parse(reference) {
        PhotoSource::Remote(url) => {
            let response = http
                .get(&url)
                .send()
                .await
                .map_err(|e| photo_err(e.to_string()))?;
            if !response.status().is_success() {
                return Err(photo_err(format!("status {}", response.status())));
            }
            let bytes = response
                .bytes()
                .await
                .map_err(|e| photo_err(e.to_string()))?;
            Ok(bytes.to_vec())
        }
        PhotoSource::Local(path) => tokio::fs::read(&path)
            .await
            .map_err(|e| photo_err(e.to_string())),
    }
}
