//! Preview image references
//!
//! The backend hands back either a `data:` URL with an embedded image or a
//! plain URL. Embedded images can be written to disk; URLs are shown as-is.

use base64::{Engine as _, engine::general_purpose};

use crate::error::{ApiError, Result};

/// Decoded preview image reference
#[derive(Debug, Clone, PartialEq)]
pub enum ImageRef {
    /// Image bytes embedded in a base64 data URL
    Embedded { mime: String, bytes: Vec<u8> },
    /// Anything else: a URL to open elsewhere
    Link(String),
}

impl ImageRef {
    /// Interpret the opaque reference returned by the backend
    pub fn parse(reference: &str) -> Result<Self> {
        let Some(rest) = reference.strip_prefix("data:") else {
            return Ok(ImageRef::Link(reference.to_string()));
        };

        let (header, payload) = rest.split_once(',').ok_or_else(|| {
            ApiError::InvalidResponse("Malformed data URL in preview image".to_string())
        })?;

        let Some(mime) = header.strip_suffix(";base64") else {
            return Ok(ImageRef::Link(reference.to_string()));
        };

        let bytes = general_purpose::STANDARD
            .decode(payload.trim())
            .map_err(|e| ApiError::InvalidResponse(format!("Invalid preview image: {}", e)))?;

        Ok(ImageRef::Embedded {
            mime: mime.to_string(),
            bytes,
        })
    }

    /// File extension matching the embedded MIME type
    pub fn extension(&self) -> &'static str {
        match self {
            ImageRef::Embedded { mime, .. } => match mime.as_str() {
                "image/jpeg" | "image/jpg" => "jpg",
                "image/webp" => "webp",
                "image/gif" => "gif",
                "image/svg+xml" => "svg",
                _ => "png",
            },
            ImageRef::Link(_) => "txt",
        }
    }
}
