//! Encoded image payload framing

use thiserror::Error;

/// Media type assumed when the payload carries no data-URI prefix.
pub const DEFAULT_MEDIA_TYPE: &str = "image/jpeg";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("Image payload is empty")]
    EmptyPayload,
}

/// An encoded raster image plus its media type (Value Object)
///
/// Only the string framing is inspected, never the image content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    media_type: String,
    /// Base64-encoded payload, without the data-URI prefix.
    data: String,
}

impl ImagePayload {
    pub fn new(
        media_type: impl Into<String>,
        data: impl Into<String>,
    ) -> Result<Self, ImageError> {
        let data = data.into();
        if data.trim().is_empty() {
            return Err(ImageError::EmptyPayload);
        }
        Ok(Self {
            media_type: media_type.into(),
            data,
        })
    }

    /// Parse `data:<mediaType>;base64,<payload>` framing.
    ///
    /// A string without the self-describing prefix is treated as a bare
    /// payload with [`DEFAULT_MEDIA_TYPE`].
    pub fn from_data_uri(s: &str) -> Result<Self, ImageError> {
        if let Some(rest) = s.strip_prefix("data:")
            && let Some((media_type, payload)) = rest.split_once(";base64,")
        {
            let media_type = if media_type.is_empty() {
                DEFAULT_MEDIA_TYPE
            } else {
                media_type
            };
            return Self::new(media_type, payload);
        }
        Self::new(DEFAULT_MEDIA_TYPE, s)
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_data_uri() {
        let image = ImagePayload::from_data_uri("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(image.media_type(), "image/png");
        assert_eq!(image.data(), "iVBORw0KGgo=");
    }

    #[test]
    fn test_bare_payload_gets_default_media_type() {
        let image = ImagePayload::from_data_uri("/9j/4AAQSkZJRg==").unwrap();
        assert_eq!(image.media_type(), DEFAULT_MEDIA_TYPE);
        assert_eq!(image.data(), "/9j/4AAQSkZJRg==");
    }

    #[test]
    fn test_empty_payload_rejected() {
        assert_eq!(
            ImagePayload::from_data_uri(""),
            Err(ImageError::EmptyPayload)
        );
        assert_eq!(
            ImagePayload::from_data_uri("data:image/png;base64,"),
            Err(ImageError::EmptyPayload)
        );
    }

    #[test]
    fn test_data_uri_roundtrip() {
        let uri = "data:image/webp;base64,UklGRg==";
        let image = ImagePayload::from_data_uri(uri).unwrap();
        assert_eq!(image.to_data_uri(), uri);
    }

    #[test]
    fn test_data_prefix_without_base64_marker_is_bare_payload() {
        // No ";base64," framing, so the whole string is the payload
        let image = ImagePayload::from_data_uri("data:image/png,rawbytes").unwrap();
        assert_eq!(image.media_type(), DEFAULT_MEDIA_TYPE);
        assert_eq!(image.data(), "data:image/png,rawbytes");
    }
}
