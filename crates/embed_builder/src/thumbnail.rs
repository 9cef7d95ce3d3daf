use models::EmbedThumbnail;
use smol_str::SmolStr;

use crate::error::{BuilderError, ErrorSink};

/// Builder for the embed's thumbnail.
#[derive(Default, Debug, Clone)]
pub struct ThumbnailBuilder {
    thumbnail: EmbedThumbnail,
    errors: ErrorSink,
}

impl ThumbnailBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the thumbnail URL if it carries an accepted scheme.
    pub fn set_url(&mut self, url: impl Into<SmolStr>) -> &mut Self {
        let url = url.into();

        if crate::has_valid_scheme(&url) {
            self.thumbnail.url = Some(url);
        } else {
            self.errors.push(BuilderError::InvalidUrlScheme { kind: "thumbnail url", url });
        }
        self
    }

    pub fn set_proxy_url(&mut self, proxy_url: impl Into<SmolStr>) -> &mut Self {
        self.thumbnail.proxy_url = Some(proxy_url.into());
        self
    }

    /// Sets the thumbnail height. Zero is rejected.
    pub fn set_height(&mut self, height: u32) -> &mut Self {
        if height > 0 {
            self.thumbnail.height = Some(height);
        } else {
            self.errors.push(BuilderError::ValueOutOfRange {
                kind: "thumbnail height",
                value: height as i64,
                min: 1,
                max: u32::MAX as i64,
            });
        }
        self
    }

    /// Sets the thumbnail width. Zero is rejected.
    pub fn set_width(&mut self, width: u32) -> &mut Self {
        if width > 0 {
            self.thumbnail.width = Some(width);
        } else {
            self.errors.push(BuilderError::ValueOutOfRange {
                kind: "thumbnail width",
                value: width as i64,
                min: 1,
                max: u32::MAX as i64,
            });
        }
        self
    }

    pub fn finalize(&mut self) -> (EmbedThumbnail, Option<Vec<BuilderError>>) {
        (self.thumbnail.clone(), self.errors.take())
    }
}
