use models::EmbedImage;
use smol_str::SmolStr;

use crate::error::{BuilderError, ErrorSink};

/// Builder for the embed's primary image.
#[derive(Default, Debug, Clone)]
pub struct ImageBuilder {
    image: EmbedImage,
    errors: ErrorSink,
}

impl ImageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the image URL if it carries an accepted scheme.
    pub fn set_url(&mut self, url: impl Into<SmolStr>) -> &mut Self {
        let url = url.into();

        if crate::has_valid_scheme(&url) {
            self.image.url = Some(url);
        } else {
            self.errors.push(BuilderError::InvalidUrlScheme { kind: "image url", url });
        }
        self
    }

    pub fn set_proxy_url(&mut self, proxy_url: impl Into<SmolStr>) -> &mut Self {
        self.image.proxy_url = Some(proxy_url.into());
        self
    }

    /// Sets the image height. Zero is rejected.
    pub fn set_height(&mut self, height: u32) -> &mut Self {
        if height > 0 {
            self.image.height = Some(height);
        } else {
            self.errors.push(BuilderError::ValueOutOfRange {
                kind: "image height",
                value: height as i64,
                min: 1,
                max: u32::MAX as i64,
            });
        }
        self
    }

    /// Sets the image width. Zero is rejected.
    pub fn set_width(&mut self, width: u32) -> &mut Self {
        if width > 0 {
            self.image.width = Some(width);
        } else {
            self.errors.push(BuilderError::ValueOutOfRange {
                kind: "image width",
                value: width as i64,
                min: 1,
                max: u32::MAX as i64,
            });
        }
        self
    }

    pub fn finalize(&mut self) -> (EmbedImage, Option<Vec<BuilderError>>) {
        (self.image.clone(), self.errors.take())
    }
}
