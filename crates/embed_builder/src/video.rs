use models::EmbedVideo;
use smol_str::SmolStr;

use crate::error::{BuilderError, ErrorSink};

/// Builder for the embed's video. Videos have no proxied URL.
#[derive(Default, Debug, Clone)]
pub struct VideoBuilder {
    video: EmbedVideo,
    errors: ErrorSink,
}

impl VideoBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the video URL if it carries an accepted scheme.
    pub fn set_url(&mut self, url: impl Into<SmolStr>) -> &mut Self {
        let url = url.into();

        if crate::has_valid_scheme(&url) {
            self.video.url = Some(url);
        } else {
            self.errors.push(BuilderError::InvalidUrlScheme { kind: "video url", url });
        }
        self
    }

    /// Sets the video height. Zero is rejected.
    pub fn set_height(&mut self, height: u32) -> &mut Self {
        if height > 0 {
            self.video.height = Some(height);
        } else {
            self.errors.push(BuilderError::ValueOutOfRange {
                kind: "video height",
                value: height as i64,
                min: 1,
                max: u32::MAX as i64,
            });
        }
        self
    }

    /// Sets the video width. Zero is rejected.
    pub fn set_width(&mut self, width: u32) -> &mut Self {
        if width > 0 {
            self.video.width = Some(width);
        } else {
            self.errors.push(BuilderError::ValueOutOfRange {
                kind: "video width",
                value: width as i64,
                min: 1,
                max: u32::MAX as i64,
            });
        }
        self
    }

    pub fn finalize(&mut self) -> (EmbedVideo, Option<Vec<BuilderError>>) {
        (self.video.clone(), self.errors.take())
    }
}
