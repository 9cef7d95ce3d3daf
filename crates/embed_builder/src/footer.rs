use models::EmbedFooter;
use smol_str::SmolStr;

use crate::error::{BuilderError, ErrorSink};
use crate::limits::FOOTER_TEXT_LIMIT;

/// Builder for the embed's footer line.
#[derive(Default, Debug, Clone)]
pub struct FooterBuilder {
    footer: EmbedFooter,
    errors: ErrorSink,
}

impl FooterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the footer text unless it exceeds [`FOOTER_TEXT_LIMIT`] characters. The
    /// rejected text is not echoed into the error.
    pub fn set_text(&mut self, text: impl Into<SmolStr>) -> &mut Self {
        let text = text.into();
        let len = text.chars().count();

        if len <= FOOTER_TEXT_LIMIT {
            self.footer.text = text;
        } else {
            self.errors.push(BuilderError::TextTooLong {
                kind: "footer text",
                limit: FOOTER_TEXT_LIMIT,
                len,
                value: None,
            });
        }
        self
    }

    /// Sets the footer's icon URL if it carries an accepted scheme.
    pub fn set_icon_url(&mut self, icon_url: impl Into<SmolStr>) -> &mut Self {
        let icon_url = icon_url.into();

        if crate::has_valid_scheme(&icon_url) {
            self.footer.icon_url = Some(icon_url);
        } else {
            self.errors.push(BuilderError::InvalidUrlScheme {
                kind: "footer icon url",
                url: icon_url,
            });
        }
        self
    }

    pub fn set_proxy_icon_url(&mut self, proxy_icon_url: impl Into<SmolStr>) -> &mut Self {
        self.footer.proxy_icon_url = Some(proxy_icon_url.into());
        self
    }

    pub fn finalize(&mut self) -> (EmbedFooter, Option<Vec<BuilderError>>) {
        (self.footer.clone(), self.errors.take())
    }
}
