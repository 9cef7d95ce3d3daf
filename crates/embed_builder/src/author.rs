use models::EmbedAuthor;
use smol_str::SmolStr;

use crate::error::{BuilderError, ErrorSink};
use crate::limits::AUTHOR_NAME_LIMIT;

/// Builder for the embed's author block.
#[derive(Default, Debug, Clone)]
pub struct AuthorBuilder {
    author: EmbedAuthor,
    errors: ErrorSink,
}

impl AuthorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the author's name unless it exceeds [`AUTHOR_NAME_LIMIT`] characters.
    pub fn set_name(&mut self, name: impl Into<SmolStr>) -> &mut Self {
        let name = name.into();
        let len = name.chars().count();

        if len <= AUTHOR_NAME_LIMIT {
            self.author.name = Some(name);
        } else {
            self.errors.push(BuilderError::TextTooLong {
                kind: "author name",
                limit: AUTHOR_NAME_LIMIT,
                len,
                value: Some(name),
            });
        }
        self
    }

    /// Sets the author's link URL. Not validated.
    pub fn set_url(&mut self, url: impl Into<SmolStr>) -> &mut Self {
        self.author.url = Some(url.into());
        self
    }

    /// Sets the author's icon URL if it carries an accepted scheme.
    pub fn set_icon_url(&mut self, icon_url: impl Into<SmolStr>) -> &mut Self {
        let icon_url = icon_url.into();

        if crate::has_valid_scheme(&icon_url) {
            self.author.icon_url = Some(icon_url);
        } else {
            self.errors.push(BuilderError::InvalidUrlScheme {
                kind: "author icon url",
                url: icon_url,
            });
        }
        self
    }

    /// Proxied icon URLs come back from the platform already validated.
    pub fn set_proxy_icon_url(&mut self, proxy_icon_url: impl Into<SmolStr>) -> &mut Self {
        self.author.proxy_icon_url = Some(proxy_icon_url.into());
        self
    }

    pub fn finalize(&mut self) -> (EmbedAuthor, Option<Vec<BuilderError>>) {
        (self.author.clone(), self.errors.take())
    }
}
