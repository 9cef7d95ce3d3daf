use models::EmbedProvider;
use smol_str::SmolStr;

use crate::error::{BuilderError, ErrorSink};

/// Builder for the embed's provider block. Providers are set by the platform when it
/// unfurls a link; neither field is validated here, but the builder keeps the uniform
/// finalize shape.
#[derive(Default, Debug, Clone)]
pub struct ProviderBuilder {
    provider: EmbedProvider,
    errors: ErrorSink,
}

impl ProviderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<SmolStr>) -> &mut Self {
        self.provider.name = Some(name.into());
        self
    }

    pub fn set_url(&mut self, url: impl Into<SmolStr>) -> &mut Self {
        self.provider.url = Some(url.into());
        self
    }

    pub fn finalize(&mut self) -> (EmbedProvider, Option<Vec<BuilderError>>) {
        (self.provider.clone(), self.errors.take())
    }
}
