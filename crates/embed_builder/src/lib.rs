//! Fluent construction helpers for [`models::Embed`].
//!
//! Each builder wraps one schema fragment and exposes chainable setters that validate
//! against the platform caps in [`limits`]. A failed validation never aborts the chain;
//! the offending mutation is dropped and the failure is recorded, to be collected from
//! the tuple returned by `finalize`.

pub mod author;
pub mod embed;
pub mod error;
pub mod field;
pub mod footer;
pub mod image;
pub mod limits;
pub mod provider;
pub mod thumbnail;
pub mod video;

pub use self::{
    author::AuthorBuilder,
    embed::EmbedBuilder,
    error::{BuilderError, ErrorSink},
    field::FieldBuilder,
    footer::FooterBuilder,
    image::ImageBuilder,
    provider::ProviderBuilder,
    thumbnail::ThumbnailBuilder,
    video::VideoBuilder,
};

#[inline]
fn has_valid_scheme(url: &str) -> bool {
    ["http://", "https://", "attachment://"].iter().any(|scheme| url.starts_with(scheme))
}
