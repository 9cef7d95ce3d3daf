use models::{
    Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedImage, EmbedProvider, EmbedThumbnail, EmbedType,
    EmbedVideo,
};
use smol_str::SmolStr;
use timestamp::Timestamp;

use crate::error::{BuilderError, ErrorSink};
use crate::limits::{DESCRIPTION_LIMIT, MAX_COLOR, MAX_FIELD_COUNT, TITLE_LIMIT};
use crate::{AuthorBuilder, FieldBuilder, FooterBuilder, ImageBuilder, ProviderBuilder, ThumbnailBuilder, VideoBuilder};

/// Fluent decorator over [`Embed`].
///
/// Every setter mutates the wrapped embed in place and returns `&mut Self`, so calls
/// chain without intermediate error checks:
///
/// ```
/// use embed_builder::EmbedBuilder;
///
/// let (embed, errors) = EmbedBuilder::new()
///     .set_title("example")
///     .set_description("test")
///     .set_url("https://example.com")
///     .finalize();
///
/// assert!(errors.is_none());
/// assert_eq!(embed.title.as_deref(), Some("example"));
/// ```
///
/// A mutation that violates a platform cap is dropped and recorded instead of applied;
/// the accumulated failures come back from [`finalize`](EmbedBuilder::finalize).
#[derive(Default, Debug, Clone)]
pub struct EmbedBuilder {
    embed: Embed,
    errors: ErrorSink,
}

impl EmbedBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title unless it exceeds [`TITLE_LIMIT`] characters.
    pub fn set_title(&mut self, title: impl Into<SmolStr>) -> &mut Self {
        let title = title.into();
        let len = title.chars().count();

        if len <= TITLE_LIMIT {
            self.embed.title = Some(title);
        } else {
            self.errors.push(BuilderError::TextTooLong {
                kind: "embed title",
                limit: TITLE_LIMIT,
                len,
                value: Some(title),
            });
        }
        self
    }

    /// Sets the description unless it exceeds [`DESCRIPTION_LIMIT`] characters. The
    /// rejected text is not echoed into the error.
    pub fn set_description(&mut self, desc: impl Into<SmolStr>) -> &mut Self {
        let desc = desc.into();
        let len = desc.chars().count();

        if len <= DESCRIPTION_LIMIT {
            self.embed.description = Some(desc);
        } else {
            self.errors.push(BuilderError::TextTooLong {
                kind: "embed description",
                limit: DESCRIPTION_LIMIT,
                len,
                value: None,
            });
        }
        self
    }

    /// Sets the embed's main URL. Not validated.
    pub fn set_url(&mut self, url: impl Into<SmolStr>) -> &mut Self {
        self.embed.url = Some(url.into());
        self
    }

    /// Sets the accent color if it lies in `0..MAX_COLOR`.
    pub fn set_color(&mut self, color: i32) -> &mut Self {
        if (0..MAX_COLOR).contains(&color) {
            self.embed.color = Some(color);
        } else {
            self.errors.push(BuilderError::ValueOutOfRange {
                kind: "embed color",
                value: color as i64,
                min: 0,
                max: MAX_COLOR as i64,
            });
        }
        self
    }

    /// Stamps the embed with the current UTC time.
    pub fn set_current_timestamp(&mut self) -> &mut Self {
        self.set_raw_timestamp(Timestamp::now_utc())
    }

    /// Stamps the embed with the given instant, normalized to UTC.
    pub fn set_custom_timestamp(&mut self, ts: impl Into<Timestamp>) -> &mut Self {
        self.set_raw_timestamp(ts.into())
    }

    fn set_raw_timestamp(&mut self, ts: Timestamp) -> &mut Self {
        self.embed.timestamp = Some(ts);
        self
    }

    /// Sets the inline flag on every currently attached field.
    pub fn inline_all_fields(&mut self) -> &mut Self {
        for field in &mut self.embed.fields {
            field.inline = true;
        }
        self
    }

    /// Clears the inline flag on every currently attached field.
    pub fn outline_all_fields(&mut self) -> &mut Self {
        for field in &mut self.embed.fields {
            field.inline = false;
        }
        self
    }

    /// Finalizes the given [`FieldBuilder`], absorbs its errors, and appends the raw
    /// field if the embed holds fewer than [`MAX_FIELD_COUNT`] fields. The field
    /// builder should not be reused afterwards.
    pub fn add_field(&mut self, field: &mut FieldBuilder) -> &mut Self {
        let (raw, errs) = field.finalize();
        self.errors.absorb(errs);
        self.add_raw_field(raw)
    }

    /// [`add_field`](EmbedBuilder::add_field) for each builder, in order. Fields past
    /// the cap are rejected one by one, each with its own error.
    pub fn add_fields<'a>(&mut self, fields: impl IntoIterator<Item = &'a mut FieldBuilder>) -> &mut Self {
        for field in fields {
            self.add_field(field);
        }
        self
    }

    /// Appends an already-finalized field, subject to the same count cap. No error
    /// absorption takes place.
    pub fn add_raw_field(&mut self, field: EmbedField) -> &mut Self {
        if self.embed.fields.len() < MAX_FIELD_COUNT {
            self.embed.fields.push(field);
        } else {
            self.errors.push(BuilderError::FieldLimitReached {
                name: field.name,
                limit: MAX_FIELD_COUNT,
            });
        }
        self
    }

    /// [`add_raw_field`](EmbedBuilder::add_raw_field) for each field, in order.
    pub fn add_raw_fields(&mut self, fields: impl IntoIterator<Item = EmbedField>) -> &mut Self {
        for field in fields {
            self.add_raw_field(field);
        }
        self
    }

    /// Finalizes the given [`AuthorBuilder`], absorbs its errors, and replaces the
    /// embed's author. Last call wins.
    pub fn set_author(&mut self, author: &mut AuthorBuilder) -> &mut Self {
        let (raw, errs) = author.finalize();
        self.errors.absorb(errs);
        self.set_raw_author(raw)
    }

    pub fn set_raw_author(&mut self, author: EmbedAuthor) -> &mut Self {
        self.embed.author = Some(author);
        self
    }

    /// Finalizes the given [`ThumbnailBuilder`], absorbs its errors, and replaces the
    /// embed's thumbnail. Last call wins.
    pub fn set_thumbnail(&mut self, thumb: &mut ThumbnailBuilder) -> &mut Self {
        let (raw, errs) = thumb.finalize();
        self.errors.absorb(errs);
        self.set_raw_thumbnail(raw)
    }

    pub fn set_raw_thumbnail(&mut self, thumb: EmbedThumbnail) -> &mut Self {
        self.embed.thumbnail = Some(thumb);
        self
    }

    /// Finalizes the given [`FooterBuilder`], absorbs its errors, and replaces the
    /// embed's footer. Last call wins.
    pub fn set_footer(&mut self, footer: &mut FooterBuilder) -> &mut Self {
        let (raw, errs) = footer.finalize();
        self.errors.absorb(errs);
        self.set_raw_footer(raw)
    }

    pub fn set_raw_footer(&mut self, footer: EmbedFooter) -> &mut Self {
        self.embed.footer = Some(footer);
        self
    }

    /// Finalizes the given [`VideoBuilder`], absorbs its errors, and replaces the
    /// embed's video. Last call wins.
    pub fn set_video(&mut self, video: &mut VideoBuilder) -> &mut Self {
        let (raw, errs) = video.finalize();
        self.errors.absorb(errs);
        self.set_raw_video(raw)
    }

    pub fn set_raw_video(&mut self, video: EmbedVideo) -> &mut Self {
        self.embed.video = Some(video);
        self
    }

    /// Finalizes the given [`ImageBuilder`], absorbs its errors, and replaces the
    /// embed's image. Last call wins.
    pub fn set_image(&mut self, image: &mut ImageBuilder) -> &mut Self {
        let (raw, errs) = image.finalize();
        self.errors.absorb(errs);
        self.set_raw_image(raw)
    }

    pub fn set_raw_image(&mut self, image: EmbedImage) -> &mut Self {
        self.embed.image = Some(image);
        self
    }

    /// Finalizes the given [`ProviderBuilder`] and replaces the embed's provider.
    /// Last call wins.
    pub fn set_provider(&mut self, provider: &mut ProviderBuilder) -> &mut Self {
        let (raw, errs) = provider.finalize();
        self.errors.absorb(errs);
        self.set_raw_provider(raw)
    }

    pub fn set_raw_provider(&mut self, provider: EmbedProvider) -> &mut Self {
        self.embed.provider = Some(provider);
        self
    }

    /// Sets the embed type if the name belongs to the platform's fixed enumeration.
    pub fn set_type(&mut self, ty: &str) -> &mut Self {
        match EmbedType::from_name(ty) {
            Some(ty) => self.embed.ty = ty,
            None => self.errors.push(BuilderError::InvalidEmbedType { value: ty.into() }),
        }
        self
    }

    /// Yields the assembled embed together with every failure recorded since the last
    /// finalize, then clears the error sink. A second call returns the same embed
    /// content and no errors.
    pub fn finalize(&mut self) -> (Embed, Option<Vec<BuilderError>>) {
        (self.embed.clone(), self.errors.take())
    }
}
