use models::EmbedField;
use smol_str::SmolStr;

use crate::error::{BuilderError, ErrorSink};
use crate::limits::{FIELD_NAME_LIMIT, FIELD_VALUE_LIMIT};

/// Builder for one name/value column of an embed.
///
/// Attach with [`EmbedBuilder::add_field`](crate::EmbedBuilder::add_field), which
/// finalizes the builder and absorbs its errors.
#[derive(Default, Debug, Clone)]
pub struct FieldBuilder {
    field: EmbedField,
    errors: ErrorSink,
}

impl FieldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field's name unless it exceeds [`FIELD_NAME_LIMIT`] characters.
    pub fn set_name(&mut self, name: impl Into<SmolStr>) -> &mut Self {
        let name = name.into();
        let len = name.chars().count();

        if len <= FIELD_NAME_LIMIT {
            self.field.name = name;
        } else {
            self.errors.push(BuilderError::TextTooLong {
                kind: "field name",
                limit: FIELD_NAME_LIMIT,
                len,
                value: Some(name),
            });
        }
        self
    }

    /// Sets the field's value unless it exceeds [`FIELD_VALUE_LIMIT`] characters.
    pub fn set_value(&mut self, value: impl Into<SmolStr>) -> &mut Self {
        let value = value.into();
        let len = value.chars().count();

        if len <= FIELD_VALUE_LIMIT {
            self.field.value = value;
        } else {
            self.errors.push(BuilderError::TextTooLong {
                kind: "field value",
                limit: FIELD_VALUE_LIMIT,
                len,
                value: None,
            });
        }
        self
    }

    pub fn set_inline(&mut self, inline: bool) -> &mut Self {
        self.field.inline = inline;
        self
    }

    pub fn inline(&mut self) -> &mut Self {
        self.set_inline(true)
    }

    pub fn outline(&mut self) -> &mut Self {
        self.set_inline(false)
    }

    pub fn finalize(&mut self) -> (EmbedField, Option<Vec<BuilderError>>) {
        (self.field.clone(), self.errors.take())
    }
}
