use smol_str::SmolStr;

/// Non-fatal validation failures recorded while an embed is under construction.
///
/// None of these abort the chain; the rejected mutation is simply not applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuilderError {
    #[error("{kind} exceeds {limit} characters (got {len})")]
    TextTooLong {
        kind: &'static str,
        limit: usize,
        len: usize,
        /// Echo of the rejected text, omitted for long-form fields
        value: Option<SmolStr>,
    },

    #[error("{kind} value {value} not between {min} and {max}")]
    ValueOutOfRange {
        kind: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("field {name:?} dropped, embed already holds {limit} fields")]
    FieldLimitReached { name: SmolStr, limit: usize },

    #[error("invalid embed type {value:?}")]
    InvalidEmbedType { value: SmolStr },

    #[error("{kind} {url:?} must start with http://, https:// or attachment://")]
    InvalidUrlScheme { kind: &'static str, url: SmolStr },
}

/// Order-preserving error accumulator held by every builder.
///
/// Stays unallocated until the first failure. [`take`](ErrorSink::take) hands the
/// collected list to the caller and resets the sink.
#[derive(Default, Debug, Clone)]
pub struct ErrorSink {
    errors: Option<Vec<BuilderError>>,
}

impl ErrorSink {
    pub const fn new() -> Self {
        ErrorSink { errors: None }
    }

    pub fn push(&mut self, err: BuilderError) {
        self.errors.get_or_insert_with(Vec::new).push(err);
    }

    /// Appends a finalized sub-builder's errors, preserving their order. Never
    /// deduplicates.
    pub fn absorb(&mut self, errs: Option<Vec<BuilderError>>) {
        match errs {
            Some(errs) if !errs.is_empty() => {
                self.errors.get_or_insert_with(Vec::new).extend(errs);
            }
            _ => {}
        }
    }

    pub fn take(&mut self) -> Option<Vec<BuilderError>> {
        self.errors.take()
    }

    pub fn is_empty(&self) -> bool {
        match self.errors {
            Some(ref errs) => errs.is_empty(),
            None => true,
        }
    }
}
