//! Caps the platform imposes on embed content.
//!
//! Text limits are counted in characters, not bytes.

pub const TITLE_LIMIT: usize = 256;
pub const DESCRIPTION_LIMIT: usize = 2048;
pub const FIELD_NAME_LIMIT: usize = 256;
pub const FIELD_VALUE_LIMIT: usize = 1024;
pub const FOOTER_TEXT_LIMIT: usize = 2048;
pub const AUTHOR_NAME_LIMIT: usize = 256;

pub const MAX_FIELD_COUNT: usize = 25;

/// Exclusive upper bound for the 0xRRGGBB accent color.
pub const MAX_COLOR: i32 = 0x100_0000;
