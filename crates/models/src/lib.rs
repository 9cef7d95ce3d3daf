#[macro_use]
extern crate serde;

pub mod embed;

pub use self::embed::*;

#[inline]
pub const fn is_false(value: &bool) -> bool {
    !*value
}
