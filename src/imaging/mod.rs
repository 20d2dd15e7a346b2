//! Image decode, resize, and color primitives
//!
//! Thin wrappers over the `image` crate so loaders and processors never
//! touch codec details directly.

pub mod codec;
pub mod color;

pub use codec::{DecodeError, decode, encode_png, resize};
pub use color::dominant_color;
