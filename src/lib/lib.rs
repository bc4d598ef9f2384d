#![cfg_attr(not(feature = "std"), no_std)]

//! Width-prefixed bitmap sprites for 8-row dot-matrix displays.
//!
//! A font is a flat byte blob. Each record is a width byte followed by that
//! many column bytes, and records are addressed by their position. Code
//! point 0 is the empty glyph.

#[cfg(test)]
extern crate alloc;

mod font;
mod glyph;
mod glyph_cache;
pub mod notes;

pub use font::{Font, FontError, MAX_GLYPHS};
pub use glyph::{Glyph, ROWS};
pub use glyph_cache::GlyphCache;
pub use notes::{lookup, Note, NOTES, NOTES_DATA};
