//! Texture atlas regions.
//!
//! The engine treats the atlas as an opaque, already-loaded image: it knows
//! the pixel dimensions and a table of named rectangular regions, nothing
//! else. Decoding and pixel storage belong to the surface backend.

mod sheet;
mod texture;

pub use sheet::Atlas;
pub use texture::Texture;
