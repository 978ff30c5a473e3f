//! Coordinate and geometry types shared across the engine.
//!
//! Canonical space:
//! - Pixels, origin top-left, +X right, +Y down
//! - Building positions are world-space; the camera origin sits at the
//!   stage center, so screen position = world position + stage center
//!
//! The 6-scalar [`Affine2`] form is the exact shape consumed by the blit
//! primitive of the drawing surface.

mod affine;
mod rect;
mod stage;
mod vec2;

pub use affine::Affine2;
pub use rect::Rect;
pub use stage::Stage;
pub use vec2::Vec2;
