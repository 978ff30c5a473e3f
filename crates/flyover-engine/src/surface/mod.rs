//! The drawing seam.
//!
//! Responsibilities:
//! - define the one outbound contract the city draws against
//! - provide a recording implementation for tests and debugging
//!
//! Real backends (canvas, GPU, CPU raster) live outside this crate and
//! implement [`Surface`] over whatever pixel store they own.

mod record;

pub use record::{Blit, RecordingSurface};

use crate::atlas::Texture;
use crate::coords::Affine2;

/// A drawable target with an affine-transform image blit primitive.
///
/// Contract per frame: `clear()` exactly once, then any number of `blit`s
/// in paint order (back to front). The engine never feeds a non-finite
/// transform to `blit`; backends may additionally reject degenerate
/// transforms however they see fit.
pub trait Surface {
    /// Resets the target to its background before a frame's blits.
    fn clear(&mut self);

    /// Draws `texture`'s atlas region mapped through `transform`.
    ///
    /// The transform maps region-local pixel coordinates (origin at the
    /// region's top-left, extent = region size) onto the surface.
    fn blit(&mut self, texture: &Texture, transform: Affine2);
}
