use crate::atlas::Texture;
use crate::coords::{Affine2, Rect};

use super::Surface;

/// A single recorded blit: the atlas region that was drawn and the transform
/// it was drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct Blit {
    pub region: Rect,
    pub transform: Affine2,
}

/// Surface implementation that records the frame's blit stream instead of
/// rasterizing it.
///
/// `clear()` drops the recorded stream but keeps its allocation, so a warmed
/// recorder does not allocate per frame.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    blits: Vec<Blit>,
    clears: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blits recorded since the last `clear`, in paint order.
    #[inline]
    pub fn blits(&self) -> &[Blit] {
        &self.blits
    }

    /// Total number of `clear` calls observed.
    #[inline]
    pub fn clear_count(&self) -> u64 {
        self.clears
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.blits.clear();
        self.clears += 1;
    }

    fn blit(&mut self, texture: &Texture, transform: Affine2) {
        self.blits.push(Blit {
            region: texture.region(),
            transform,
        });
    }
}
