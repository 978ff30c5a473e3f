use std::sync::Arc;

use anyhow::{Result, ensure};

use crate::coords::Rect;

use super::Atlas;

/// A sub-region of a shared atlas image.
///
/// Immutable after construction. The region is validated against the atlas
/// bounds once, here, so downstream code never re-checks it.
#[derive(Debug, Clone)]
pub struct Texture {
    atlas: Arc<Atlas>,
    region: Rect,
}

impl Texture {
    pub fn new(atlas: Arc<Atlas>, region: Rect) -> Result<Self> {
        ensure!(
            region.is_finite() && region.size.x >= 0.0 && region.size.y >= 0.0,
            "texture region has invalid extent {region:?}"
        );
        ensure!(
            region.within(atlas.bounds()),
            "texture region {region:?} exceeds atlas bounds {}x{}",
            atlas.width(),
            atlas.height()
        );
        Ok(Self { atlas, region })
    }

    #[inline]
    pub fn atlas(&self) -> &Arc<Atlas> {
        &self.atlas
    }

    #[inline]
    pub fn region(&self) -> Rect {
        self.region
    }

    /// Region width in atlas pixels.
    #[inline]
    pub fn width(&self) -> f32 {
        self.region.size.x
    }

    /// Region height in atlas pixels.
    #[inline]
    pub fn height(&self) -> f32 {
        self.region.size.y
    }
}
