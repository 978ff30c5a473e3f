use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result, ensure};

use crate::coords::Rect;

use super::Texture;

/// An already-decoded image holding many texture assets.
///
/// The engine only validates geometry against the atlas dimensions; the
/// backing pixels live wherever the surface backend keeps them. One atlas is
/// shared read-only by every texture carved from it.
#[derive(Debug)]
pub struct Atlas {
    width: u32,
    height: u32,
    regions: HashMap<String, Rect>,
}

impl Atlas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        ensure!(
            width > 0 && height > 0,
            "atlas has zero size ({width}x{height})"
        );
        Ok(Self {
            width,
            height,
            regions: HashMap::new(),
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Full atlas extent as a rect in atlas pixel space.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }

    /// Registers a named region. The region must lie within the atlas bounds.
    pub fn define(&mut self, name: impl Into<String>, region: Rect) -> Result<()> {
        let name = name.into();
        ensure!(
            region.is_finite() && region.size.x >= 0.0 && region.size.y >= 0.0,
            "region {name:?} has invalid extent {region:?}"
        );
        ensure!(
            region.within(self.bounds()),
            "region {name:?} {region:?} exceeds atlas bounds {}x{}",
            self.width,
            self.height
        );
        self.regions.insert(name, region);
        Ok(())
    }

    /// Looks up a named region without carving a texture.
    pub fn region(&self, name: &str) -> Option<Rect> {
        self.regions.get(name).copied()
    }

    /// Carves a texture for a previously defined region.
    pub fn texture(self: &Arc<Self>, name: &str) -> Result<Texture> {
        let region = self
            .region(name)
            .with_context(|| format!("atlas has no region named {name:?}"))?;
        Texture::new(Arc::clone(self), region)
    }
}
