use anyhow::{Result, ensure};

use crate::atlas::Texture;
use crate::coords::Vec2;

/// Face textures for a building, with the optional sides left unresolved.
///
/// Resolution order cascades rather than defaulting independently:
/// - `east` falls back to `north`
/// - `south` falls back to `north`
/// - `west` falls back to the *resolved* `east`
///
/// so a config carrying only `{roof, north}` yields the same texture on all
/// four walls, while `{roof, north, east}` puts `east` on both east and
/// west.
#[derive(Debug, Clone)]
pub struct FaceConfig {
    pub roof: Texture,
    pub north: Texture,
    pub east: Option<Texture>,
    pub south: Option<Texture>,
    pub west: Option<Texture>,
}

/// Fully resolved face textures: roof plus the four walls.
#[derive(Debug, Clone)]
pub struct FaceSet {
    pub roof: Texture,
    pub north: Texture,
    pub east: Texture,
    pub south: Texture,
    pub west: Texture,
}

impl FaceSet {
    /// Applies the cascading defaults documented on [`FaceConfig`].
    pub fn resolve(config: FaceConfig) -> Self {
        let east = config.east.unwrap_or_else(|| config.north.clone());
        let south = config.south.unwrap_or_else(|| config.north.clone());
        let west = config.west.unwrap_or_else(|| east.clone());
        Self {
            roof: config.roof,
            north: config.north,
            east,
            south,
            west,
        }
    }

    fn named(&self) -> [(&'static str, &Texture); 5] {
        [
            ("roof", &self.roof),
            ("north", &self.north),
            ("east", &self.east),
            ("south", &self.south),
            ("west", &self.west),
        ]
    }
}

/// Immutable blueprint shared by many building instances: a footprint, a
/// height, and the resolved face textures.
#[derive(Debug, Clone)]
pub struct BuildingDesign {
    footprint: Vec2,
    height: f32,
    faces: FaceSet,
}

impl BuildingDesign {
    /// Builds a design sized by its north (light) face: both footprint
    /// extents take the face's pixel width, the height takes its pixel
    /// height.
    pub fn from_faces(config: FaceConfig) -> Result<Self> {
        let faces = FaceSet::resolve(config);
        let side = faces.north.width();
        let height = faces.north.height();
        Self::with_size(Vec2::new(side, side), height, faces)
    }

    /// Builds a design with explicit extents.
    ///
    /// The face projection divides by every face's pixel size, so zero-area
    /// faces are rejected here instead of surfacing as NaN positions at
    /// draw time.
    pub fn with_size(footprint: Vec2, height: f32, faces: FaceSet) -> Result<Self> {
        ensure!(
            footprint.is_finite() && footprint.x > 0.0 && footprint.y > 0.0,
            "footprint must be positive and finite, got {footprint:?}"
        );
        ensure!(
            height.is_finite() && height > 0.0,
            "height must be positive and finite, got {height}"
        );
        for (name, face) in faces.named() {
            ensure!(
                !face.region().is_empty(),
                "{name} face has zero pixel area"
            );
        }
        Ok(Self {
            footprint,
            height,
            faces,
        })
    }

    /// Footprint extent in world pixels.
    #[inline]
    pub fn footprint(&self) -> Vec2 {
        self.footprint
    }

    /// Wall height in pixels.
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn faces(&self) -> &FaceSet {
        &self.faces
    }
}
