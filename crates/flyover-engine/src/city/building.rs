use std::sync::Arc;

use crate::coords::{Affine2, Vec2};
use crate::surface::Surface;

use super::BuildingDesign;

/// Per-frame projection parameters: the camera origin in screen space and
/// the perspective divisor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewpoint {
    pub center: Vec2,
    pub perspective: f32,
}

/// One building instance: a mutable world-space position (top-left corner
/// of the footprint) and a shared blueprint.
#[derive(Debug, Clone)]
pub struct Building {
    pub pos: Vec2,
    design: Arc<BuildingDesign>,
}

impl Building {
    #[inline]
    pub fn new(pos: Vec2, design: Arc<BuildingDesign>) -> Self {
        Self { pos, design }
    }

    #[inline]
    pub fn design(&self) -> &Arc<BuildingDesign> {
        &self.design
    }

    /// Projects and blits the visible faces of the building.
    ///
    /// Only three faces of a box are visible from any viewpoint: one of
    /// east/west, one of south/north, and the roof. The choice follows the
    /// sign of the perspective offset per axis; a zero offset counts as the
    /// non-negative branch (west, north). Walls are sheared parallelograms
    /// leaning away from the stage center; the roof caps them last.
    pub fn draw(&self, view: Viewpoint, surface: &mut impl Surface) {
        let design = &*self.design;
        let persp = self.pos / view.perspective;
        let anchor = self.pos + view.center;

        let (x, y) = (anchor.x, anchor.y);
        let w = design.footprint().x;
        let h = design.footprint().y;
        let tall = design.height();
        let faces = design.faces();

        // east or west wall, sheared along the vertical footprint edge
        if persp.x < 0.0 {
            let t = &faces.east;
            let (tw, th) = (t.width(), t.height());
            surface.blit(
                t,
                Affine2::new(
                    0.0,
                    -h / tw,
                    -persp.x * tall / th,
                    -persp.y * tall / th,
                    x + w + tall * persp.x,
                    y + h + tall * persp.y,
                ),
            );
        } else {
            let t = &faces.west;
            let (tw, th) = (t.width(), t.height());
            surface.blit(
                t,
                Affine2::new(
                    0.0,
                    h / tw,
                    -persp.x * tall / th,
                    -persp.y * tall / th,
                    x + tall * persp.x,
                    y + tall * persp.y,
                ),
            );
        }

        // south or north wall, sheared along the horizontal footprint edge
        if persp.y < 0.0 {
            let t = &faces.south;
            let (tw, th) = (t.width(), t.height());
            surface.blit(
                t,
                Affine2::new(
                    w / tw,
                    0.0,
                    -persp.x * tall / th,
                    -persp.y * tall / th,
                    x + persp.x * tall,
                    y + h + tall * persp.y,
                ),
            );
        } else {
            let t = &faces.north;
            let (tw, th) = (t.width(), t.height());
            surface.blit(
                t,
                Affine2::new(
                    -w / tw,
                    0.0,
                    -persp.x * tall / th,
                    -persp.y * tall / th,
                    x + w + persp.x * tall,
                    y + tall * persp.y,
                ),
            );
        }

        // roof: plain scale + translation, no shear, always on top
        let t = &faces.roof;
        surface.blit(
            t,
            Affine2::new(
                w / t.width(),
                0.0,
                0.0,
                h / t.height(),
                x + tall * persp.x,
                y + tall * persp.y,
            ),
        );
    }
}
