//! CPU raster backend for the engine's drawing seam.
//!
//! Blits are resolved by inverse mapping: for every frame pixel inside the
//! transformed region's bounding box, the inverse affine gives the source
//! texel, sampled nearest-neighbor and composited source-over.

use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};

use flyover_engine::atlas::Texture;
use flyover_engine::coords::{Affine2, Vec2};
use flyover_engine::surface::Surface;

/// Transforms squashing the region below this determinant draw nothing.
const MIN_DET: f32 = 1e-6;

pub struct RasterSurface {
    frame: RgbaImage,
    atlas_pixels: RgbaImage,
    background: Rgba<u8>,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32, atlas_pixels: RgbaImage) -> Self {
        let background = Rgba([24, 28, 34, 255]);
        Self {
            frame: RgbaImage::from_pixel(width, height, background),
            atlas_pixels,
            background,
        }
    }

    #[inline]
    pub fn frame(&self) -> &RgbaImage {
        &self.frame
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.frame
            .save(path)
            .with_context(|| format!("writing snapshot {}", path.display()))
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self) {
        for px in self.frame.pixels_mut() {
            *px = self.background;
        }
    }

    fn blit(&mut self, texture: &Texture, t: Affine2) {
        if !t.is_finite() {
            return;
        }
        let det = t.a * t.d - t.b * t.c;
        if det.abs() < MIN_DET {
            return;
        }

        let region = texture.region();
        let (tw, th) = (region.size.x, region.size.y);

        // Bounding box of the mapped region corners, clipped to the frame.
        let corners = [
            t.apply(Vec2::zero()),
            t.apply(Vec2::new(tw, 0.0)),
            t.apply(Vec2::new(0.0, th)),
            t.apply(Vec2::new(tw, th)),
        ];
        let min_x = corners.iter().map(|c| c.x).fold(f32::INFINITY, f32::min);
        let min_y = corners.iter().map(|c| c.y).fold(f32::INFINITY, f32::min);
        let max_x = corners.iter().map(|c| c.x).fold(f32::NEG_INFINITY, f32::max);
        let max_y = corners.iter().map(|c| c.y).fold(f32::NEG_INFINITY, f32::max);

        let x0 = min_x.floor().max(0.0) as u32;
        let y0 = min_y.floor().max(0.0) as u32;
        let x1 = (max_x.ceil().max(0.0) as u32).min(self.frame.width());
        let y1 = (max_y.ceil().max(0.0) as u32).min(self.frame.height());

        for y in y0..y1 {
            for x in x0..x1 {
                // Inverse map the pixel center into region-local texels.
                let dx = x as f32 + 0.5 - t.tx;
                let dy = y as f32 + 0.5 - t.ty;
                let u = (t.d * dx - t.c * dy) / det;
                let v = (t.a * dy - t.b * dx) / det;
                if u < 0.0 || v < 0.0 || u >= tw || v >= th {
                    continue;
                }

                let sx = (region.origin.x + u) as u32;
                let sy = (region.origin.y + v) as u32;
                let src = *self.atlas_pixels.get_pixel(
                    sx.min(self.atlas_pixels.width() - 1),
                    sy.min(self.atlas_pixels.height() - 1),
                );
                if src.0[3] == 0 {
                    continue;
                }

                let dst = *self.frame.get_pixel(x, y);
                self.frame.put_pixel(x, y, over(src, dst));
            }
        }
    }
}

/// Source-over composite of `src` onto an opaque `dst`.
#[inline]
fn over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = src.0[3] as u32;
    if sa == 255 {
        return src;
    }
    let da = 255 - sa;
    let mix = |s: u8, d: u8| ((s as u32 * sa + d as u32 * da) / 255) as u8;
    Rgba([
        mix(src.0[0], dst.0[0]),
        mix(src.0[1], dst.0[1]),
        mix(src.0[2], dst.0[2]),
        255,
    ])
}
