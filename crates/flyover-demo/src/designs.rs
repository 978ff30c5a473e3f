//! Stock atlas and building designs.
//!
//! The stock skyline uses two blueprints, "tall" and "short", each with
//! a light facade on the camera-facing north/west walls, a dark facade on
//! east/south, and its own roof. Asset decoding is out of scope, so the
//! atlas pixels are synthesized: flat facade colors with window banding.

use std::sync::Arc;

use anyhow::Result;
use image::{Rgba, RgbaImage};

use flyover_engine::atlas::Atlas;
use flyover_engine::city::{BuildingDesign, FaceConfig};
use flyover_engine::coords::Rect;

pub const ATLAS_W: u32 = 400;
pub const ATLAS_H: u32 = 250;

// Atlas region table.
const TALL_LIGHT: Rect = Rect::new(0.0, 0.0, 100.0, 250.0);
const TALL_DARK: Rect = Rect::new(100.0, 0.0, 100.0, 250.0);
const TALL_ROOF: Rect = Rect::new(200.0, 120.0, 100.0, 100.0);
const SHORT_LIGHT: Rect = Rect::new(200.0, 0.0, 100.0, 120.0);
const SHORT_DARK: Rect = Rect::new(300.0, 0.0, 100.0, 120.0);
const SHORT_ROOF: Rect = Rect::new(300.0, 120.0, 100.0, 100.0);

/// Builds the atlas region table plus the matching synthesized pixels.
pub fn stock_atlas() -> Result<(Arc<Atlas>, RgbaImage)> {
    let mut atlas = Atlas::new(ATLAS_W, ATLAS_H)?;
    atlas.define("tall-light", TALL_LIGHT)?;
    atlas.define("tall-dark", TALL_DARK)?;
    atlas.define("tall-roof", TALL_ROOF)?;
    atlas.define("short-light", SHORT_LIGHT)?;
    atlas.define("short-dark", SHORT_DARK)?;
    atlas.define("short-roof", SHORT_ROOF)?;

    let mut pixels = RgbaImage::from_pixel(ATLAS_W, ATLAS_H, Rgba([0, 0, 0, 0]));
    facade(&mut pixels, TALL_LIGHT, [104, 168, 112]);
    facade(&mut pixels, TALL_DARK, [58, 104, 66]);
    roof(&mut pixels, TALL_ROOF, [88, 140, 96]);
    facade(&mut pixels, SHORT_LIGHT, [196, 176, 96]);
    facade(&mut pixels, SHORT_DARK, [140, 120, 54]);
    roof(&mut pixels, SHORT_ROOF, [172, 152, 82]);

    Ok((Arc::new(atlas), pixels))
}

/// The two stock designs, sized by their light faces.
pub fn stock_designs(atlas: &Arc<Atlas>) -> Result<Vec<Arc<BuildingDesign>>> {
    let tall = BuildingDesign::from_faces(FaceConfig {
        roof: atlas.texture("tall-roof")?,
        north: atlas.texture("tall-light")?,
        east: Some(atlas.texture("tall-dark")?),
        south: Some(atlas.texture("tall-dark")?),
        west: Some(atlas.texture("tall-light")?),
    })?;

    let short = BuildingDesign::from_faces(FaceConfig {
        roof: atlas.texture("short-roof")?,
        north: atlas.texture("short-light")?,
        east: Some(atlas.texture("short-dark")?),
        south: Some(atlas.texture("short-dark")?),
        west: Some(atlas.texture("short-light")?),
    })?;

    Ok(vec![Arc::new(tall), Arc::new(short)])
}

/// Flat facade color with a darker band every other ten-pixel row,
/// suggesting floors of windows.
fn facade(img: &mut RgbaImage, region: Rect, rgb: [u8; 3]) {
    paint(img, region, |_, dy| {
        if (dy / 10) % 2 == 1 {
            [rgb[0] / 2, rgb[1] / 2, rgb[2] / 2, 255]
        } else {
            [rgb[0], rgb[1], rgb[2], 255]
        }
    });
}

/// Plain roof slab with a two-pixel parapet border.
fn roof(img: &mut RgbaImage, region: Rect, rgb: [u8; 3]) {
    let w = region.size.x as u32;
    let h = region.size.y as u32;
    paint(img, region, |dx, dy| {
        let border = dx < 2 || dy < 2 || dx >= w - 2 || dy >= h - 2;
        if border {
            [rgb[0].saturating_add(40), rgb[1].saturating_add(40), rgb[2].saturating_add(40), 255]
        } else {
            [rgb[0], rgb[1], rgb[2], 255]
        }
    });
}

fn paint(img: &mut RgbaImage, region: Rect, shade: impl Fn(u32, u32) -> [u8; 4]) {
    let x0 = region.origin.x as u32;
    let y0 = region.origin.y as u32;
    for dy in 0..region.size.y as u32 {
        for dx in 0..region.size.x as u32 {
            img.put_pixel(x0 + dx, y0 + dy, Rgba(shade(dx, dy)));
        }
    }
}
