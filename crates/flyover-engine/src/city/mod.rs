//! The city: building blueprints and instances, grid layout, per-frame
//! motion with toroidal wrap, and painter's-algorithm depth ordering.
//!
//! Frame anatomy (one call to [`City::advance_and_draw`]):
//! 1. clear the surface
//! 2. depth-sort buildings on last frame's positions
//! 3. move every building opposite the travel step and wrap per axis
//! 4. draw back-to-front

mod building;
mod config;
mod design;
mod motion;

pub use building::{Building, Viewpoint};
pub use config::CityConfig;
pub use design::{BuildingDesign, FaceConfig, FaceSet};
pub use motion::Motion;

use std::sync::Arc;

use anyhow::{Result, ensure};
use rand::Rng;

use crate::coords::{Stage, Vec2};
use crate::surface::Surface;

/// Depth key for painter's-algorithm ordering: the building's Manhattan
/// distance from the camera origin. Larger keys draw first.
#[inline]
pub fn depth_key(building: &Building) -> f32 {
    building.pos.manhattan()
}

/// One wrap period along a single axis.
///
/// `span` is sized so the grid tiles the stage plus one spacing unit of
/// margin on each side; positions are kept inside `[lo, hi]` by shifting a
/// whole span at a time, which changes the representative but never the
/// equivalence class.
#[derive(Debug, Copy, Clone)]
struct WrapAxis {
    span: f32,
    lo: f32,
    hi: f32,
}

impl WrapAxis {
    fn for_extent(extent: f32, spacing: f32) -> Self {
        let span = spacing * (1.0 + extent / spacing).ceil();
        let lo = -extent / 2.0 - spacing;
        Self {
            span,
            lo,
            hi: lo + span,
        }
    }

    /// NaN compares false against both extents, so a poisoned coordinate
    /// passes through unchanged instead of panicking.
    #[inline]
    fn wrap(self, v: f32) -> f32 {
        if v > self.hi {
            v - self.span
        } else if v < self.lo {
            v + self.span
        } else {
            v
        }
    }
}

/// Owns the building collection and drives it through frames.
///
/// The collection is created once per layout generation and only re-ordered
/// afterwards; draw order is transient render state with no meaning between
/// frames.
#[derive(Debug)]
pub struct City {
    config: CityConfig,
    stage: Stage,
    buildings: Vec<Building>,
    warned_nonfinite: bool,
}

impl City {
    pub fn new(config: CityConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            stage: Stage::default(),
            buildings: Vec::new(),
            warned_nonfinite: false,
        })
    }

    #[inline]
    pub fn config(&self) -> CityConfig {
        self.config
    }

    /// The stage the current layout was generated for.
    #[inline]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[inline]
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    /// Populates the grid layout for `stage`, replacing any previous layout.
    ///
    /// Grid counts are `1 + ceil(extent / spacing)` per axis; the extra
    /// row/column guarantees coverage margin while buildings scroll and
    /// wrap. Each cell gets one building with a design drawn uniformly from
    /// `designs` through the caller's generator, so a seeded generator
    /// reproduces the layout exactly.
    pub fn generate(
        &mut self,
        stage: Stage,
        designs: &[Arc<BuildingDesign>],
        rng: &mut impl Rng,
    ) -> Result<()> {
        ensure!(stage.is_valid(), "stage {stage:?} is not a drawable area");
        ensure!(
            !designs.is_empty(),
            "layout generation requires at least one building design"
        );

        let spacing = self.config.spacing;
        let cols = 1 + (stage.w / spacing).ceil() as u32;
        let rows = 1 + (stage.h / spacing).ceil() as u32;

        self.stage = stage;
        self.warned_nonfinite = false;
        self.buildings.clear();
        self.buildings.reserve((cols * rows) as usize);
        for col in 0..cols {
            for row in 0..rows {
                let design = &designs[rng.gen_range(0..designs.len())];
                self.buildings.push(Building::new(
                    Vec2::new(col as f32 * spacing, row as f32 * spacing),
                    Arc::clone(design),
                ));
            }
        }

        log::debug!(
            "generated {} buildings ({cols}x{rows} grid, spacing {spacing})",
            self.buildings.len()
        );
        Ok(())
    }

    /// Runs one frame against `surface`.
    pub fn advance_and_draw(&mut self, motion: Motion, surface: &mut impl Surface) {
        surface.clear();
        self.depth_sort();
        self.advance(motion.step());
        self.draw(surface);
    }

    /// Re-sorts buildings by descending depth key.
    ///
    /// `total_cmp` gives a total order even over NaN keys, and the stable
    /// sort keeps equal keys in their previous relative order. Equal-key
    /// buildings cannot overlap on screen, so tie order is cosmetic either
    /// way.
    pub fn depth_sort(&mut self) {
        self.buildings
            .sort_by(|a, b| depth_key(b).total_cmp(&depth_key(a)));
    }

    /// Moves every building by `-step` and wraps each axis independently.
    ///
    /// A building may wrap in x without wrapping in y in the same frame;
    /// the two axes run on their own schedules.
    pub fn advance(&mut self, step: Vec2) {
        let wx = WrapAxis::for_extent(self.stage.w, self.config.spacing);
        let wy = WrapAxis::for_extent(self.stage.h, self.config.spacing);

        for building in &mut self.buildings {
            building.pos -= step;
            building.pos.x = wx.wrap(building.pos.x);
            building.pos.y = wy.wrap(building.pos.y);
        }
    }

    /// Draws all buildings in current (sorted) order.
    ///
    /// Buildings whose position went non-finite (e.g. from a NaN direction
    /// upstream) are skipped so the surface's blit primitive never sees a
    /// non-finite transform; the condition is reported once per layout, not
    /// once per frame.
    pub fn draw(&mut self, surface: &mut impl Surface) {
        let view = Viewpoint {
            center: self.stage.center(),
            perspective: self.config.perspective,
        };

        for building in &self.buildings {
            if !building.pos.is_finite() {
                if !self.warned_nonfinite {
                    log::warn!(
                        "skipping building with non-finite position {:?}",
                        building.pos
                    );
                    self.warned_nonfinite = true;
                }
                continue;
            }
            building.draw(view, surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::atlas::{Atlas, Texture};
    use crate::coords::Rect;
    use crate::surface::RecordingSurface;

    use super::*;

    fn design(side: f32, height: f32) -> Arc<BuildingDesign> {
        let atlas = Arc::new(Atlas::new(1024, 1024).unwrap());
        let light = Texture::new(Arc::clone(&atlas), Rect::new(0.0, 0.0, side, height)).unwrap();
        let roof = Texture::new(Arc::clone(&atlas), Rect::new(0.0, 256.0, side, side)).unwrap();
        Arc::new(
            BuildingDesign::from_faces(FaceConfig {
                roof,
                north: light,
                east: None,
                south: None,
                west: None,
            })
            .unwrap(),
        )
    }

    fn city_800x600(designs: &[Arc<BuildingDesign>], seed: u64) -> City {
        let mut city = City::new(CityConfig::default()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        city.generate(Stage::new(800.0, 600.0), designs, &mut rng)
            .unwrap();
        city
    }

    // ── layout generation ─────────────────────────────────────────────────

    #[test]
    fn stage_800x600_with_spacing_150_yields_7x5_grid() {
        let city = city_800x600(&[design(100.0, 250.0)], 1);
        assert_eq!(city.len(), 35);

        // One building per cell at (col*spacing, row*spacing).
        for col in 0..7 {
            for row in 0..5 {
                let pos = Vec2::new(col as f32 * 150.0, row as f32 * 150.0);
                assert_eq!(
                    city.buildings().iter().filter(|b| b.pos == pos).count(),
                    1,
                    "cell ({col},{row})"
                );
            }
        }
    }

    #[test]
    fn regeneration_replaces_the_layout() {
        let designs = [design(100.0, 250.0)];
        let mut city = city_800x600(&designs, 1);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        city.generate(Stage::new(800.0, 600.0), &designs, &mut rng)
            .unwrap();
        assert_eq!(city.len(), 35);
    }

    #[test]
    fn empty_design_set_is_a_configuration_error() {
        let mut city = City::new(CityConfig::default()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(
            city.generate(Stage::new(800.0, 600.0), &[], &mut rng)
                .is_err()
        );
    }

    #[test]
    fn invalid_stage_is_rejected() {
        let designs = [design(100.0, 250.0)];
        let mut city = City::new(CityConfig::default()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(city.generate(Stage::new(0.0, 600.0), &designs, &mut rng).is_err());
        assert!(
            city.generate(Stage::new(800.0, f32::NAN), &designs, &mut rng)
                .is_err()
        );
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let designs = [design(100.0, 250.0), design(120.0, 80.0)];
        let a = city_800x600(&designs, 42);
        let b = city_800x600(&designs, 42);

        for (x, y) in a.buildings().iter().zip(b.buildings()) {
            assert_eq!(x.pos, y.pos);
            assert!(Arc::ptr_eq(x.design(), y.design()));
        }
    }

    #[test]
    fn footprints_cover_the_stage_when_footprint_matches_spacing() {
        // Design whose footprint equals the grid spacing tiles the plane;
        // the +1 grid margin must then cover every stage point, edges
        // included, before any motion.
        let city = city_800x600(&[design(150.0, 200.0)], 9);

        let mut x = 0.0;
        while x <= 800.0 {
            let mut y = 0.0;
            while y <= 600.0 {
                let p = Vec2::new(x, y);
                let covered = city.buildings().iter().any(|b| {
                    Rect {
                        origin: b.pos,
                        size: b.design().footprint(),
                    }
                    .contains(p)
                });
                assert!(covered, "no footprint contains ({x}, {y})");
                y += 25.0;
            }
            x += 25.0;
        }
    }

    // ── motion and wrap ───────────────────────────────────────────────────

    #[test]
    fn due_east_course_changes_x_only() {
        let mut city = city_800x600(&[design(100.0, 250.0)], 3);
        let motion = Motion::new(0.0, 2.0);

        // First step folds the freshly generated grid into the wrap extents.
        city.advance(motion.step());
        let baseline: Vec<Vec2> = city.buildings().iter().map(|b| b.pos).collect();

        for _ in 0..500 {
            city.advance(motion.step());
        }

        // Direction 0 must decompose to exactly (speed, 0): after 500 more
        // frames every y is bit-identical and every x moved.
        for (b, start) in city.buildings().iter().zip(&baseline) {
            assert_eq!(b.pos.y, start.y);
            assert_ne!(b.pos.x, start.x);
        }
    }

    #[test]
    fn due_east_course_decrements_x_by_speed_until_wrap() {
        let mut city = city_800x600(&[design(100.0, 250.0)], 3);
        let motion = Motion::new(0.0, 2.0);
        city.advance(motion.step());

        // Building 0 starts near the origin, far from the extents, so no
        // wrap triggers for the next 100 frames and x is exact.
        let start = city.buildings()[0].pos;
        for frame in 1..=100 {
            city.advance(motion.step());
            assert_eq!(city.buildings()[0].pos.x, start.x - 2.0 * frame as f32);
        }
    }

    #[test]
    fn positions_stay_within_wrap_extents() {
        let mut city = city_800x600(&[design(100.0, 250.0)], 4);
        let motion = Motion::new(2.399, 7.0);

        let wx = WrapAxis::for_extent(800.0, 150.0);
        let wy = WrapAxis::for_extent(600.0, 150.0);
        assert_eq!(wx.span, 1050.0);
        assert_eq!(wy.span, 750.0);

        for frame in 0..1000 {
            city.advance(motion.step());
            if frame == 0 {
                continue; // first step folds freshly generated outliers in
            }
            for b in city.buildings() {
                assert!(b.pos.x >= wx.lo && b.pos.x <= wx.hi, "x out of extents");
                assert!(b.pos.y >= wy.lo && b.pos.y <= wy.hi, "y out of extents");
            }
        }
    }

    #[test]
    fn wrapping_preserves_position_modulo_span() {
        let mut city = city_800x600(&[design(100.0, 250.0)], 5);
        let start = city.buildings()[0].pos;
        let motion = Motion::new(0.0, 13.0);
        let frames = 300;

        for _ in 0..frames {
            city.advance(motion.step());
        }

        let wx = WrapAxis::for_extent(800.0, 150.0);
        let expected = start.x - frames as f32 * 13.0;
        let diff = expected - city.buildings()[0].pos.x;
        let whole_spans = (diff / wx.span).round();
        assert!(
            (diff - whole_spans * wx.span).abs() < 0.5,
            "x drifted off its wrap equivalence class"
        );
    }

    // ── depth ordering ────────────────────────────────────────────────────

    #[test]
    fn depth_sort_orders_by_descending_manhattan_key() {
        let mut city = city_800x600(&[design(100.0, 250.0)], 6);
        city.advance(Vec2::new(431.0, -212.0)); // shove positions off-grid
        city.depth_sort();

        let keys: Vec<f32> = city.buildings().iter().map(depth_key).collect();
        for pair in keys.windows(2) {
            assert!(pair[0] >= pair[1], "sort must be non-increasing");
        }
    }

    #[test]
    fn depth_sort_survives_nan_keys() {
        let mut city = city_800x600(&[design(100.0, 250.0)], 7);
        city.buildings[3].pos = Vec2::new(f32::NAN, 0.0);
        city.depth_sort(); // must neither panic nor hang
    }

    // ── frame loop ────────────────────────────────────────────────────────

    #[test]
    fn frame_clears_once_and_blits_three_faces_per_building() {
        let mut city = city_800x600(&[design(100.0, 250.0)], 8);
        let mut surface = RecordingSurface::new();
        let motion = Motion::default();

        city.advance_and_draw(motion, &mut surface);
        assert_eq!(surface.clear_count(), 1);
        assert_eq!(surface.blits().len(), 35 * 3);

        city.advance_and_draw(motion, &mut surface);
        assert_eq!(surface.clear_count(), 2);
        assert_eq!(surface.blits().len(), 35 * 3);
    }

    #[test]
    fn non_finite_building_is_skipped_not_drawn() {
        let mut city = city_800x600(&[design(100.0, 250.0)], 9);
        city.buildings[0].pos = Vec2::new(f32::NAN, f32::NAN);

        let mut surface = RecordingSurface::new();
        city.advance_and_draw(Motion::new(f32::NAN, 2.0), &mut surface);

        // The poisoned motion spreads NaN to every position this frame;
        // nothing may reach the blit primitive and nothing may panic.
        assert_eq!(surface.blits().len(), 0);
        for blit in surface.blits() {
            assert!(blit.transform.is_finite());
        }
    }

    #[test]
    fn finite_buildings_still_draw_alongside_a_poisoned_one() {
        let mut city = city_800x600(&[design(100.0, 250.0)], 10);
        city.buildings[4].pos = Vec2::new(f32::INFINITY, 0.0);

        let mut surface = RecordingSurface::new();
        city.advance_and_draw(Motion::default(), &mut surface);
        assert_eq!(surface.blits().len(), 34 * 3);
    }
}
