//! Headless flyover demo.
//!
//! Drives the engine for a fixed number of frames with a scripted pointer
//! sweep standing in for mouse events, rasterizes every frame on the CPU,
//! and writes periodic PNG snapshots.

mod designs;
mod raster;

use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use flyover_engine::city::{City, CityConfig, Motion};
use flyover_engine::coords::{Stage, Vec2};
use flyover_engine::input::{PointerState, SharedDirection};
use flyover_engine::logging::init_logging;
use flyover_engine::time::FrameClock;

const STAGE: Stage = Stage::new(800.0, 600.0);
const FRAMES: u64 = 600;
const SNAPSHOT_EVERY: u64 = 100;
const SEED: u64 = 0x5EED;

fn main() -> Result<()> {
    init_logging(None);

    println!("flyover — endless city, headless run");
    println!("  stage    {}x{}", STAGE.w, STAGE.h);
    println!("  frames   {FRAMES}, snapshot every {SNAPSHOT_EVERY}");
    println!("  seed     {SEED:#x}");

    let (atlas, atlas_pixels) = designs::stock_atlas()?;
    let designs = designs::stock_designs(&atlas)?;

    let mut city = City::new(CityConfig::default())?;
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    city.generate(STAGE, &designs, &mut rng)?;
    log::info!("city ready: {} buildings", city.len());

    let out_dir = PathBuf::from("frames");
    std::fs::create_dir_all(&out_dir).context("creating snapshot directory")?;

    let mut surface = raster::RasterSurface::new(STAGE.w as u32, STAGE.h as u32, atlas_pixels);
    let mut pointer = PointerState::new();
    let direction = SharedDirection::default();
    let mut motion = Motion::default();
    let mut clock = FrameClock::fixed(60);

    for _ in 0..FRAMES {
        let t = clock.tick();

        // Input side: the scripted pointer orbits the stage center, sweeping
        // the travel direction through a slow full turn.
        pointer.moved(orbit_pointer(t.elapsed));
        if let Some(angle) = pointer.direction(STAGE) {
            direction.store(angle);
        }

        // Render side: read the latest direction once, then run the frame.
        motion.direction = direction.load();
        city.advance_and_draw(motion, &mut surface);

        if t.frame_index % SNAPSHOT_EVERY == 0 {
            let path = out_dir.join(format!("frame-{:04}.png", t.frame_index));
            surface.save_png(&path)?;
            log::info!("wrote {}", path.display());
        }
    }

    println!("done — snapshots in {}/", out_dir.display());
    Ok(())
}

fn orbit_pointer(elapsed: f32) -> Vec2 {
    let angle = elapsed * 0.35;
    STAGE.center() + Vec2::new(angle.cos(), angle.sin()) * 220.0
}
