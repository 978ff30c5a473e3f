//! Flyover engine crate.
//!
//! Renders an endless, pseudo-3D city of rectangular buildings that scrolls
//! under a camera steered by pointer position. The crate owns the geometric
//! core only: grid layout, per-frame motion with toroidal wrap, depth
//! ordering, and face projection. Everything that touches a real platform —
//! decoding the atlas image, putting pixels on screen, normalizing pointer
//! events, scheduling frames — lives behind small contracts:
//!
//! - [`surface::Surface`]: a drawable target with `clear()` and an
//!   affine-transform image blit
//! - [`atlas::Atlas`]: an opaque, already-decoded image with named regions
//! - [`input`]: consumes normalized stage-relative pointer coordinates
//! - the host invokes [`city::City::advance_and_draw`] once per display tick
//!
//! High-level modules
//! - `coords`: geometry primitives (vectors, rects, the 6-scalar affine form)
//! - `atlas`: texture atlas regions
//! - `surface`: the drawing seam and a recording implementation
//! - `city`: building designs, instances, and the city frame step
//! - `input`: pointer-to-direction mapping and the direction hand-off cell
//! - `time`: frame clock
//! - `logging`: logger initialization helpers

pub mod atlas;
pub mod city;
pub mod coords;
pub mod input;
pub mod logging;
pub mod surface;
pub mod time;
