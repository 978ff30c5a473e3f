//! Frame timing.
//!
//! The engine has no opinion on frame cadence: motion is expressed in
//! pixels per frame, so effective velocity follows whatever scheduler the
//! host runs. The clock here exists for hosts that want timing anyway,
//! e.g. pacing logs or fixed-step headless runs.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
