//! Pointer input.
//!
//! The engine consumes pointer positions that a host has already normalized
//! to stage-relative pixels (viewport offsets, scrolling, and touch-vs-mouse
//! differences are the host's problem). What remains here is the mapping
//! from a position to a travel direction, plus the hand-off cell the input
//! and render domains share.

mod pointer;
mod shared;

pub use pointer::{PointerState, direction_to};
pub use shared::SharedDirection;
