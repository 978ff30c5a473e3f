use crate::coords::{Stage, Vec2};

/// Travel direction implied by a pointer position: the angle of the pointer
/// relative to the stage center, in radians.
///
/// A pointer exactly at the center maps to `+0.0` (`atan2(+0, +0)`), i.e.
/// due east: defined and finite, never NaN.
#[inline]
pub fn direction_to(pointer: Vec2, stage: Stage) -> f32 {
    let center = stage.center();
    (pointer.y - center.y).atan2(pointer.x - center.x)
}

/// Latest-sample pointer holder for the input side of the loop.
///
/// The newest sample wins; samples are never queued or interpolated. The
/// render side reads the derived direction once per frame and holds no
/// reference in between.
#[derive(Debug, Default)]
pub struct PointerState {
    pos: Option<Vec2>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer move in stage-relative pixels.
    #[inline]
    pub fn moved(&mut self, pos: Vec2) {
        self.pos = Some(pos);
    }

    /// Records the pointer leaving the stage.
    #[inline]
    pub fn left(&mut self) {
        self.pos = None;
    }

    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.pos
    }

    /// Travel direction for the current sample, if the pointer is present.
    #[inline]
    pub fn direction(&self, stage: Stage) -> Option<f32> {
        self.pos.map(|p| direction_to(p, stage))
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    const STAGE: Stage = Stage::new(800.0, 600.0);

    #[test]
    fn center_pointer_maps_to_positive_zero() {
        let dir = direction_to(Vec2::new(400.0, 300.0), STAGE);
        assert_eq!(dir, 0.0);
        assert!(dir.is_sign_positive());
    }

    #[test]
    fn cardinal_pointers_map_to_cardinal_angles() {
        // +Y is down, so "below center" is +π/2.
        assert_eq!(direction_to(Vec2::new(800.0, 300.0), STAGE), 0.0);
        assert_eq!(direction_to(Vec2::new(400.0, 600.0), STAGE), FRAC_PI_2);
        assert_eq!(direction_to(Vec2::new(0.0, 300.0), STAGE), PI);
        assert_eq!(direction_to(Vec2::new(400.0, 0.0), STAGE), -FRAC_PI_2);
    }

    #[test]
    fn pointer_state_tracks_latest_sample() {
        let mut state = PointerState::new();
        assert_eq!(state.direction(STAGE), None);

        state.moved(Vec2::new(800.0, 300.0));
        state.moved(Vec2::new(400.0, 600.0));
        assert_eq!(state.direction(STAGE), Some(FRAC_PI_2));

        state.left();
        assert_eq!(state.position(), None);
        assert_eq!(state.direction(STAGE), None);
    }
}
