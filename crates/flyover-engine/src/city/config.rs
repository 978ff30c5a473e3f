use anyhow::{Result, ensure};

/// City tuning parameters, fixed for the lifetime of a layout.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CityConfig {
    /// Distance between building grid origins, in pixels.
    pub spacing: f32,

    /// Perspective divisor for the face projection. Smaller values lean the
    /// walls harder; the sign convention of the projection assumes it is
    /// positive.
    pub perspective: f32,
}

impl CityConfig {
    #[inline]
    pub const fn new(spacing: f32, perspective: f32) -> Self {
        Self {
            spacing,
            perspective,
        }
    }

    pub(crate) fn validate(self) -> Result<()> {
        ensure!(
            self.spacing.is_finite() && self.spacing > 0.0,
            "spacing must be positive and finite, got {}",
            self.spacing
        );
        ensure!(
            self.perspective.is_finite() && self.perspective != 0.0,
            "perspective must be finite and nonzero, got {}",
            self.perspective
        );
        Ok(())
    }
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            spacing: 150.0,
            perspective: 500.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(CityConfig::default().validate().is_ok());
    }

    #[test]
    fn degenerate_configs_are_rejected() {
        assert!(CityConfig::new(0.0, 500.0).validate().is_err());
        assert!(CityConfig::new(-150.0, 500.0).validate().is_err());
        assert!(CityConfig::new(f32::NAN, 500.0).validate().is_err());
        assert!(CityConfig::new(150.0, 0.0).validate().is_err());
        assert!(CityConfig::new(150.0, f32::INFINITY).validate().is_err());
    }
}
