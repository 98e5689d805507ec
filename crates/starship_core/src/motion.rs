//! Forward-motion rule
//!
//! The ship cruises towards the camera in small steps until its depth offset
//! reaches the dash threshold, then dashes forward in large steps forever.
//! There is no upper bound and no reset.

/// Constants of the motion rule
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    /// Depth offset on the first frame
    pub start_position: f64,
    /// Step per frame before the dash
    pub cruise_speed: f64,
    /// Position at or beyond which the dash begins
    pub dash_threshold: f64,
    /// Step per frame once dashing
    pub dash_speed: f64,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            start_position: -5.0,
            cruise_speed: 0.02,
            dash_threshold: -2.0,
            dash_speed: 0.5,
        }
    }
}

/// Ship depth offset and dash flag
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShipMotion {
    pub position: f64,
    pub dashing: bool,
}

impl ShipMotion {
    /// Motion state at the start of the flight
    pub fn new(params: &MotionParams) -> Self {
        Self {
            position: params.start_position,
            dashing: false,
        }
    }

    /// Apply one frame of the motion rule
    ///
    /// While cruising the position grows by `cruise_speed` and the flag is
    /// raised on the step that brings it to the threshold. Once dashing the
    /// position grows by `dash_speed`.
    #[must_use]
    pub fn advance(self, params: &MotionParams) -> Self {
        if self.dashing {
            Self {
                position: self.position + params.dash_speed,
                dashing: true,
            }
        } else {
            let position = self.position + params.cruise_speed;
            Self {
                position,
                dashing: position >= params.dash_threshold,
            }
        }
    }

    /// Apply the motion rule `steps` times
    #[must_use]
    pub fn advance_by(self, params: &MotionParams, steps: usize) -> Self {
        (0..steps).fold(self, |motion, _| motion.advance(params))
    }

    /// Human-readable phase name
    pub fn phase(&self) -> &'static str {
        if self.dashing {
            "dash"
        } else {
            "cruise"
        }
    }
}

impl Default for ShipMotion {
    fn default() -> Self {
        Self::new(&MotionParams::default())
    }
}
