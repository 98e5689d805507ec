//! Ship simulation system
//!
//! Owns the ship motion state and advances it once per presented frame.
//! The state is passed through [`ShipMotion::advance`] by value.

use starship_core::{MotionParams, ShipMotion};

/// Result of a simulation update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    /// The dash phase began on this frame
    pub dash_started: bool,
}

/// Manages the per-frame motion update
pub struct SimulationSystem {
    params: MotionParams,
    motion: ShipMotion,
    frame: u64,
}

impl SimulationSystem {
    /// Create a new simulation system at the start of the flight
    pub fn new(params: MotionParams) -> Self {
        Self {
            motion: ShipMotion::new(&params),
            params,
            frame: 0,
        }
    }

    /// Current motion state
    pub fn motion(&self) -> &ShipMotion {
        &self.motion
    }

    /// Number of updates applied so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Run one simulation frame
    pub fn update(&mut self) -> SimulationResult {
        let was_dashing = self.motion.dashing;
        self.motion = self.motion.advance(&self.params);
        self.frame += 1;

        let dash_started = !was_dashing && self.motion.dashing;
        if dash_started {
            log::info!(
                "Dash engaged on frame {} at z={:.3}",
                self.frame,
                self.motion.position
            );
        }

        SimulationResult { dash_started }
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new(MotionParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_construction() {
        let sim = SimulationSystem::default();
        assert_eq!(sim.frame(), 0);
        assert_eq!(sim.motion().position, -5.0);
        assert!(!sim.motion().dashing);
    }

    #[test]
    fn test_dash_reported_once() {
        let mut sim = SimulationSystem::default();
        let mut reports = 0;
        for _ in 0..400 {
            if sim.update().dash_started {
                reports += 1;
            }
        }
        assert_eq!(reports, 1);
        assert_eq!(sim.frame(), 400);
        assert!(sim.motion().dashing);
    }

    #[test]
    fn test_update_matches_motion_rule() {
        let params = MotionParams::default();
        let mut sim = SimulationSystem::new(params);
        let mut expected = ShipMotion::new(&params);
        for _ in 0..300 {
            sim.update();
            expected = expected.advance(&params);
            assert_eq!(*sim.motion(), expected);
        }
    }
}
