//! Simulation tunables.
//!
//! Every knob the stepper reads lives here so hosts can retune the feel
//! without a rebuild: the facade accepts a JSON blob (camelCase keys,
//! missing fields keep their defaults) and the defaults reproduce the
//! production contact-card animation exactly.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimConfig {
    /// Downward acceleration per frame (px/frame^2)
    pub gravity: f32,
    /// Velocity multiplier applied every frame while airborne
    pub air_friction: f32,
    /// Horizontal velocity multiplier on floor contact
    pub ground_friction: f32,
    /// Hard per-axis speed cap (px/frame)
    pub max_speed: f32,
    /// Restitution against container walls
    pub wall_bounce: f32,
    /// Restitution between two tags
    pub body_bounce: f32,
    /// Horizontal damping when tags stack vertically
    pub stack_friction: f32,
    /// Fall asleep below this speed
    pub sleep_speed: f32,
    /// Wake back up above this speed (hysteresis gap with `sleep_speed`)
    pub wake_speed: f32,
    /// Sleeping also requires downward speed below this
    pub sleep_max_fall: f32,
    /// Sleeping also requires the bottom edge within this distance of the floor
    pub floor_snap: f32,
    /// Positional solver passes per frame
    pub solver_iterations: u32,
    /// Penetration depth tolerated without correction
    pub slop: f32,
    /// Fraction of excess penetration corrected per pass
    pub baumgarte: f32,
    /// How far a dragged tag may leave the container on each side
    pub drag_slack: f32,
    /// Multiplier from pointer speed (px/ms) to release velocity (px/frame)
    pub fling_scale: f32,
    /// Per-axis cap on release velocity
    pub max_fling_speed: f32,
    /// Vertical gap between the container top and the first spawned tag
    pub spawn_clearance: f32,
    /// Extra height added per spawn index
    pub spawn_stagger: f32,
    /// Horizontal columns the spawn scatter cycles through
    pub spawn_columns: u32,
    /// Magnitude of the random horizontal velocity given at spawn
    pub scatter_speed: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            gravity: 0.5,
            air_friction: 0.9,
            ground_friction: 0.8,
            max_speed: 30.0,
            wall_bounce: 0.2,
            body_bounce: 0.05,
            stack_friction: 0.95,
            sleep_speed: 0.25,
            wake_speed: 0.5,
            sleep_max_fall: 0.5,
            floor_snap: 1.0,
            solver_iterations: 8,
            slop: 0.5,
            baumgarte: 0.2,
            drag_slack: 20.0,
            fling_scale: 10.0,
            max_fling_speed: 20.0,
            spawn_clearance: 100.0,
            spawn_stagger: 50.0,
            spawn_columns: 4,
            scatter_speed: 1.5,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SimConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Threshold below which a floor bounce is flattened to rest
    pub fn micro_bounce_cutoff(&self) -> f32 {
        self.gravity * 1.5
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.solver_iterations == 0 {
            return Err("solverIterations must be at least 1".to_string());
        }
        if self.max_speed <= 0.0 {
            return Err(format!("maxSpeed must be positive, got {}", self.max_speed));
        }
        if self.max_fling_speed <= 0.0 {
            return Err(format!(
                "maxFlingSpeed must be positive, got {}",
                self.max_fling_speed
            ));
        }
        if self.wake_speed < self.sleep_speed {
            return Err(format!(
                "wakeSpeed ({}) must not be below sleepSpeed ({})",
                self.wake_speed, self.sleep_speed
            ));
        }
        if !(0.0..=1.0).contains(&self.air_friction) {
            return Err(format!(
                "airFriction must be within 0..=1, got {}",
                self.air_friction
            ));
        }
        if !(0.0..=1.0).contains(&self.baumgarte) {
            return Err(format!(
                "baumgarte must be within 0..=1, got {}",
                self.baumgarte
            ));
        }
        Ok(())
    }
}
