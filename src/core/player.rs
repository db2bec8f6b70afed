//! Runner vertical kinematics: gravity, jump impulse, ground contact.

use super::collision::Aabb;
use super::GROUND_ROW;

/// Runner fixed horizontal column (left edge).
pub const RUNNER_COL: u16 = 6;
/// Runner width in columns.
pub const RUNNER_WIDTH: u16 = 2;
/// Runner height in rows.
pub const RUNNER_HEIGHT: u16 = 2;

/// The runner. The horizontal position never changes; only the vertical
/// axis simulates. `y` is the feet row (float for smooth physics, lower
/// values = higher in the air).
#[derive(Debug, Clone)]
pub struct Player {
    pub y: f64,
    /// Vertical velocity in rows/sec (negative = upward).
    pub velocity: f64,
    pub grounded: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            y: GROUND_ROW as f64,
            velocity: 0.0,
            grounded: true,
        }
    }

    /// Start a jump. Silently ignored while airborne.
    pub fn apply_jump_impulse(&mut self, impulse: f64) {
        if !self.grounded {
            return;
        }
        self.velocity = impulse;
        self.grounded = false;
    }

    /// Advance the vertical simulation by `dt` seconds. The feet never
    /// pass the ground row; landing zeroes the velocity.
    pub fn integrate(&mut self, dt: f64, gravity: f64) {
        self.velocity += gravity * dt;
        self.y += self.velocity * dt;
        if self.y >= GROUND_ROW as f64 {
            self.y = GROUND_ROW as f64;
            self.velocity = 0.0;
            self.grounded = true;
        }
    }

    /// Bounding box: feet at `y`, extending `RUNNER_HEIGHT` rows up.
    pub fn bounds(&self) -> Aabb {
        Aabb {
            x: RUNNER_COL as f64,
            y: self.y - RUNNER_HEIGHT as f64,
            w: RUNNER_WIDTH as f64,
            h: RUNNER_HEIGHT as f64,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
