//! Boundary handling
//!
//! Stateless clamp-and-reflect against the domain rectangle, run once per
//! particle after integration.

use crate::config::FluidParams;
use crate::math::{Point, Real, Vector};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    pub width: Real,
    pub height: Real,
    pub wall_restitution: Real,
    pub top_restitution: Real,
    pub floor_restitution: Real,
    pub floor_friction: Real,
}

impl Boundary {
    pub fn from_params(params: &FluidParams) -> Self {
        Self {
            width: params.width(),
            height: params.height(),
            wall_restitution: params.wall_restitution,
            top_restitution: params.top_restitution,
            floor_restitution: params.floor_restitution,
            floor_friction: params.floor_friction,
        }
    }

    /// Clamp `position` into the domain, reflecting and attenuating the
    /// velocity component of every edge that was crossed.
    ///
    /// Landing on the floor also bleeds horizontal speed so particles spread
    /// and stop instead of sliding.
    pub fn contain(&self, position: &mut Point, velocity: &mut Vector) {
        if position.x < 0.0 {
            position.x = 0.0;
            velocity.x *= -self.wall_restitution;
        } else if position.x > self.width {
            position.x = self.width;
            velocity.x *= -self.wall_restitution;
        }

        if position.y < 0.0 {
            position.y = 0.0;
            velocity.y *= -self.top_restitution;
        } else if position.y > self.height {
            position.y = self.height;
            velocity.y *= -self.floor_restitution;
            velocity.x *= self.floor_friction;
        }
    }

    pub fn contains(&self, position: Point) -> bool {
        (0.0..=self.width).contains(&position.x) && (0.0..=self.height).contains(&position.y)
    }
}
