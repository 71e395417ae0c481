//! Liquid particles
//!
//! Particles carry position, velocity, the smoothed density and pressure from
//! the last tick, and the cosmetic hue/size the renderer reads.

use crate::config::DENSITY_FLOOR;
use crate::math::{Point, Real, Vector, is_finite_vector, zero_vector};

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Point,
    pub velocity: Vector,
    pub density: Real,
    pub pressure: Real,
    /// Hue in degrees, `[0, 360)`. Set at spawn and never changed afterwards.
    pub hue: Real,
    pub size: Real,

    // Bookkeeping
    /// Insertion order; larger means younger.
    pub serial: u64,
    pub failed: bool,
}

impl Particle {
    pub fn zeroed() -> Self {
        Self {
            position: zero_vector(),
            velocity: zero_vector(),
            density: 0.0,
            pressure: 0.0,
            hue: 0.0,
            size: 1.0,
            serial: 0,
            failed: false,
        }
    }

    pub fn new(position: Point, hue: Real) -> Self {
        Self {
            position,
            hue,
            ..Self::zeroed()
        }
    }

    pub fn with_velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_size(mut self, size: Real) -> Self {
        self.size = size;
        self
    }

    #[inline(always)]
    pub fn speed(&self) -> Real {
        self.velocity.length()
    }

    /// Density as used by force terms: never below the floor.
    #[inline(always)]
    pub fn safe_density(&self) -> Real {
        self.density.max(DENSITY_FLOOR)
    }

    #[inline(always)]
    pub fn update_health(&mut self) {
        if !is_finite_vector(self.position)
            || !is_finite_vector(self.velocity)
            || !self.density.is_finite()
            || !self.pressure.is_finite()
        {
            self.failed = true;
        }
    }
}

pub fn update_particles_health<'a>(particles: impl Iterator<Item = &'a mut Particle>) -> usize {
    let mut failed = 0;
    for particle in particles {
        particle.update_health();
        if particle.failed {
            failed += 1;
        }
    }
    failed
}
