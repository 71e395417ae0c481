//! Semi-implicit Euler integration

use crate::config::FluidParams;
use crate::math::{Point, Real, Vector, clamp_length};

/// Per-tick damping factor. Exactly `damping` when `dt == reference_dt` and 1
/// when no time passes.
#[inline]
pub fn damping_factor(damping: Real, dt: Real, reference_dt: Real) -> Real {
    if dt <= 0.0 {
        1.0
    } else {
        damping.powf(dt / reference_dt)
    }
}

/// `v += f * dt`, clamp speed, `x += v * dt`, then damp `v`.
///
/// A non-positive `dt` leaves everything untouched.
pub fn integrate(
    positions: &mut [Point],
    velocities: &mut [Vector],
    forces: &[Vector],
    dt: Real,
    params: &FluidParams,
) {
    if dt <= 0.0 {
        return;
    }
    let damping = damping_factor(params.damping, dt, params.reference_dt);

    for ((position, velocity), force) in positions.iter_mut().zip(velocities.iter_mut()).zip(forces) {
        *velocity += *force * dt;
        *velocity = clamp_length(*velocity, params.max_speed);
        *position += *velocity * dt;
        *velocity *= damping;
    }
}
