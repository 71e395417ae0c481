//! Force accumulation
//!
//! Pairwise pressure and viscosity plus per-particle gravity. Particles have
//! unit mass, so forces are accelerations.

use crate::config::{DENSITY_FLOOR, SolverConstants};
use crate::core::kernel::{normalized_distance, viscosity_weight};
use crate::math::{DISTANCE_EPSILON, Real, Vector, down};

use super::neighbors::NeighborPair;

/// Pressure force on particle `i` from `j`, `normal` being the unit vector
/// from `i` to `j`.
///
/// Magnitude `(p_i + p_j) / (2 * rho)`, where `rho` is the mean of `density_i`
/// and `density_j` rather than `density_j` alone. Swapping the particles
/// negates the result.
#[inline]
pub fn pressure_force(
    normal: Vector,
    pressure_i: Real,
    pressure_j: Real,
    density_i: Real,
    density_j: Real,
) -> Vector {
    let mean_density = 0.5 * (density_i.max(DENSITY_FLOOR) + density_j.max(DENSITY_FLOOR));
    let magnitude = (pressure_i + pressure_j) / (2.0 * mean_density);
    -normal * magnitude
}

/// Viscosity force on particle `i` from `j`: the relative velocity projected on
/// the separation, faded out towards the cutoff.
#[inline]
pub fn viscosity_force(
    normal: Vector,
    velocity_i: Vector,
    velocity_j: Vector,
    viscosity: Real,
    q: Real,
) -> Vector {
    let approach = (velocity_j - velocity_i).dot(normal);
    normal * (viscosity * approach * viscosity_weight(q))
}

#[inline]
pub fn gravity_force(constants: &SolverConstants) -> Vector {
    down() * constants.gravity
}

/// Sum gravity, pressure and viscosity into `forces`.
///
/// Each pair is evaluated once and applied to both particles with opposite
/// signs. Coincident pairs contribute nothing.
pub fn accumulate_forces(
    pairs: &[NeighborPair],
    velocities: &[Vector],
    densities: &[Real],
    pressures: &[Real],
    constants: &SolverConstants,
    forces: &mut Vec<Vector>,
) {
    forces.clear();
    forces.resize(velocities.len(), gravity_force(constants));

    for pair in pairs {
        if pair.distance <= DISTANCE_EPSILON {
            continue;
        }
        let (i, j) = (pair.i, pair.j);
        let normal = pair.offset / pair.distance;
        let q = normalized_distance(pair.distance, constants.smoothing_radius);

        let force = pressure_force(normal, pressures[i], pressures[j], densities[i], densities[j])
            + viscosity_force(normal, velocities[i], velocities[j], constants.viscosity, q);

        forces[i] += force;
        forces[j] -= force;
    }
}
