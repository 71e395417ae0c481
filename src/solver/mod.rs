//! Liquid solver stages
//!
//! Each stage is a plain function over flat slices. [`SolverWorkspace`] gathers
//! the live particles into those slices, runs the stages in order and writes
//! the results back to the arena.

pub mod boundary;
pub mod density;
pub mod forces;
pub mod integrate;
pub mod neighbors;
pub mod pressure;

pub use boundary::Boundary;
pub use density::compute_densities;
pub use forces::{accumulate_forces, gravity_force, pressure_force, viscosity_force};
pub use integrate::{damping_factor, integrate};
pub use neighbors::{NeighborPair, find_neighbor_pairs, neighbors_of};
pub use pressure::{compute_pressures, pressure};

use std::time::Instant;

use crate::config::{FluidParams, SolverConstants};
use crate::core::{ParticleSet, SlotId};
use crate::math::{Point, Real, Vector};

/// Wall-clock cost of the last solver pass, in milliseconds.
#[derive(Clone, Copy, Debug, Default)]
pub struct StageTimings {
    pub neighbors_ms: f32,
    pub density_ms: f32,
    pub forces_ms: f32,
    pub integrate_ms: f32,
}

/// Scratch buffers reused from tick to tick.
#[derive(Clone, Default)]
pub struct SolverWorkspace {
    slots: Vec<SlotId>,
    positions: Vec<Point>,
    velocities: Vec<Vector>,
    densities: Vec<Real>,
    pressures: Vec<Real>,
    forces: Vec<Vector>,
    pairs: Vec<NeighborPair>,
}

impl SolverWorkspace {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            positions: Vec::with_capacity(capacity),
            velocities: Vec::with_capacity(capacity),
            densities: Vec::with_capacity(capacity),
            pressures: Vec::with_capacity(capacity),
            forces: Vec::with_capacity(capacity),
            pairs: Vec::new(),
        }
    }

    pub fn pairs(&self) -> &[NeighborPair] {
        &self.pairs
    }

    pub fn forces(&self) -> &[Vector] {
        &self.forces
    }

    pub fn gather(&mut self, set: &ParticleSet) {
        self.slots.clear();
        self.positions.clear();
        self.velocities.clear();

        for slot in set.slot_ids() {
            if let Some(particle) = set.get(slot) {
                self.slots.push(slot);
                self.positions.push(particle.position);
                self.velocities.push(particle.velocity);
            }
        }
    }

    /// Neighbor query, density and pressure for the gathered particles.
    pub fn estimate_density(&mut self, constants: &SolverConstants, timings: &mut StageTimings) {
        let start = Instant::now();
        find_neighbor_pairs(&self.positions, constants.smoothing_radius, &mut self.pairs);
        timings.neighbors_ms = start.elapsed().as_secs_f32() * 1000.0;

        let start = Instant::now();
        compute_densities(
            self.positions.len(),
            &self.pairs,
            constants.smoothing_radius,
            &mut self.densities,
        );
        compute_pressures(&self.densities, constants, &mut self.pressures);
        timings.density_ms = start.elapsed().as_secs_f32() * 1000.0;
    }

    pub fn accumulate_forces(&mut self, constants: &SolverConstants, timings: &mut StageTimings) {
        let start = Instant::now();
        accumulate_forces(
            &self.pairs,
            &self.velocities,
            &self.densities,
            &self.pressures,
            constants,
            &mut self.forces,
        );
        timings.forces_ms = start.elapsed().as_secs_f32() * 1000.0;
    }

    pub fn integrate(&mut self, dt: Real, params: &FluidParams, timings: &mut StageTimings) {
        let start = Instant::now();
        integrate(
            &mut self.positions,
            &mut self.velocities,
            &self.forces,
            dt,
            params,
        );
        timings.integrate_ms = start.elapsed().as_secs_f32() * 1000.0;
    }

    /// Write positions, velocities, densities and pressures back to the arena.
    pub fn scatter(&self, set: &mut ParticleSet) {
        for (index, &slot) in self.slots.iter().enumerate() {
            if let Some(particle) = set.get_mut(slot) {
                particle.position = self.positions[index];
                particle.velocity = self.velocities[index];
                particle.density = self.densities[index];
                particle.pressure = self.pressures[index];
            }
        }
    }

    /// Run every numerical stage on `set`: gather, density, pressure, forces,
    /// integration, scatter.
    pub fn step(
        &mut self,
        set: &mut ParticleSet,
        constants: &SolverConstants,
        params: &FluidParams,
        dt: Real,
    ) -> StageTimings {
        let mut timings = StageTimings::default();
        self.gather(set);
        self.estimate_density(constants, &mut timings);
        self.accumulate_forces(constants, &mut timings);
        self.integrate(dt, params, &mut timings);
        self.scatter(set);
        timings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Particle;
    use crate::math::vector;

    #[test]
    fn step_writes_density_and_pressure_back() {
        let params = FluidParams::default();
        let constants = SolverConstants::at_rest(&params).with_gravity(0.0);
        let mut set = ParticleSet::with_capacity(4);
        let h = constants.smoothing_radius;
        set.insert(Particle::new(vector(100.0, 100.0), 0.0));
        set.insert(Particle::new(vector(100.0 + 0.5 * h, 100.0), 0.0));

        let mut workspace = SolverWorkspace::with_capacity(4);
        workspace.step(&mut set, &constants, &params, params.reference_dt);

        assert_eq!(workspace.pairs().len(), 1);
        for particle in set.iter() {
            assert!((particle.density - 1.25).abs() < 1e-5);
            assert!(particle.pressure > 0.0);
        }
    }

    #[test]
    fn scatter_skips_slots_removed_since_gather() {
        let params = FluidParams::default();
        let constants = SolverConstants::at_rest(&params);
        let mut set = ParticleSet::with_capacity(2);
        let slot = set
            .insert(Particle::new(vector(10.0, 10.0), 0.0))
            .map(|inserted| inserted.slot)
            .expect("capacity is non-zero");

        let mut workspace = SolverWorkspace::default();
        let mut timings = StageTimings::default();
        workspace.gather(&set);
        workspace.estimate_density(&constants, &mut timings);
        workspace.accumulate_forces(&constants, &mut timings);
        set.remove(slot);
        workspace.scatter(&mut set);
        assert!(set.is_empty());
    }
}
