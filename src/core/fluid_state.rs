use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{FluidParams, MAX_FRAME_DT, SolverConstants};
use crate::math::{Point, Real, vector, wrap_degrees};
use crate::reactive::{AudioFrame, InputState, SpawnRequest, map_reactive};
use crate::solver::{Boundary, SolverWorkspace, StageTimings};

use super::particle::{Particle, update_particles_health};
use super::particle_set::{ParticleSet, SlotId};

/// What the renderer gets for each live particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderParticle {
    pub position: Point,
    pub density: Real,
    /// Opacity derived from density, in `[min_alpha, 1]`.
    pub alpha: Real,
    pub hue: Real,
    pub size: Real,
}

/// Bookkeeping for one tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickReport {
    pub spawned: usize,
    pub evicted_for_capacity: usize,
    pub settled: usize,
    pub failed: usize,
    pub timings: StageTimings,
}

/// Aggregate simulation state for the liquid.
#[derive(Resource)]
pub struct FluidState {
    particle_set: ParticleSet,
    params: FluidParams,
    boundary: Boundary,
    workspace: SolverWorkspace,
    rng: StdRng,
    constants: SolverConstants,
    sim_time: Real,
    frame: u64,
    last_report: TickReport,
    pub paused: bool,
}

impl FluidState {
    pub fn new(params: FluidParams) -> Self {
        let params = params.validated();
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            particle_set: ParticleSet::with_capacity(params.max_particles),
            boundary: Boundary::from_params(&params),
            workspace: SolverWorkspace::with_capacity(params.max_particles),
            constants: SolverConstants::at_rest(&params),
            rng,
            params,
            sim_time: 0.0,
            frame: 0,
            last_report: TickReport::default(),
            paused: false,
        }
    }

    pub fn params(&self) -> &FluidParams {
        &self.params
    }

    pub fn particle_set(&self) -> &ParticleSet {
        &self.particle_set
    }

    pub fn particle_set_mut(&mut self) -> &mut ParticleSet {
        &mut self.particle_set
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.particle_set.iter()
    }

    pub fn particle_count(&self) -> usize {
        self.particle_set.len()
    }

    pub fn sim_time(&self) -> Real {
        self.sim_time
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Constants used by the most recent tick.
    pub fn constants(&self) -> &SolverConstants {
        &self.constants
    }

    pub fn last_report(&self) -> &TickReport {
        &self.last_report
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Create one particle at `(x, y)` with random velocity jitter and size.
    /// The hue is wrapped into `[0, 360)`.
    ///
    /// Evicts the oldest particle when the store is full. Returns the slot and
    /// whether an eviction happened.
    pub fn spawn(&mut self, x: Real, y: Real, hue: Real) -> Option<(SlotId, bool)> {
        let jitter = self.params.spawn_velocity_jitter;
        let velocity = vector(
            self.rng.random_range(-jitter..=jitter),
            self.rng.random_range(-jitter..=jitter),
        );
        let (min_size, max_size) = self.params.size_range;
        let size = self.rng.random_range(min_size..=max_size) * self.constants.size_scale;

        let particle = Particle::new(vector(x, y), wrap_degrees(hue))
            .with_velocity(velocity)
            .with_size(size);
        self.particle_set
            .insert(particle)
            .map(|inserted| (inserted.slot, inserted.evicted.is_some()))
    }

    /// Apply spawn requests, scattering each burst over its spread square and
    /// keeping it inside the domain. Returns `(spawned, evicted)`.
    pub fn apply_spawn_requests(&mut self, requests: &[SpawnRequest]) -> (usize, usize) {
        let mut spawned = 0;
        let mut evicted = 0;

        for request in requests {
            for _ in 0..request.count {
                let offset = if request.spread > 0.0 && request.spread.is_finite() {
                    vector(
                        self.rng.random_range(-request.spread..=request.spread),
                        self.rng.random_range(-request.spread..=request.spread),
                    )
                } else {
                    Vec2::ZERO
                };
                let position = (request.position + offset).clamp(Vec2::ZERO, self.params.domain);

                if let Some((_, did_evict)) = self.spawn(position.x, position.y, request.hue) {
                    spawned += 1;
                    evicted += usize::from(did_evict);
                }
            }
        }

        (spawned, evicted)
    }

    pub fn evict_settled(&mut self) -> usize {
        self.particle_set.evict_settled(
            self.params.height(),
            self.params.settle_epsilon,
            self.params.settle_speed,
        )
    }

    /// The numerical part of a tick with explicit constants: neighbors,
    /// density, pressure, forces, integration, boundary and the health pass.
    /// Does not spawn, evict or advance the clock.
    pub fn simulate(&mut self, constants: &SolverConstants, dt: Real) -> (StageTimings, usize) {
        let timings = self
            .workspace
            .step(&mut self.particle_set, constants, &self.params, dt);

        let boundary = self.boundary;
        for particle in self.particle_set.iter_mut() {
            boundary.contain(&mut particle.position, &mut particle.velocity);
        }

        let failed = update_particles_health(self.particle_set.iter_mut());
        if failed > 0 {
            let removed = self.particle_set.remove_failed();
            warn!("removed {} particles with non-finite state", removed);
        }

        (timings, failed)
    }

    /// Advance the liquid by `dt` seconds using this frame's audio and input.
    pub fn tick(&mut self, audio: &AudioFrame, input: &InputState, dt: Real) -> TickReport {
        let dt = dt.max(0.0);
        let reactive = map_reactive(&self.params, audio, input, self.sim_time, dt, &mut self.rng);
        self.constants = reactive.constants;

        let (spawned, evicted_for_capacity) = self.apply_spawn_requests(&reactive.spawns);
        let constants = self.constants;
        let (timings, failed) = self.simulate(&constants, dt);
        let settled = self.evict_settled();

        self.sim_time += dt;
        self.frame += 1;

        debug!(
            "tick {}: n={} neighbors={:.3}ms density={:.3}ms forces={:.3}ms integrate={:.3}ms",
            self.frame,
            self.particle_set.len(),
            timings.neighbors_ms,
            timings.density_ms,
            timings.forces_ms,
            timings.integrate_ms
        );

        self.last_report = TickReport {
            spawned,
            evicted_for_capacity,
            settled,
            failed,
            timings,
        };
        self.last_report
    }

    /// Read-only view for the renderer. Borrows the state, so it cannot be
    /// kept across ticks.
    pub fn snapshot(&self) -> impl Iterator<Item = RenderParticle> + '_ {
        let scale = self.params.alpha_density_scale.max(Real::EPSILON);
        let min_alpha = self.params.min_alpha.clamp(0.0, 1.0);

        self.particle_set.iter().map(move |particle| RenderParticle {
            position: particle.position,
            density: particle.density,
            alpha: (particle.density / scale).clamp(min_alpha, 1.0),
            hue: particle.hue,
            size: particle.size,
        })
    }

    /// Drop clicks that no future tick will consume. The clock is frozen while
    /// paused, so clicks made then are discarded instead of firing on resume.
    pub fn retire_clicks(&self, input: &mut InputState) {
        if self.paused {
            input.clicks.clear();
        } else {
            input.prune(self.sim_time, self.params.click_retention);
        }
    }

    pub fn reset(&mut self) {
        self.particle_set.clear();
        self.sim_time = 0.0;
        self.frame = 0;
        self.constants = SolverConstants::at_rest(&self.params);
        self.last_report = TickReport::default();
        info!("liquid reset");
    }
}

pub fn advance_fluid(
    time: Res<Time>,
    audio: Res<AudioFrame>,
    input: Res<InputState>,
    mut state: ResMut<FluidState>,
) {
    if state.paused {
        return;
    }
    let dt = time.delta_secs().min(MAX_FRAME_DT);
    state.tick(&audio, &input, dt);
}

pub fn prune_clicks(state: Res<FluidState>, mut input: ResMut<InputState>) {
    state.retire_clicks(&mut input);
}
