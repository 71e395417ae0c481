use std::f32::consts::TAU;

use rand::Rng;

use crate::config::{FluidParams, SolverConstants};
use crate::math::{Point, Real, vector, wrap_degrees};

use super::audio::AudioFrame;
use super::input::InputState;

/// A request to create `count` particles around `position`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnRequest {
    pub position: Point,
    pub count: usize,
    pub hue: Real,
    /// Half-width of the square the particles are scattered over.
    pub spread: Real,
}

/// Everything the solver needs from the outside world for one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct ReactiveFrame {
    pub constants: SolverConstants,
    pub spawns: Vec<SpawnRequest>,
}

/// Slow viscosity oscillation plus a pulse on beat frames. Equals 1 at rest.
pub fn throb(params: &FluidParams, sim_time: Real, beat: bool) -> Real {
    let wave = params.throb_depth * (TAU * params.throb_hz * sim_time).sin();
    let pulse = if beat { params.beat_pulse } else { 0.0 };
    1.0 + wave + pulse
}

/// Map audio onto this tick's solver constants.
///
/// Bass thickens the liquid and makes it fall faster; loudness grows new
/// particles.
pub fn solver_constants(params: &FluidParams, audio: &AudioFrame, sim_time: Real) -> SolverConstants {
    let audio = audio.sanitized();
    let viscosity = params.base_viscosity
        * (1.0 + audio.bass * params.viscosity_bass_gain)
        * throb(params, sim_time, audio.beat);

    SolverConstants {
        gravity: params.base_gravity * (1.0 + audio.bass * params.gravity_bass_gain),
        viscosity: viscosity.max(0.0),
        size_scale: 1.0 + audio.rms * params.size_rms_gain,
        ..SolverConstants::at_rest(params)
    }
}

/// Hue for liquid spawned now: drifts with time, shifted by spectral centroid.
pub fn spawn_hue(params: &FluidParams, audio: &AudioFrame, sim_time: Real) -> Real {
    let audio = audio.sanitized();
    wrap_degrees(sim_time * params.hue_speed + audio.centroid * params.hue_centroid_span)
}

/// Spawn requests from drag, clicks made during this tick and the
/// bass-triggered autonomous drip along the top edge.
pub fn spawn_requests<R: Rng>(
    params: &FluidParams,
    audio: &AudioFrame,
    input: &InputState,
    sim_time: Real,
    dt: Real,
    rng: &mut R,
) -> Vec<SpawnRequest> {
    let audio = audio.sanitized();
    let hue = spawn_hue(params, &audio, sim_time);
    let mut requests = Vec::new();

    if input.is_dragging && params.drag_spawn_count > 0 {
        requests.push(SpawnRequest {
            position: input.pointer,
            count: params.drag_spawn_count,
            hue,
            spread: params.drag_spawn_spread,
        });
    }

    if params.click_burst > 0 {
        for click in input.clicks_in_tick(sim_time, dt) {
            requests.push(SpawnRequest {
                position: click.position,
                count: params.click_burst,
                hue,
                spread: params.drag_spawn_spread * 2.0,
            });
        }
    }

    // Always roll so the random stream does not depend on the bass level.
    let roll: Real = rng.random();
    if audio.bass > params.auto_spawn_threshold
        && roll < audio.bass * params.auto_spawn_chance
        && params.auto_spawn_count > 0
    {
        let x = rng.random_range(0.0..=params.width());
        requests.push(SpawnRequest {
            position: vector(x, 0.0),
            count: params.auto_spawn_count,
            hue,
            spread: params.drag_spawn_spread,
        });
    }

    requests
}

pub fn map_reactive<R: Rng>(
    params: &FluidParams,
    audio: &AudioFrame,
    input: &InputState,
    sim_time: Real,
    dt: Real,
    rng: &mut R,
) -> ReactiveFrame {
    ReactiveFrame {
        constants: solver_constants(params, audio, sim_time),
        spawns: spawn_requests(params, audio, input, sim_time, dt, rng),
    }
}
