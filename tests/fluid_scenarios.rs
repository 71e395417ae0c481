//! End-to-end liquid scenarios
//!
//! Single-particle free fall, two-particle repulsion and FIFO capacity
//! eviction, driven through `FluidState` the way a frame loop would.

use viscous2d::math::{Real, vector};
use viscous2d::{AudioFrame, FluidParams, FluidState, InputState, SolverConstants, SpawnRequest};

const DT: Real = 1.0 / 60.0;

/// Deterministic params with no spawn jitter.
fn still_params(width: Real, height: Real) -> FluidParams {
    FluidParams::default()
        .with_domain(width, height)
        .with_spawn_velocity_jitter(0.0)
        .with_seed(42)
}

fn separation(state: &FluidState) -> Real {
    let positions: Vec<_> = state.particles().map(|p| p.position).collect();
    positions[0].distance(positions[1])
}

/// A lone particle falls with `v_N = g dt d (1 - d^N) / (1 - d)`.
#[test]
fn test_single_particle_free_fall_matches_closed_form() {
    let params = still_params(200.0, 10_000.0);
    let mut state = FluidState::new(params.clone());
    state.spawn(100.0, 10.0, 0.0);

    let audio = AudioFrame::silent();
    let input = InputState::default();
    let g = params.base_gravity;
    let d = params.damping;

    for n in 1..=30 {
        state.tick(&audio, &input, DT);
        let expected = g * DT * d * (1.0 - d.powi(n)) / (1.0 - d);
        let particle = state.particles().next().expect("particle is still alive");

        assert!(
            (particle.velocity.y - expected).abs() <= expected * 1e-3,
            "tick {}: vy = {}, expected {}",
            n,
            particle.velocity.y,
            expected
        );
        assert_eq!(particle.velocity.x, 0.0);
    }
}

/// Once it lands, a lone particle settles on the floor and drains away.
#[test]
fn test_single_particle_settles_and_is_evicted() {
    let params = still_params(200.0, 50.0);
    let mut state = FluidState::new(params.clone());
    state.spawn(100.0, 10.0, 0.0);

    let audio = AudioFrame::silent();
    let input = InputState::default();
    let mut ticks = 0;
    let mut touched_floor = false;

    while state.particle_count() > 0 && ticks < 600 {
        state.tick(&audio, &input, DT);
        ticks += 1;
        if let Some(particle) = state.particles().next() {
            assert!(particle.position.y <= params.height());
            touched_floor |= particle.position.y >= params.height() - params.settle_epsilon;
        } else {
            touched_floor = true;
        }
    }

    assert!(touched_floor);
    assert_eq!(state.particle_count(), 0, "particle never settled after {} ticks", ticks);
    assert!(ticks > 10, "particle was evicted before it could reach the floor");
}

/// Two particles half a smoothing radius apart push each other away.
#[test]
fn test_two_particle_repulsion() {
    let params = still_params(400.0, 400.0);
    let constants = SolverConstants::at_rest(&params).with_gravity(0.0);
    let h = constants.smoothing_radius;

    let mut state = FluidState::new(params);
    state.spawn(200.0, 200.0, 0.0);
    state.spawn(200.0 + 0.5 * h, 200.0, 0.0);

    let initial = separation(&state);
    state.simulate(&constants, DT);

    for particle in state.particles() {
        assert!(particle.density > constants.rest_density, "density {}", particle.density);
        assert!(particle.pressure > 0.0, "pressure {}", particle.pressure);
    }
    let (left, right) = {
        let mut iter = state.particles();
        (iter.next().cloned(), iter.next().cloned())
    };
    let (left, right) = (left.expect("two particles"), right.expect("two particles"));
    assert!(left.velocity.x < 0.0 && right.velocity.x > 0.0);
    assert!((left.velocity.x + right.velocity.x).abs() < 1e-5);

    let after_first = separation(&state);
    assert!(after_first > initial);

    state.simulate(&constants, DT);
    assert!(separation(&state) > after_first);
}

/// Spawning `max + 5` particles in one tick drops exactly the 5 oldest.
#[test]
fn test_capacity_eviction_is_fifo() {
    let max = 20;
    let params = still_params(400.0, 400.0).with_max_particles(max);
    let mut state = FluidState::new(params);

    let request = SpawnRequest {
        position: vector(200.0, 200.0),
        count: max + 5,
        hue: 30.0,
        spread: 40.0,
    };
    let (spawned, evicted) = state.apply_spawn_requests(&[request]);

    assert_eq!(spawned, max + 5);
    assert_eq!(evicted, 5);
    assert_eq!(state.particle_count(), max);
    let serials: Vec<u64> = state.particles().map(|p| p.serial).collect();
    let expected: Vec<u64> = (5..(max as u64 + 5)).collect();
    assert_eq!(serials, expected);
}

/// Same as above, but through a click burst in a full tick.
#[test]
fn test_click_burst_over_capacity_in_one_tick() {
    let max = 20;
    let params = FluidParams {
        click_burst: max + 5,
        ..still_params(400.0, 400.0).with_max_particles(max)
    };
    let mut state = FluidState::new(params);

    let mut input = InputState::default();
    input.click(vector(200.0, 200.0), state.sim_time());
    let report = state.tick(&AudioFrame::silent(), &input, DT);

    assert_eq!(report.spawned, max + 5);
    assert_eq!(report.evicted_for_capacity, 5);
    assert_eq!(state.particle_count(), max);
    assert_eq!(state.particles().map(|p| p.serial).min(), Some(5));

    // The click is now older than the window and must not fire again.
    let report = state.tick(&AudioFrame::silent(), &input, DT);
    assert_eq!(report.spawned, 0);
}

/// At high frame rates a click still fires exactly once.
#[test]
fn test_click_fires_once_at_144_hz() {
    let dt: Real = 1.0 / 144.0;
    let params = still_params(400.0, 400.0);
    let burst = params.click_burst;
    let mut state = FluidState::new(params);

    let mut input = InputState::default();
    input.click(vector(200.0, 200.0), state.sim_time());

    let first = state.tick(&AudioFrame::silent(), &input, dt);
    assert_eq!(first.spawned, burst);
    for _ in 0..5 {
        let later = state.tick(&AudioFrame::silent(), &input, dt);
        assert_eq!(later.spawned, 0);
    }
}

/// A zero-length tick defers the click to the next real tick.
#[test]
fn test_click_survives_zero_dt_tick() {
    let params = still_params(400.0, 400.0);
    let burst = params.click_burst;
    let mut state = FluidState::new(params);

    let mut input = InputState::default();
    input.click(vector(200.0, 200.0), state.sim_time());

    assert_eq!(state.tick(&AudioFrame::silent(), &input, 0.0).spawned, 0);
    assert_eq!(state.tick(&AudioFrame::silent(), &input, DT).spawned, burst);
    assert_eq!(state.tick(&AudioFrame::silent(), &input, DT).spawned, 0);
}

/// Dragging keeps pouring, and the population never exceeds capacity.
#[test]
fn test_dragging_pours_until_capacity() {
    let max = 30;
    let params = still_params(300.0, 300.0).with_max_particles(max);
    let mut state = FluidState::new(params.clone());
    let input = InputState::dragging_at(vector(150.0, 40.0));

    for _ in 0..120 {
        state.tick(&AudioFrame::silent(), &input, DT);
        assert!(state.particle_count() <= max);
    }
    assert!(state.particle_count() > 0);
    assert!(state.particles().all(|p| p.hue >= 0.0 && p.hue < 360.0));
}
