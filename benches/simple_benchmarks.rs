/// Simple custom benchmarking without criterion
/// Keeps the bench build free of extra dev-dependencies
use std::time::Instant;
use bevy::prelude::*;
use viscous2d::solver::{SolverWorkspace, compute_densities, find_neighbor_pairs};
use viscous2d::{AudioFrame, FluidParams, FluidState, InputState, SolverConstants};

fn time_it<F: FnMut()>(name: &str, iterations: usize, mut f: F) {
    // Warmup
    for _ in 0..5 {
        f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    let elapsed = start.elapsed();

    let avg_ms = elapsed.as_secs_f64() * 1000.0 / iterations as f64;
    println!("{}: {:.3}ms avg ({} iterations)", name, avg_ms, iterations);
}

/// A square block of particles spaced at half a smoothing radius.
fn create_test_state(count: usize) -> FluidState {
    let params = FluidParams::default()
        .with_domain(2000.0, 2000.0)
        .with_max_particles(count)
        .with_seed(7);
    let spacing = params.smoothing_radius * 0.5;
    let side = (count as f32).sqrt().ceil() as usize;
    let mut state = FluidState::new(params);

    'fill: for x in 0..side {
        for y in 0..side {
            if state.particle_count() >= count {
                break 'fill;
            }
            state.spawn(100.0 + x as f32 * spacing, 100.0 + y as f32 * spacing, 30.0);
        }
    }

    state
}

fn main() {
    println!("\n=== viscous2d Benchmarks ===\n");

    println!("--- Neighbors + Density ---");
    for &count in &[100, 200, 400, 800] {
        let state = create_test_state(count);
        let radius = state.params().smoothing_radius;
        let positions: Vec<Vec2> = state.particles().map(|p| p.position).collect();
        let mut pairs = Vec::new();
        let mut densities = Vec::new();

        time_it(&format!("neighbors+density (n={})", count), 50, || {
            find_neighbor_pairs(&positions, radius, &mut pairs);
            compute_densities(positions.len(), &pairs, radius, &mut densities);
        });
    }

    println!("\n--- Solver Step ---");
    for &count in &[100, 200, 400, 800] {
        let mut state = create_test_state(count);
        let params = state.params().clone();
        let constants = SolverConstants::at_rest(&params);
        let mut workspace = SolverWorkspace::with_capacity(count);

        time_it(&format!("workspace.step (n={})", count), 20, || {
            workspace.step(state.particle_set_mut(), &constants, &params, 1.0 / 60.0);
        });
    }

    println!("\n--- Full Tick ---");
    let audio = AudioFrame::silent().with_bass(0.8).with_rms(0.5);
    let input = InputState::dragging_at(Vec2::new(400.0, 50.0));
    for &count in &[100, 200, 400] {
        let mut state = create_test_state(count);

        time_it(&format!("tick (n={})", count), 20, || {
            state.tick(&audio, &input, 1.0 / 60.0);
        });
    }

    println!("\n=== Benchmark Complete ===\n");
}
