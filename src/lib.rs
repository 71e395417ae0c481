use bevy::prelude::*;

pub mod config;
pub mod core;
pub mod math;
pub mod reactive;
pub mod solver;

// Public re-exports for clean API
pub use config::{FluidParams, SolverConstants};
pub use crate::core::{FluidState, Particle, ParticleSet, RenderParticle, TickReport};
pub use reactive::{AudioFrame, ClickEvent, InputState, SpawnRequest};

use crate::core::{advance_fluid, prune_clicks};

/// Inserts the liquid resources and runs one solver tick per frame.
///
/// Whatever feeds [`AudioFrame`] and [`InputState`] should run before
/// [`FluidSet::Simulate`]; renderers read [`FluidState::snapshot`] after it.
#[derive(Default)]
pub struct ViscousPlugin {
    pub params: FluidParams,
}

impl ViscousPlugin {
    pub fn with_params(params: FluidParams) -> Self {
        Self { params }
    }
}

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FluidSet {
    Simulate,
}

impl Plugin for ViscousPlugin {
    fn build(&self, app: &mut App) {
        let state = FluidState::new(self.params.clone());
        info!(
            "viscous liquid: capacity {}, domain {}x{}, h={}",
            state.params().max_particles,
            state.params().width(),
            state.params().height(),
            state.params().smoothing_radius
        );

        app.insert_resource(state)
            .init_resource::<AudioFrame>()
            .init_resource::<InputState>()
            .add_systems(
                Update,
                (advance_fluid, prune_clicks).chain().in_set(FluidSet::Simulate),
            );
    }
}
