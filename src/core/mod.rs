pub mod fluid_state;
pub mod kernel;
pub mod particle;
pub mod particle_set;

pub use fluid_state::{FluidState, RenderParticle, TickReport, advance_fluid, prune_clicks};
pub use kernel::{PEAK_WEIGHT, density_weight, viscosity_weight};
pub use particle::{Particle, update_particles_health};
pub use particle_set::{Inserted, ParticleSet, SlotId};
