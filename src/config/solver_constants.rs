use crate::math::Real;

use super::FluidParams;

/// Solver constants for a single tick.
///
/// Built once per tick by the reactive mapper and handed by reference to every
/// solver stage, so no stage reads audio or input directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConstants {
    pub smoothing_radius: Real,
    pub rest_density: Real,
    pub gas_constant: Real,
    /// Downward acceleration for this tick.
    pub gravity: Real,
    /// Viscosity coefficient for this tick.
    pub viscosity: Real,
    /// Multiplier on freshly spawned particle sizes.
    pub size_scale: Real,
}

impl SolverConstants {
    /// Constants with no external influence: silent audio, no throb.
    pub fn at_rest(params: &FluidParams) -> Self {
        Self {
            smoothing_radius: params.smoothing_radius,
            rest_density: params.rest_density,
            gas_constant: params.gas_constant,
            gravity: params.base_gravity,
            viscosity: params.base_viscosity,
            size_scale: 1.0,
        }
    }

    pub fn with_gravity(mut self, gravity: Real) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_viscosity(mut self, viscosity: Real) -> Self {
        self.viscosity = viscosity;
        self
    }
}
