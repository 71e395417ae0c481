//! Equation of state

use crate::config::SolverConstants;
use crate::math::Real;

/// `gas_constant * (density - rest_density)`. Negative below rest density,
/// which gives sparse particles a mild pull towards each other.
#[inline]
pub fn pressure(density: Real, constants: &SolverConstants) -> Real {
    constants.gas_constant * (density - constants.rest_density)
}

pub fn compute_pressures(densities: &[Real], constants: &SolverConstants, pressures: &mut Vec<Real>) {
    pressures.clear();
    pressures.extend(densities.iter().map(|&density| pressure(density, constants)));
}
