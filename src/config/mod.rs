//! Configuration and parameters
//!
//! Default constants, the fixed `FluidParams` resource and the per-tick
//! `SolverConstants` derived from it.

pub mod constants;
pub mod fluid_params;
pub mod solver_constants;

pub use constants::*;
pub use fluid_params::*;
pub use solver_constants::*;
