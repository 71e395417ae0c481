use crate::math::Real;

/// Self-contribution of a particle to its own density.
pub const PEAK_WEIGHT: Real = 1.0;

/// Normalized distance `q = r / h`.
#[inline]
pub fn normalized_distance(distance: Real, radius: Real) -> Real {
    distance / radius
}

/// Quadratic density kernel `(1 - q)^2`.
///
/// Peaks at 1 for `q = 0`, falls monotonically and is zero from `q = 1` on.
/// Not mass-normalized: densities are relative, a lone particle reads 1.
#[inline]
pub fn density_weight(q: Real) -> Real {
    if !(0.0..1.0).contains(&q) {
        return if q < 0.0 { PEAK_WEIGHT } else { 0.0 };
    }
    let falloff = 1.0 - q;
    falloff * falloff
}

/// Linear falloff `1 - q` used to fade viscosity out towards the cutoff.
#[inline]
pub fn viscosity_weight(q: Real) -> Real {
    (1.0 - q).clamp(0.0, 1.0)
}
