//! Density estimation

use crate::config::DENSITY_FLOOR;
use crate::core::kernel::{PEAK_WEIGHT, density_weight, normalized_distance};
use crate::math::Real;

use super::neighbors::NeighborPair;

/// Smoothed density per particle: the self weight plus `(1 - q)^2` for every
/// neighbor, floored at [`DENSITY_FLOOR`].
///
/// No boundary correction: particles near the walls read lower.
pub fn compute_densities(
    count: usize,
    pairs: &[NeighborPair],
    radius: Real,
    densities: &mut Vec<Real>,
) {
    densities.clear();
    densities.resize(count, PEAK_WEIGHT);

    for pair in pairs {
        let weight = density_weight(normalized_distance(pair.distance, radius));
        densities[pair.i] += weight;
        densities[pair.j] += weight;
    }

    for density in densities.iter_mut() {
        *density = density.max(DENSITY_FLOOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vector;
    use crate::solver::neighbors::find_neighbor_pairs;

    #[test]
    fn isolated_particle_reads_peak_weight() {
        let mut densities = Vec::new();
        compute_densities(1, &[], 10.0, &mut densities);
        assert_eq!(densities, vec![1.0]);
    }

    #[test]
    fn pair_at_half_radius_adds_quarter_weight() {
        let positions = [vector(0.0, 0.0), vector(5.0, 0.0)];
        let mut pairs = Vec::new();
        find_neighbor_pairs(&positions, 10.0, &mut pairs);

        let mut densities = Vec::new();
        compute_densities(positions.len(), &pairs, 10.0, &mut densities);
        for density in densities {
            assert!((density - 1.25).abs() < 1e-6);
        }
    }

    #[test]
    fn densities_never_drop_below_floor() {
        let positions: Vec<_> = (0..12)
            .map(|i| vector((i % 4) as Real * 3.0, (i / 4) as Real * 3.0))
            .collect();
        let mut pairs = Vec::new();
        find_neighbor_pairs(&positions, 8.0, &mut pairs);

        let mut densities = Vec::new();
        compute_densities(positions.len(), &pairs, 8.0, &mut densities);
        assert!(densities.iter().all(|&d| d >= DENSITY_FLOOR));
        // Corner particles have fewer neighbors than interior ones.
        assert!(densities[0] < densities[5]);
    }
}
