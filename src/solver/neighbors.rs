//! Neighbor query
//!
//! Naive all-pairs scan. Fine for a few hundred particles; a spatial hash
//! bucketed by `h` is the upgrade path if the capacity grows.

use crate::math::{Point, Real, Vector};

/// Two particles closer than the smoothing radius, `i < j`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeighborPair {
    pub i: usize,
    pub j: usize,
    /// `x_j - x_i`
    pub offset: Vector,
    pub distance: Real,
}

/// Collect every unordered pair with distance `< radius` into `pairs`.
///
/// `pairs` is cleared first so the buffer can be reused across ticks.
pub fn find_neighbor_pairs(positions: &[Point], radius: Real, pairs: &mut Vec<NeighborPair>) {
    pairs.clear();
    let radius_squared = radius * radius;

    for (i, &position_i) in positions.iter().enumerate() {
        for (j, &position_j) in positions.iter().enumerate().skip(i + 1) {
            let offset = position_j - position_i;
            let distance_squared = offset.length_squared();
            // Most pairs are rejected here without a sqrt.
            if distance_squared >= radius_squared {
                continue;
            }
            pairs.push(NeighborPair {
                i,
                j,
                offset,
                distance: distance_squared.sqrt(),
            });
        }
    }
}

/// Indices of the neighbors of particle `index`.
pub fn neighbors_of(index: usize, pairs: &[NeighborPair]) -> impl Iterator<Item = usize> + '_ {
    pairs.iter().filter_map(move |pair| {
        if pair.i == index {
            Some(pair.j)
        } else if pair.j == index {
            Some(pair.i)
        } else {
            None
        }
    })
}
