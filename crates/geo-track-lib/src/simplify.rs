//! Ramer–Douglas–Peucker polyline simplification
//!
//! The algorithm keeps the first and last point of a range, finds the interior
//! point farthest from the line through them and, if that point deviates more
//! than `epsilon`, splits the range there and repeats on both halves.
//!
//! Ranges are index pairs into the original slice and pending ranges live on
//! an explicit stack, so long near-collinear tracks neither copy sub-slices
//! nor grow the call stack. The retained set is identical to the classic
//! recursive formulation.
//!
//! Distances use [`math::perpendicular_distance`], which treats latitude and
//! longitude as planar coordinates; `epsilon` is therefore in degrees.

use crate::{Coordinate, Path, math};
use rayon::prelude::*;
use smallvec::{SmallVec, smallvec};

/// Simplify a coordinate sequence, returning the retained coordinates in order
///
/// Sequences shorter than two points and non-positive `epsilon` are returned
/// unchanged.
pub fn simplify(coordinates: &[Coordinate], epsilon: f64) -> Vec<Coordinate> {
    simplify_indices(coordinates, epsilon)
        .into_iter()
        .map(|index| coordinates[index])
        .collect()
}

/// Simplify a coordinate sequence, returning the indices of retained points
///
/// Indices are strictly increasing and always include the first and last index
/// of a non-empty input.
pub fn simplify_indices(coordinates: &[Coordinate], epsilon: f64) -> Vec<usize> {
    #[cfg(feature = "profiling")]
    profiling::scope!("simplify::rdp");

    let len = coordinates.len();
    if len < 2 || epsilon.is_nan() || epsilon <= 0.0 {
        return (0..len).collect();
    }

    let mut keep = vec![false; len];
    keep[0] = true;
    keep[len - 1] = true;

    // Pending (first, last) ranges, both ends inclusive
    let mut pending: SmallVec<[(usize, usize); 32]> = smallvec![(0, len - 1)];

    while let Some((first, last)) = pending.pop() {
        let Some((index, max_distance)) = farthest_point(coordinates, first, last) else {
            continue;
        };

        if max_distance > epsilon {
            keep[index] = true;
            // Right half pushed first so the left half is processed first
            pending.push((index, last));
            pending.push((first, index));
        }
    }

    let retained: Vec<usize> = keep
        .iter()
        .enumerate()
        .filter_map(|(index, &kept)| kept.then_some(index))
        .collect();

    tracing::trace!(
        "Simplified {} points to {} (epsilon={})",
        len,
        retained.len(),
        epsilon
    );

    retained
}

/// Interior point of `first..=last` farthest from the `first`–`last` line
///
/// Ties keep the lowest index. Returns `None` when the range has no interior.
fn farthest_point(coordinates: &[Coordinate], first: usize, last: usize) -> Option<(usize, f64)> {
    if last <= first + 1 {
        return None;
    }

    let line_start = &coordinates[first];
    let line_end = &coordinates[last];

    let mut max_distance = 0.0;
    let mut index = first;

    for (i, coordinate) in coordinates.iter().enumerate().take(last).skip(first + 1) {
        let distance = math::perpendicular_distance(coordinate, line_start, line_end);
        if distance > max_distance {
            index = i;
            max_distance = distance;
        }
    }

    Some((index, max_distance))
}

/// Simplify many independent paths in parallel
///
/// Each path is simplified on its own with [`Path::simplify`]; output order
/// matches input order.
pub fn simplify_all(paths: &[Path], epsilon: f64) -> Vec<Path> {
    #[cfg(feature = "profiling")]
    profiling::scope!("simplify::simplify_all");

    paths.par_iter().map(|path| path.simplify(epsilon)).collect()
}
