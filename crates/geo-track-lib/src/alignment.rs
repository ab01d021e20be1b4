//! Coarse alignment test between two tracks

use crate::{Coordinate, Result, TrackError};

/// Check whether every coordinate of `a` has a neighbor in `b` within `deviation` meters
///
/// This is a one-directional coverage test, not a Fréchet or Hausdorff
/// distance: a sparse `a` can be covered by a dense `b` while the reverse
/// fails. The scan stops at the first uncovered point of `a`.
///
/// Runs in O(|a|×|b|) with no spatial index. Fails with
/// [`TrackError::InvalidArgument`] if `deviation` is not strictly positive.
pub fn are_paths_overlapping(a: &[Coordinate], b: &[Coordinate], deviation: f64) -> Result<bool> {
    if deviation.is_nan() || deviation <= 0.0 {
        return Err(TrackError::InvalidArgument(
            "are_paths_overlapping 'deviation' argument needs to be bigger than zero.".to_string(),
        ));
    }

    for coordinate in a {
        let mut covered = false;
        for candidate in b {
            if coordinate.is_within_distance_to(candidate, deviation)? {
                covered = true;
                break;
            }
        }

        if !covered {
            tracing::trace!("No neighbor within {} m for {}", deviation, coordinate);
            return Ok(false);
        }
    }

    Ok(true)
}
