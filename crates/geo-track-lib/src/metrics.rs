//! Path metrics: total distance and thresholded elevation change

use crate::{Coordinate, math};

/// Noise thresholds applied when accumulating elevation gain and loss
///
/// GPS receivers report jittering elevations, especially when standing still.
/// A pair of consecutive points only contributes if they are at least
/// `distance` meters apart, and its elevation delta only counts once it
/// reaches `vertical` meters in either direction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevationThresholds {
    /// Minimum horizontal distance between two points in meters
    pub distance: f64,
    /// Minimum absolute elevation delta in meters
    pub vertical: f64,
}

impl ElevationThresholds {
    /// No filtering: every pair and every delta counts
    pub const RAW: Self = Self {
        distance: 0.0,
        vertical: 0.0,
    };

    pub fn new(distance: f64, vertical: f64) -> Self {
        Self { distance, vertical }
    }
}

impl Default for ElevationThresholds {
    fn default() -> Self {
        Self {
            distance: 5.0,
            vertical: 5.0,
        }
    }
}

/// Sum of great-circle distances between consecutive coordinates in meters
///
/// Empty and single-point sequences have zero length.
pub fn calculate_distance(coordinates: &[Coordinate]) -> f64 {
    coordinates
        .windows(2)
        .map(|pair| math::haversine(&pair[0], &pair[1]))
        .sum()
}

/// Accumulate elevation gain and loss along the coordinates
///
/// # Arguments
/// * `coordinates` - Track points in order
/// * `distance_threshold` - Pairs closer than this (meters) are skipped
/// * `vertical_threshold` - Deltas strictly inside ±this (meters) are noise
///
/// # Returns
/// `(gain, loss)` in meters, both non-negative
pub fn calculate_elevation_change(
    coordinates: &[Coordinate],
    distance_threshold: f64,
    vertical_threshold: f64,
) -> (f64, f64) {
    let mut gain = 0.0;
    let mut loss = 0.0;

    for pair in coordinates.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);

        if math::haversine(current, next) < distance_threshold {
            continue;
        }

        let delta = next.elevation() - current.elevation();
        if delta >= vertical_threshold {
            gain += delta;
        } else if delta <= -vertical_threshold {
            loss += delta;
        }
    }

    (gain, f64::abs(loss))
}

/// [`calculate_elevation_change`] with thresholds taken from a config value
#[inline]
pub fn elevation_change_with(
    coordinates: &[Coordinate],
    thresholds: ElevationThresholds,
) -> (f64, f64) {
    calculate_elevation_change(coordinates, thresholds.distance, thresholds.vertical)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64, ele: f64) -> Coordinate {
        Coordinate::new(lat, lon, ele).unwrap()
    }

    fn berlin_paris_new_york() -> Vec<Coordinate> {
        vec![
            coord(52.5200, 13.4050, 100.0),
            coord(48.8566, 2.3522, 200.0),
            coord(40.7128, -74.0060, 50.0),
        ]
    }

    #[test]
    fn test_distance_of_short_sequences_is_zero() {
        assert_eq!(calculate_distance(&[]), 0.0);
        assert_eq!(calculate_distance(&[coord(1.0, 1.0, 0.0)]), 0.0);
    }

    #[test]
    fn test_distance_is_sum_of_segments() {
        let coordinates = berlin_paris_new_york();
        let expected = math::haversine(&coordinates[0], &coordinates[1])
            + math::haversine(&coordinates[1], &coordinates[2]);
        assert!((calculate_distance(&coordinates) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_elevation_change_with_default_thresholds() {
        let (gain, loss) = elevation_change_with(&berlin_paris_new_york(), Default::default());
        assert_eq!(gain, 100.0);
        assert_eq!(loss, 150.0);
    }

    #[test]
    fn test_vertical_noise_is_ignored() {
        // 1 km apart, deltas of +4 and -4 are below the 5 m vertical threshold
        let coordinates = vec![
            coord(0.0, 0.0, 10.0),
            coord(0.0, 0.01, 14.0),
            coord(0.0, 0.02, 10.0),
        ];
        assert_eq!(calculate_elevation_change(&coordinates, 5.0, 5.0), (0.0, 0.0));
        assert_eq!(calculate_elevation_change(&coordinates, 0.0, 0.0), (4.0, 4.0));
    }

    #[test]
    fn test_vertical_threshold_is_inclusive() {
        let coordinates = vec![
            coord(0.0, 0.0, 10.0),
            coord(0.0, 0.01, 15.0),
            coord(0.0, 0.02, 10.0),
        ];
        assert_eq!(calculate_elevation_change(&coordinates, 5.0, 5.0), (5.0, 5.0));
    }

    #[test]
    fn test_short_hops_are_ignored() {
        // Roughly 1.1 m apart: below the 5 m distance threshold
        let coordinates = vec![coord(0.0, 0.0, 10.0), coord(0.0, 0.00001, 60.0)];
        assert_eq!(calculate_elevation_change(&coordinates, 5.0, 5.0), (0.0, 0.0));
        assert_eq!(
            elevation_change_with(&coordinates, ElevationThresholds::RAW),
            (50.0, 0.0)
        );
    }

    #[test]
    fn test_identical_points_count_only_without_distance_threshold() {
        let coordinates = vec![coord(0.0, 0.0, 10.0), coord(0.0, 0.0, 30.0)];
        assert_eq!(calculate_elevation_change(&coordinates, 0.0, 0.0), (20.0, 0.0));
        assert_eq!(calculate_elevation_change(&coordinates, 0.5, 0.0), (0.0, 0.0));
    }

    #[test]
    fn test_default_thresholds() {
        let thresholds = ElevationThresholds::default();
        assert_eq!(thresholds, ElevationThresholds::new(5.0, 5.0));
    }
}
