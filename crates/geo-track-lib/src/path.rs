//! Path storage and derived metrics
//!
//! This module provides the `Path` struct: an ordered, owned sequence of
//! coordinates with precomputed distance and elevation gain/loss.

use crate::metrics::{self, ElevationThresholds};
use crate::{Coordinate, Result, TrackError, alignment, simplify};
use std::fmt;
use std::str::FromStr;

/// A track of at least two coordinates with cached metrics
///
/// Paths are immutable; [`Path::clip`] and [`Path::simplify`] build new paths
/// and recompute their metrics with the thresholds of the source path.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PathRecord"))]
pub struct Path {
    /// Track points in travel order
    coordinates: Vec<Coordinate>,
    /// Cached total distance in meters (computed once during construction)
    distance: f64,
    /// Cached elevation gain in meters
    elevation_gain: f64,
    /// Cached elevation loss in meters, non-negative
    elevation_loss: f64,
    /// Thresholds used for derived paths
    thresholds: ElevationThresholds,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Path {
    /// Create a new Path, computing its metrics with the default thresholds
    ///
    /// # Arguments
    /// * `coordinates` - Any ordered sequence of coordinates; buffered once
    ///
    /// # Returns
    /// The path, or [`TrackError::InvalidArgument`] if fewer than two
    /// coordinates were given
    pub fn new(coordinates: impl IntoIterator<Item = Coordinate>) -> Result<Self> {
        Self::with_thresholds(coordinates, ElevationThresholds::default())
    }

    /// Create a new Path, filtering elevation noise with custom thresholds
    pub fn with_thresholds(
        coordinates: impl IntoIterator<Item = Coordinate>,
        thresholds: ElevationThresholds,
    ) -> Result<Self> {
        let coordinates = Self::collect_checked(coordinates)?;
        Ok(Self::compute(coordinates, thresholds))
    }

    /// Create a Path from metrics that were already derived elsewhere
    ///
    /// The metrics are stored verbatim; they are not checked against the
    /// coordinates.
    pub fn with_metrics(
        coordinates: impl IntoIterator<Item = Coordinate>,
        distance: f64,
        elevation_gain: f64,
        elevation_loss: f64,
    ) -> Result<Self> {
        let coordinates = Self::collect_checked(coordinates)?;

        Ok(Self {
            coordinates,
            distance,
            elevation_gain,
            elevation_loss,
            thresholds: ElevationThresholds::default(),
        })
    }

    fn collect_checked(coordinates: impl IntoIterator<Item = Coordinate>) -> Result<Vec<Coordinate>> {
        let coordinates: Vec<Coordinate> = coordinates.into_iter().collect();
        if coordinates.len() < 2 {
            return Err(TrackError::InvalidArgument(
                "The path must contain at least two coordinates.".to_string(),
            ));
        }
        Ok(coordinates)
    }

    /// Compute all metrics for an already checked coordinate buffer
    fn compute(coordinates: Vec<Coordinate>, thresholds: ElevationThresholds) -> Self {
        #[cfg(feature = "profiling")]
        profiling::scope!("path::compute");

        let distance = metrics::calculate_distance(&coordinates);
        let (elevation_gain, elevation_loss) =
            metrics::elevation_change_with(&coordinates, thresholds);

        tracing::debug!(
            "Built path: {} points, {:.1} m, +{:.1} m / -{:.1} m",
            coordinates.len(),
            distance,
            elevation_gain,
            elevation_loss
        );

        Self {
            coordinates,
            distance,
            elevation_gain,
            elevation_loss,
            thresholds,
        }
    }

    /// Extract the section from `start` to `end`, both inclusive
    ///
    /// Coordinates are matched by value. Collection begins at the first
    /// coordinate equal to `start` and the scan stops at the first coordinate
    /// equal to `end`, even if `start` has not been seen yet.
    ///
    /// Fails if `start` is not found, if `end` does not follow it, or if the
    /// section is a single point (`start == end`).
    pub fn clip(&self, start: &Coordinate, end: &Coordinate) -> Result<Path> {
        let mut clipped = Vec::new();
        let mut found = false;

        for coordinate in &self.coordinates {
            if coordinate == start {
                found = true;
            }
            if found {
                clipped.push(*coordinate);
            }
            if coordinate == end {
                break;
            }
        }

        if !found {
            return Err(TrackError::InvalidArgument(
                "Start coordinate not found in the path.".to_string(),
            ));
        }
        if clipped.last() != Some(end) {
            return Err(TrackError::InvalidArgument(
                "End coordinate not found in the path.".to_string(),
            ));
        }

        Path::with_thresholds(clipped, self.thresholds)
    }

    /// Simplify the path with Ramer–Douglas–Peucker
    ///
    /// `epsilon` is a planar tolerance in degrees; a non-positive value keeps
    /// every point. Endpoints are always retained.
    pub fn simplify(&self, epsilon: f64) -> Path {
        let coordinates = simplify::simplify(&self.coordinates, epsilon);
        // Simplification keeps both endpoints, so the length invariant holds
        Self::compute(coordinates, self.thresholds)
    }

    /// Check whether every point of this path lies within `deviation` meters of `other`
    ///
    /// Not symmetric, see [`alignment::are_paths_overlapping`].
    pub fn is_aligned_with(&self, other: &Path, deviation: f64) -> Result<bool> {
        alignment::are_paths_overlapping(&self.coordinates, &other.coordinates, deviation)
    }

    #[inline]
    pub fn first_coordinate(&self) -> &Coordinate {
        &self.coordinates[0]
    }

    #[inline]
    pub fn last_coordinate(&self) -> &Coordinate {
        &self.coordinates[self.coordinates.len() - 1]
    }

    /// All coordinates in travel order
    #[inline]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Number of coordinates, always at least two
    #[inline]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Always `false`: construction rejects fewer than two coordinates
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Total great-circle length in meters
    ///
    /// This is O(1) as the value is cached during construction.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    #[inline]
    pub fn elevation_gain(&self) -> f64 {
        self.elevation_gain
    }

    #[inline]
    pub fn elevation_loss(&self) -> f64 {
        self.elevation_loss
    }

    /// Thresholds used to compute (and recompute) elevation change
    #[inline]
    pub fn thresholds(&self) -> ElevationThresholds {
        self.thresholds
    }

    /// Convert to a `geo` line string (x = longitude, y = latitude)
    pub fn to_line_string(&self) -> geo::LineString<f64> {
        self.coordinates
            .iter()
            .map(|&coordinate| geo::Point::from(coordinate))
            .collect()
    }

    /// Consume the path and return its coordinates
    pub fn into_coordinates(self) -> Vec<Coordinate> {
        self.coordinates
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coordinate) in self.coordinates.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{coordinate}")?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = TrackError;

    /// Parse `;`-separated coordinates, e.g. `"52.52|13.405|0;48.8566|2.3522|0"`
    fn from_str(s: &str) -> Result<Self> {
        let coordinates = s
            .split(';')
            .map(Coordinate::parse)
            .collect::<Result<Vec<_>>>()?;
        Path::new(coordinates)
    }
}

/// Wire form used by serde before the length invariant is checked
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PathRecord {
    coordinates: Vec<Coordinate>,
    distance: f64,
    elevation_gain: f64,
    elevation_loss: f64,
    #[serde(default)]
    thresholds: ElevationThresholds,
}

#[cfg(feature = "serde")]
impl TryFrom<PathRecord> for Path {
    type Error = TrackError;

    fn try_from(record: PathRecord) -> Result<Self> {
        let mut path = Path::with_metrics(
            record.coordinates,
            record.distance,
            record.elevation_gain,
            record.elevation_loss,
        )?;
        path.thresholds = record.thresholds;
        Ok(path)
    }
}
