//! Path operations available directly on coordinate slices

use crate::{Coordinate, Path, Result};

/// Convenience wrappers that build a [`Path`] from a slice and query it
///
/// Every method fails like [`Path::new`] when the slice holds fewer than two
/// coordinates.
pub trait CoordinateSliceExt {
    /// Total great-circle length in meters, see [`Path::distance`]
    fn path_distance(&self) -> Result<f64>;

    /// Elevation gain with the default thresholds, see [`Path::elevation_gain`]
    fn elevation_gain(&self) -> Result<f64>;

    /// Elevation loss with the default thresholds, see [`Path::elevation_loss`]
    fn elevation_loss(&self) -> Result<f64>;

    /// See [`Path::clip`]
    fn clip_path(&self, start: &Coordinate, end: &Coordinate) -> Result<Vec<Coordinate>>;

    /// See [`Path::simplify`]
    fn simplify_path(&self, epsilon: f64) -> Result<Vec<Coordinate>>;

    /// See [`Path::is_aligned_with`]
    fn is_aligned_with(&self, other: &[Coordinate], deviation: f64) -> Result<bool>;
}

impl CoordinateSliceExt for [Coordinate] {
    fn path_distance(&self) -> Result<f64> {
        Ok(Path::new(self.iter().copied())?.distance())
    }

    fn elevation_gain(&self) -> Result<f64> {
        Ok(Path::new(self.iter().copied())?.elevation_gain())
    }

    fn elevation_loss(&self) -> Result<f64> {
        Ok(Path::new(self.iter().copied())?.elevation_loss())
    }

    fn clip_path(&self, start: &Coordinate, end: &Coordinate) -> Result<Vec<Coordinate>> {
        let path = Path::new(self.iter().copied())?;
        Ok(path.clip(start, end)?.into_coordinates())
    }

    fn simplify_path(&self, epsilon: f64) -> Result<Vec<Coordinate>> {
        let path = Path::new(self.iter().copied())?;
        Ok(path.simplify(epsilon).into_coordinates())
    }

    fn is_aligned_with(&self, other: &[Coordinate], deviation: f64) -> Result<bool> {
        let path = Path::new(self.iter().copied())?;
        let other = Path::new(other.iter().copied())?;
        path.is_aligned_with(&other, deviation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TrackError;

    fn coord(lat: f64, lon: f64, ele: f64) -> Coordinate {
        Coordinate::new(lat, lon, ele).unwrap()
    }

    #[test]
    fn test_metrics_match_path() {
        let coordinates = vec![
            coord(52.5200, 13.4050, 100.0),
            coord(48.8566, 2.3522, 200.0),
            coord(40.7128, -74.0060, 50.0),
        ];
        let path = Path::new(coordinates.clone()).unwrap();

        assert_eq!(coordinates.path_distance().unwrap(), path.distance());
        assert_eq!(coordinates.elevation_gain().unwrap(), 100.0);
        assert_eq!(coordinates.elevation_loss().unwrap(), 150.0);
    }

    #[test]
    fn test_clip_and_simplify() {
        let coordinates = vec![
            coord(0.0, 0.0, 0.0),
            coord(0.5, 0.5, 0.0),
            coord(1.0, 1.0, 0.0),
        ];

        assert_eq!(
            coordinates.clip_path(&coordinates[1], &coordinates[2]).unwrap(),
            coordinates[1..].to_vec()
        );
        assert_eq!(
            coordinates.simplify_path(0.1).unwrap(),
            vec![coordinates[0], coordinates[2]]
        );
    }

    #[test]
    fn test_is_aligned_with() {
        let a = [coord(0.0, 0.0, 0.0), coord(0.0, 0.001, 0.0)];
        let b = [coord(0.0, 0.0001, 0.0), coord(0.0, 0.0011, 0.0)];
        assert!(a.is_aligned_with(&b, 50.0).unwrap());
    }

    #[test]
    fn test_short_slices_fail() {
        let single = [coord(0.0, 0.0, 0.0)];
        assert!(matches!(
            single.path_distance(),
            Err(TrackError::InvalidArgument(_))
        ));
        assert!(single.simplify_path(1.0).is_err());
    }
}
