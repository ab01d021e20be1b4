//! Validated geographic coordinate
//!
//! A [`Coordinate`] is an immutable latitude/longitude/elevation triple. All
//! fields are checked at construction and the value is never mutated, so it
//! can be copied freely between paths and compared by value.

use crate::{Result, TrackError, math};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Highest accepted elevation in meters (exclusive), the summit of Mount Everest
pub const MAXIMUM_ELEVATION_POINT: f64 = 8848.0;

/// Lowest accepted elevation in meters (exclusive), the shore of the Dead Sea
pub const LOWEST_ELEVATION_POINT: f64 = -420.0;

/// Textual layout accepted by [`Coordinate::parse`]
pub const STRING_COORDINATE_FORMAT: &str = "latitude|longitude|elevation";

/// A validated geo-point with value semantics
///
/// Equality is structural over all three fields. `Eq` and `Hash` hold because
/// validation rules out NaN.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UncheckedCoordinate"))]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
    elevation: f64,
}

impl Coordinate {
    /// Create a new coordinate
    ///
    /// # Arguments
    /// * `latitude` - Degrees, -90 to 90 inclusive
    /// * `longitude` - Degrees, -180 to 180 inclusive
    /// * `elevation` - Meters, strictly between [`LOWEST_ELEVATION_POINT`] and
    ///   [`MAXIMUM_ELEVATION_POINT`]
    ///
    /// # Returns
    /// The coordinate, or [`TrackError::Validation`] if any field is out of range
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(TrackError::Validation(
                "Latitude must be between -90 and 90 degrees.".to_string(),
            ));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(TrackError::Validation(
                "Longitude must be between -180 and 180 degrees.".to_string(),
            ));
        }

        if elevation.is_nan()
            || elevation <= LOWEST_ELEVATION_POINT
            || elevation >= MAXIMUM_ELEVATION_POINT
        {
            return Err(TrackError::Validation(format!(
                "Elevation must be between {LOWEST_ELEVATION_POINT} meters and {MAXIMUM_ELEVATION_POINT} meters."
            )));
        }

        Ok(Self {
            latitude,
            longitude,
            elevation,
        })
    }

    /// Parse a coordinate from its `"latitude|longitude|elevation"` form
    pub fn parse(text: &str) -> Result<Self> {
        let fields: Vec<&str> = text.split('|').collect();
        if fields.len() != 3 {
            return Err(TrackError::Validation(format!(
                "Invalid coordinate format. Expected format: '{STRING_COORDINATE_FORMAT}'"
            )));
        }

        let latitude = parse_field(fields[0], "latitude")?;
        let longitude = parse_field(fields[1], "longitude")?;
        let elevation = parse_field(fields[2], "elevation")?;

        Self::new(latitude, longitude, elevation)
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Elevation in meters
    #[inline]
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Great-circle distance to another coordinate in meters
    #[inline]
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        math::haversine(self, other)
    }

    /// Check whether `other` lies within `range` meters of this coordinate
    ///
    /// The boundary is inclusive. Fails with [`TrackError::InvalidArgument`] if
    /// `range` is not strictly positive.
    pub fn is_within_distance_to(&self, other: &Coordinate, range: f64) -> Result<bool> {
        if range.is_nan() || range <= 0.0 {
            return Err(TrackError::InvalidArgument(
                "is_within_distance_to 'range' argument needs to be bigger than zero.".to_string(),
            ));
        }

        Ok(self.distance_to(other) <= range)
    }

    /// Human-readable degrees/minutes/seconds form with hemisphere letters
    ///
    /// Display only; the output cannot be parsed back. Zero latitude and
    /// longitude print as `N` and `E`.
    pub fn to_pretty_string(&self) -> String {
        let latitude_hemisphere = if self.latitude >= 0.0 { "N" } else { "S" };
        let longitude_hemisphere = if self.longitude >= 0.0 { "E" } else { "W" };

        format!(
            "{}{} {}{} Elevation: {} meters",
            math::to_dms_string(self.latitude),
            latitude_hemisphere,
            math::to_dms_string(self.longitude),
            longitude_hemisphere,
            self.elevation
        )
    }
}

fn parse_field(field: &str, name: &str) -> Result<f64> {
    field
        .trim()
        .parse::<f64>()
        .map_err(|_| TrackError::Validation(format!("Invalid {name} value.")))
}

// -0.0 and 0.0 compare equal, so they must hash equal too
#[inline]
fn normalized_bits(value: f64) -> u64 {
    if value == 0.0 { 0.0f64.to_bits() } else { value.to_bits() }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        normalized_bits(self.latitude).hash(state);
        normalized_bits(self.longitude).hash(state);
        normalized_bits(self.elevation).hash(state);
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.latitude, self.longitude, self.elevation)
    }
}

impl FromStr for Coordinate {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(coordinate: Coordinate) -> Self {
        geo::Point::new(coordinate.longitude, coordinate.latitude)
    }
}

/// Wire form used by serde before validation
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedCoordinate {
    latitude: f64,
    longitude: f64,
    elevation: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedCoordinate> for Coordinate {
    type Error = TrackError;

    fn try_from(raw: UncheckedCoordinate) -> Result<Self> {
        Coordinate::new(raw.latitude, raw.longitude, raw.elevation)
    }
}
