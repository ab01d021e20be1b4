//! Distance primitives for coordinate and path operations

use crate::Coordinate;

/// Mean Earth radius in meters used by the spherical model
pub const EARTH_RADIUS_M: f64 = 6_378_100.0;

/// Great-circle distance between two coordinates in meters (Haversine formula)
///
/// The Earth is treated as a sphere of radius [`EARTH_RADIUS_M`]. Elevation is
/// ignored. The result is symmetric and exactly zero for identical coordinates.
#[inline]
pub fn haversine(c1: &Coordinate, c2: &Coordinate) -> f64 {
    let lat1 = c1.latitude().to_radians();
    let lon1 = c1.longitude().to_radians();
    let lat2 = c2.latitude().to_radians();
    let lon2 = c2.longitude().to_radians();

    let sin_dlat = ((lat2 - lat1) / 2.0).sin();
    let sin_dlon = ((lon2 - lon1) / 2.0).sin();

    let a = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;

    2.0 * EARTH_RADIUS_M * a.sqrt().asin()
}

/// Distance from `point` to the infinite line through `line_start` and `line_end`
///
/// Latitude and longitude are treated as planar Cartesian coordinates
/// (x = latitude, y = longitude), so the result is in degrees and is only
/// meaningful over short spans. This is the metric used by simplification and
/// is deliberately inconsistent with [`haversine`] for long segments.
///
/// When the line is degenerate (start and end share latitude and longitude)
/// the result is the planar distance from `point` to `line_start`. A closed
/// loop keeps its farthest point while a run of identical fixes collapses.
#[inline]
pub fn perpendicular_distance(
    point: &Coordinate,
    line_start: &Coordinate,
    line_end: &Coordinate,
) -> f64 {
    let (x0, y0) = (point.latitude(), point.longitude());
    let (x1, y1) = (line_start.latitude(), line_start.longitude());
    let (x2, y2) = (line_end.latitude(), line_end.longitude());

    let denominator = ((y2 - y1).powi(2) + (x2 - x1).powi(2)).sqrt();
    if denominator == 0.0 {
        return (x0 - x1).hypot(y0 - y1);
    }

    let numerator = ((y2 - y1) * x0 - (x2 - x1) * y0 + x2 * y1 - y2 * x1).abs();
    numerator / denominator
}

/// Format an angle in decimal degrees as degrees, minutes and seconds
///
/// The sign is dropped; callers add the hemisphere letter. Seconds are printed
/// with one decimal, e.g. `52°31'12.0"`. Rounding carries into minutes and
/// degrees, so `60.0` seconds or minutes never appear.
pub fn to_dms_string(degrees: f64) -> String {
    // Work in tenths of an arc second so the printed value is exact
    let tenths = (degrees.abs() * 36_000.0).round() as u64;

    let whole_degrees = tenths / 36_000;
    let minutes = tenths % 36_000 / 600;
    let seconds = (tenths % 600) as f64 / 10.0;

    format!("{whole_degrees}°{minutes}'{seconds:.1}\"")
}
