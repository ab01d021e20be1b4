//! Geo Track Library - Geometry Engine for GPS Tracks
//!
//! This library models geographic tracks as ordered sequences of validated
//! latitude/longitude/elevation points and provides the geometry operations
//! needed to analyze them: great-circle distance, noise-filtered elevation
//! gain/loss, Ramer–Douglas–Peucker simplification, clipping and a coarse
//! alignment test between two tracks.
//!
//! # Architecture
//!
//! - **[`Coordinate`]**: Immutable, validated geo-point with value equality
//! - **[`math`]**: Haversine and planar perpendicular distance primitives
//! - **[`metrics`]**: Total distance and thresholded elevation change
//! - **[`simplify`]**: Ramer–Douglas–Peucker over index ranges
//! - **[`alignment`]**: One-directional coverage test between two tracks
//! - **[`Path`]**: Composition root holding coordinates and derived metrics
//! - **`gpx_source`**: GPX adapter (enabled by the `gpx` feature)
//!
//! # Performance Characteristics
//!
//! - **Path construction**: O(N), metrics computed once
//! - **Simplification**: O(N log N) expected, O(N²) worst case
//! - **Alignment**: O(N×M), no spatial index

pub mod alignment;
mod coordinate;
mod ext;
#[cfg(feature = "gpx")]
pub mod gpx_source;
pub mod math;
pub mod metrics;
mod path;
pub mod simplify;

// Public API exports
pub use coordinate::{Coordinate, LOWEST_ELEVATION_POINT, MAXIMUM_ELEVATION_POINT};
pub use ext::CoordinateSliceExt;
pub use metrics::ElevationThresholds;
pub use path::Path;

/// Error types for coordinate and path operations
#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    /// A coordinate field or parsed string is out of its domain or malformed
    #[error("Validation error: {0}")]
    Validation(String),

    /// A method precondition was violated by the caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[cfg(feature = "gpx")]
    #[error("GPX parsing error: {0}")]
    GpxParse(#[from] gpx::errors::GpxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TrackError>;
