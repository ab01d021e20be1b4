//! GPX adapter: turns GPX waypoints and tracks into validated paths
//!
//! Parsing is delegated to the `gpx` crate. Every usable point goes through an
//! explicit [`RawPoint`] record and then [`Coordinate::new`], so an
//! out-of-range value in the file surfaces as [`TrackError::Validation`].

use crate::{Coordinate, Path, Result, TrackError};
use rayon::prelude::*;
use std::io::{BufReader, Read};
use std::path::Path as FsPath;

/// A point as read from the file, before validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl RawPoint {
    /// Extract a raw point from a GPX waypoint
    ///
    /// Returns `None` when the waypoint has no `<ele>` element.
    pub fn from_waypoint(waypoint: &gpx::Waypoint) -> Option<Self> {
        let point = waypoint.point();
        Some(Self {
            latitude: point.y(),
            longitude: point.x(),
            elevation: waypoint.elevation?,
        })
    }
}

impl TryFrom<RawPoint> for Coordinate {
    type Error = TrackError;

    fn try_from(raw: RawPoint) -> Result<Self> {
        Coordinate::new(raw.latitude, raw.longitude, raw.elevation)
    }
}

/// Parse a GPX document from any reader
pub fn read_gpx<R: Read>(reader: R) -> Result<gpx::Gpx> {
    Ok(gpx::read(reader)?)
}

/// Open and parse a GPX file
pub fn load_gpx_file(path: impl AsRef<FsPath>) -> Result<gpx::Gpx> {
    #[cfg(feature = "profiling")]
    profiling::scope!("gpx_source::load_gpx_file");

    let file = std::fs::File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    let gpx = read_gpx(reader)?;

    tracing::debug!(
        "Loaded {}: {} waypoints, {} tracks",
        path.as_ref().display(),
        gpx.waypoints.len(),
        gpx.tracks.len()
    );

    Ok(gpx)
}

/// Convert waypoints to coordinates, skipping those without elevation
fn to_coordinates<'a>(waypoints: impl IntoIterator<Item = &'a gpx::Waypoint>) -> Result<Vec<Coordinate>> {
    let mut coordinates = Vec::new();

    for waypoint in waypoints {
        match RawPoint::from_waypoint(waypoint) {
            Some(raw) => coordinates.push(Coordinate::try_from(raw)?),
            None => tracing::debug!(
                "Skipping point without elevation: ({}, {})",
                waypoint.point().y(),
                waypoint.point().x()
            ),
        }
    }

    Ok(coordinates)
}

/// Coordinates of all `<wpt>` elements that carry an elevation, in document order
pub fn waypoint_coordinates(gpx: &gpx::Gpx) -> Result<Vec<Coordinate>> {
    to_coordinates(&gpx.waypoints)
}

/// All `<wpt>` elements of the document as a single path
pub fn waypoints_path(gpx: &gpx::Gpx) -> Result<Path> {
    Path::new(waypoint_coordinates(gpx)?)
}

/// One path per `<trk>`, with its segments concatenated in order
///
/// Tracks with fewer than two usable points are skipped.
pub fn track_paths(gpx: &gpx::Gpx) -> Result<Vec<Path>> {
    let mut paths = Vec::with_capacity(gpx.tracks.len());

    for (track_index, track) in gpx.tracks.iter().enumerate() {
        let coordinates =
            to_coordinates(track.segments.iter().flat_map(|segment| &segment.points))?;

        if coordinates.len() < 2 {
            tracing::warn!(
                "Skipping track {} ({}): only {} usable point(s)",
                track_index,
                track.name.as_deref().unwrap_or("unnamed"),
                coordinates.len()
            );
            continue;
        }

        paths.push(Path::new(coordinates)?);
    }

    Ok(paths)
}

/// Load a GPX file and return its waypoints as a path
pub fn load_waypoints(path: impl AsRef<FsPath>) -> Result<Path> {
    waypoints_path(&load_gpx_file(path)?)
}

/// Load a GPX file and return one path per track
pub fn load_tracks(path: impl AsRef<FsPath>) -> Result<Vec<Path>> {
    track_paths(&load_gpx_file(path)?)
}

/// Load tracks from many GPX files in parallel
///
/// The outer vector follows the order of `paths`. The first failing file
/// aborts the whole load.
pub fn load_tracks_from_files<P: AsRef<FsPath> + Sync>(paths: &[P]) -> Result<Vec<Vec<Path>>> {
    #[cfg(feature = "profiling")]
    profiling::scope!("gpx_source::load_tracks_from_files");

    paths.par_iter().map(|path| load_tracks(path)).collect()
}
