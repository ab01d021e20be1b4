//! Subcommand implementations

use crate::settings::{Command, Settings};
use geo_track_lib::{Coordinate, ElevationThresholds, Path, Result, TrackError, gpx_source};
use std::path::Path as FsPath;

/// Execute the parsed command
pub fn run(settings: &Settings) -> Result<()> {
    let thresholds = settings.thresholds();

    match &settings.command {
        Command::Info { file } => {
            for (index, path) in load_paths(file, settings.waypoints, thresholds)?.iter().enumerate() {
                println!("Path #{index}");
                print_summary(path);
            }
        }
        Command::Simplify {
            file,
            epsilon,
            print,
        } => {
            for (index, path) in load_paths(file, settings.waypoints, thresholds)?.iter().enumerate() {
                let simplified = path.simplify(*epsilon);
                println!(
                    "Path #{index}: {} -> {} points, {:.1} m -> {:.1} m",
                    path.len(),
                    simplified.len(),
                    path.distance(),
                    simplified.distance()
                );
                if *print {
                    for coordinate in simplified.coordinates() {
                        println!("{coordinate}");
                    }
                }
            }
        }
        Command::Clip { file, start, end } => {
            let path = first_path(file, settings.waypoints, thresholds)?;
            let clipped = path.clip(start, end)?;
            print_summary(&clipped);
        }
        Command::Align {
            first,
            second,
            deviation,
        } => {
            let path_a = first_path(first, settings.waypoints, thresholds)?;
            let path_b = first_path(second, settings.waypoints, thresholds)?;

            println!(
                "A covered by B within {deviation} m: {}",
                path_a.is_aligned_with(&path_b, *deviation)?
            );
            println!(
                "B covered by A within {deviation} m: {}",
                path_b.is_aligned_with(&path_a, *deviation)?
            );
        }
        Command::Distance { from, to } => {
            println!("{:.3}", from.distance_to(to));
        }
    }

    Ok(())
}

/// Load every path of a GPX file: one per track, or all waypoints as one
fn load_paths(file: &FsPath, waypoints: bool, thresholds: ElevationThresholds) -> Result<Vec<Path>> {
    let paths = if waypoints {
        vec![gpx_source::load_waypoints(file)?]
    } else {
        gpx_source::load_tracks(file)?
    };

    tracing::info!("Loaded {} path(s) from {}", paths.len(), file.display());

    if thresholds == ElevationThresholds::default() {
        return Ok(paths);
    }

    // Recompute elevation change with the requested thresholds
    paths
        .into_iter()
        .map(|path| Path::with_thresholds(path.into_coordinates(), thresholds))
        .collect()
}

fn first_path(file: &FsPath, waypoints: bool, thresholds: ElevationThresholds) -> Result<Path> {
    load_paths(file, waypoints, thresholds)?
        .into_iter()
        .next()
        .ok_or_else(|| {
            TrackError::InvalidArgument(format!("No usable path in {}", file.display()))
        })
}

fn print_summary(path: &Path) {
    println!("  points:         {}", path.len());
    println!("  distance:       {:.1} m", path.distance());
    println!("  elevation gain: {:.1} m", path.elevation_gain());
    println!("  elevation loss: {:.1} m", path.elevation_loss());
    println!("  start:          {}", pretty(path.first_coordinate()));
    println!("  end:            {}", pretty(path.last_coordinate()));
}

fn pretty(coordinate: &Coordinate) -> String {
    format!("{} ({coordinate})", coordinate.to_pretty_string())
}
