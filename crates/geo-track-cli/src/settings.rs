use clap::{Parser, Subcommand};
use geo_track_lib::{Coordinate, ElevationThresholds};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Geo Track - Distance, elevation, simplification and alignment for GPS tracks
pub struct Settings {
    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace). RUST_LOG overrides it
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Read <wpt> waypoints as a single path instead of one path per <trk>
    #[clap(long, default_value = "false", global = true)]
    pub waypoints: bool,

    /// Minimum distance in meters between two points for their elevation delta to count
    #[clap(long, default_value = "5.0", global = true)]
    pub distance_threshold: f64,

    /// Minimum absolute elevation delta in meters to count as gain or loss
    #[clap(long, default_value = "5.0", global = true)]
    pub vertical_threshold: f64,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print distance and elevation metrics of every path in a GPX file
    Info {
        /// GPX file to read
        #[clap(value_name = "FILE")]
        file: PathBuf,
    },

    /// Simplify every path in a GPX file with Ramer-Douglas-Peucker
    Simplify {
        /// GPX file to read
        #[clap(value_name = "FILE")]
        file: PathBuf,

        /// Tolerance in degrees; 0 keeps every point
        #[clap(short, long)]
        epsilon: f64,

        /// Print the retained coordinates as "lat|lon|elevation" lines
        #[clap(long, default_value = "false")]
        print: bool,
    },

    /// Extract the section between two coordinates of the first path in a GPX file
    Clip {
        /// GPX file to read
        #[clap(value_name = "FILE")]
        file: PathBuf,

        /// First coordinate of the section, "lat|lon|elevation"
        #[clap(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        start: Coordinate,

        /// Last coordinate of the section, "lat|lon|elevation"
        #[clap(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
        end: Coordinate,
    },

    /// Check whether the first paths of two GPX files follow each other
    Align {
        /// Path whose points must be covered
        #[clap(value_name = "FILE_A")]
        first: PathBuf,

        /// Path providing the neighbors
        #[clap(value_name = "FILE_B")]
        second: PathBuf,

        /// Maximum distance in meters between matching points
        #[clap(short, long, default_value = "50.0")]
        deviation: f64,
    },

    /// Great-circle distance in meters between two "lat|lon|elevation" coordinates
    Distance {
        #[clap(value_parser = parse_coordinate, allow_hyphen_values = true)]
        from: Coordinate,

        #[clap(value_parser = parse_coordinate, allow_hyphen_values = true)]
        to: Coordinate,
    },
}

impl Settings {
    /// Elevation thresholds assembled from the command line
    pub fn thresholds(&self) -> ElevationThresholds {
        ElevationThresholds::new(self.distance_threshold, self.vertical_threshold)
    }
}

fn parse_coordinate(value: &str) -> Result<Coordinate, String> {
    Coordinate::parse(value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_info_defaults() {
        let settings = Settings::try_parse_from(["geo-track", "info", "track.gpx"]).unwrap();

        assert_eq!(settings.verbose, 0);
        assert!(!settings.waypoints);
        assert_eq!(settings.thresholds(), ElevationThresholds::default());
        assert!(matches!(settings.command, Command::Info { ref file } if file == &PathBuf::from("track.gpx")));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let settings = Settings::try_parse_from([
            "geo-track",
            "simplify",
            "track.gpx",
            "--epsilon",
            "0.0001",
            "-vv",
            "--waypoints",
            "--vertical-threshold",
            "0",
        ])
        .unwrap();

        assert_eq!(settings.verbose, 2);
        assert!(settings.waypoints);
        assert_eq!(settings.thresholds(), ElevationThresholds::new(5.0, 0.0));
        match settings.command {
            Command::Simplify { epsilon, print, .. } => {
                assert_eq!(epsilon, 0.0001);
                assert!(!print);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_coordinates() {
        let settings = Settings::try_parse_from([
            "geo-track",
            "distance",
            "--",
            "52.52|13.405|0",
            "-33.9|18.4|10",
        ])
        .unwrap();

        match settings.command {
            Command::Distance { from, to } => {
                assert_eq!(from, Coordinate::new(52.52, 13.405, 0.0).unwrap());
                assert_eq!(to, Coordinate::new(-33.9, 18.4, 10.0).unwrap());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_coordinate_is_rejected() {
        let result = Settings::try_parse_from(["geo-track", "distance", "95|0|0", "0|0|0"]);
        assert!(result.is_err());

        let result = Settings::try_parse_from([
            "geo-track",
            "clip",
            "track.gpx",
            "--start",
            "1|2",
            "--end",
            "1|2|3",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_align_default_deviation() {
        let settings = Settings::try_parse_from(["geo-track", "align", "a.gpx", "b.gpx"]).unwrap();
        match settings.command {
            Command::Align { deviation, .. } => assert_eq!(deviation, 50.0),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
