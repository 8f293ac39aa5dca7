use geo::GeodesicDistance;
use geo_types::Point;
use itertools::Itertools;
use serde::{ser::Error, Deserialize, Serialize, Serializer};

const METERS_PER_MILE: f64 = 1609.344;

/// A WGS84 position in decimal degrees. On the wire it is the array
/// `[latitude, longitude]`.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "[f64; 2]")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }

    fn to_point(self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

// JSON has no NaN or infinity; serde_json would quietly write `null`.
fn serialize_finite<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !value.is_finite() {
        return Err(S::Error::custom(format!("non-finite value {value}")));
    }
    serializer.serialize_f64(*value)
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(S::Error::custom(format!(
                "non-finite coordinate ({}, {})",
                self.latitude, self.longitude
            )));
        }
        <[f64; 2]>::from(*self).serialize(serializer)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Coordinate::new(latitude, longitude)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coordinate: Coordinate) -> Self {
        [coordinate.latitude, coordinate.longitude]
    }
}

/// One straight piece of the path. `distance` and `total` are in miles,
/// `total` includes this segment.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Coordinate,
    pub stop: Coordinate,
    #[serde(serialize_with = "serialize_finite")]
    pub distance: f64,
    #[serde(serialize_with = "serialize_finite")]
    pub total: f64,
}

impl Segment {
    pub fn total_distance(segments: &[Segment]) -> f64 {
        segments.last().map(|s| s.total).unwrap_or(0.0)
    }
}

// Ellipsoidal geodesic on WGS84 (Karney), reported in international miles.
pub fn distance_in_miles(a: &Coordinate, b: &Coordinate) -> f64 {
    // coincident points, keep the result an exact (positive) zero
    if a == b {
        return 0.0;
    }
    a.to_point().geodesic_distance(&b.to_point()) / METERS_PER_MILE
}

/// Turns a path into its consecutive segments. N points give N-1 segments,
/// nothing for N <= 1.
pub fn calculate_distances(coordinates: &[Coordinate]) -> Vec<Segment> {
    let mut total = 0.0;
    coordinates
        .iter()
        .tuple_windows()
        .map(|(start, stop)| {
            let distance = distance_in_miles(start, stop);
            total += distance;
            Segment {
                start: *start,
                stop: *stop,
                distance,
                total,
            }
        })
        .collect()
}
