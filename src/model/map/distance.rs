//! Great-circle distance between map points

use geo::{Distance, Haversine, Point};

/// Haversine distance in meters between two lon/lat points.
///
/// This is the default road weight of the map graph, so it is always
/// positive for distinct coordinates.
pub fn great_circle_distance(a: Point<f64>, b: Point<f64>) -> f64 {
    Haversine.distance(a, b)
}
