//! Running latitude/longitude bounding box

use geo::Point;
use serde::{Deserialize, Serialize};

/// Min/max latitude and longitude over a set of points.
///
/// Grown incrementally with [`Extent::expand`]; an extent always covers at
/// least one point, so "no points yet" is `Option<Extent>` at the call
/// sites.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl Extent {
    /// Degenerate extent covering a single point.
    pub fn of_point(point: Point<f64>) -> Self {
        Self {
            min_lat: point.y(),
            min_lon: point.x(),
            max_lat: point.y(),
            max_lon: point.x(),
        }
    }

    /// Grow the extent to cover `point`.
    pub fn expand(&mut self, point: Point<f64>) {
        self.min_lat = self.min_lat.min(point.y());
        self.min_lon = self.min_lon.min(point.x());
        self.max_lat = self.max_lat.max(point.y());
        self.max_lon = self.max_lon.max(point.x());
    }

    /// Grow the extent to cover another extent.
    pub fn merge(&mut self, other: &Extent) {
        self.min_lat = self.min_lat.min(other.min_lat);
        self.min_lon = self.min_lon.min(other.min_lon);
        self.max_lat = self.max_lat.max(other.max_lat);
        self.max_lon = self.max_lon.max(other.max_lon);
    }

    pub fn contains(&self, point: Point<f64>) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.y())
            && (self.min_lon..=self.max_lon).contains(&point.x())
    }

    pub fn center(&self) -> Point<f64> {
        Point::new(
            (self.min_lon + self.max_lon) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }

    /// Extent of an arbitrary point set; `None` for an empty set.
    pub fn from_points(points: impl IntoIterator<Item = Point<f64>>) -> Option<Self> {
        let mut points = points.into_iter();
        let mut extent = Self::of_point(points.next()?);
        for point in points {
            extent.expand(point);
        }
        Some(extent)
    }

    /// GeoJSON bbox form: `[min_lon, min_lat, max_lon, max_lat]`.
    pub fn to_bbox(&self) -> Vec<f64> {
        vec![self.min_lon, self.min_lat, self.max_lon, self.max_lat]
    }
}
