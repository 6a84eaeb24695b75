use geo::{Coord, LineString};
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use crate::error::Error;

use super::graph::{MapGraph, MapWay};

impl MapGraph {
    /// Converts a search result to a `GeoJSON` `FeatureCollection` for
    /// rendering: one LineString feature over the way's node coordinates,
    /// with the total weight and road count as properties and the way's
    /// bounding box as the collection bbox. The empty way yields an empty
    /// collection.
    pub fn way_to_geojson(&self, map_way: &MapWay) -> Result<FeatureCollection, Error> {
        let way = map_way.way();
        if way.is_empty() {
            return Ok(FeatureCollection {
                features: Vec::new(),
                bbox: Some(map_way.extent().to_bbox()),
                foreign_members: None,
            });
        }

        let mut coords: Vec<Coord<f64>> = Vec::with_capacity(way.len() + 1);
        for node in way.nodes() {
            coords.push(self.graph().node(node)?.info().geometry.into());
        }
        let geometry = Geometry::new(GeoJsonValue::from(&LineString::new(coords)));

        let value = json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "weight": way.weight(),
                "roads": way.len(),
            }
        });
        let feature: Feature =
            serde_json::from_value(value).map_err(|e| Error::GeoJson(e.to_string()))?;

        Ok(FeatureCollection {
            features: vec![feature],
            bbox: Some(map_way.extent().to_bbox()),
            foreign_members: None,
        })
    }

    pub fn way_to_geojson_string(&self, map_way: &MapWay) -> Result<String, Error> {
        serde_json::to_string(&self.way_to_geojson(map_way)?)
            .map_err(|e| Error::GeoJson(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn way_exports_as_a_single_linestring_feature() {
        let mut map = MapGraph::new();
        map.create_or_get_node(1, 50.0, 4.0);
        map.create_or_get_node(2, 50.0, 4.1);
        map.create_or_get_node(3, 50.1, 4.1);
        map.link_both_directions(1, 2).unwrap();
        map.link_both_directions(2, 3).unwrap();

        let way = map.find_way(1, 3).unwrap();
        let collection = map.way_to_geojson(&way).unwrap();
        assert_eq!(collection.features.len(), 1);
        assert_eq!(collection.bbox, Some(way.extent().to_bbox()));

        let geometry = collection.features[0].geometry.as_ref().unwrap();
        match &geometry.value {
            GeoJsonValue::LineString { coordinates } => assert_eq!(coordinates.len(), 3),
            other => panic!("expected LineString, got {other:?}"),
        }

        let text = map.way_to_geojson_string(&way).unwrap();
        assert!(text.contains("\"LineString\""));
    }

    #[test]
    fn empty_way_exports_as_an_empty_collection() {
        let mut map = MapGraph::new();
        map.create_or_get_node(1, 50.0, 4.0);
        map.create_or_get_node(2, 50.0, 4.1);
        map.link_both_directions(1, 2).unwrap();

        let way = map.find_way(1, 1).unwrap();
        let collection = map.way_to_geojson(&way).unwrap();
        assert!(collection.features.is_empty());
        assert!(collection.bbox.is_some());
    }
}
