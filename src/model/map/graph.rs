//! Geographic graph with externally-identified lat/lon nodes

use geo::Point;
use hashbrown::HashMap;
use rstar::RTree;
use rstar::primitives::GeomWithData;
use serde::Serialize;

use crate::error::Error;
use crate::model::{Graph, Node, NodeId, Way};

use super::distance::great_circle_distance;
use super::extent::Extent;

/// Entry of the spatial index: node position with its arena id.
pub type IndexedPoint = GeomWithData<[f64; 2], NodeId>;

/// Payload of a map node: externally supplied stable id plus coordinates.
///
/// The geometry is a lon/lat point (`x` = longitude, `y` = latitude).
#[derive(Debug, Clone)]
pub struct MapPoint {
    pub id: i64,
    pub geometry: Point<f64>,
}

impl MapPoint {
    pub fn lat(&self) -> f64 {
        self.geometry.y()
    }

    pub fn lon(&self) -> f64 {
        self.geometry.x()
    }
}

/// Geographic search result: the way plus the bounding box of every node
/// on it.
#[derive(Debug, Clone, Serialize)]
pub struct MapWay {
    way: Way,
    extent: Extent,
}

impl MapWay {
    pub fn way(&self) -> &Way {
        &self.way
    }

    pub fn weight(&self) -> f64 {
        self.way.weight()
    }

    /// Bounding box of all nodes visited, the lone start node included
    /// for the empty way.
    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    pub fn into_way(self) -> Way {
        self.way
    }
}

/// Weighted graph over geographic nodes.
///
/// Wraps [`Graph`] with an external-id index, a running lat/lon extent and
/// a spatial index. All links are created in both directions, weighted by
/// great-circle distance unless the caller supplies a weight.
#[derive(Debug, Clone, Default)]
pub struct MapGraph {
    graph: Graph<MapPoint>,
    node_ids: HashMap<i64, NodeId>,
    extent: Option<Extent>,
    rtree: RTree<IndexedPoint>,
}

impl MapGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Underlying arena graph, for iteration and direct searches.
    pub fn graph(&self) -> &Graph<MapPoint> {
        &self.graph
    }

    /// Create the node for an external id, or return the existing one.
    ///
    /// Idempotent on `id`: the coordinates of the first call win. A true
    /// insertion expands the running extent.
    pub fn create_or_get_node(&mut self, id: i64, lat: f64, lon: f64) -> NodeId {
        if let Some(&node) = self.node_ids.get(&id) {
            return node;
        }
        let geometry = Point::new(lon, lat);
        let node = self.graph.create_node(MapPoint { id, geometry });
        self.node_ids.insert(id, node);
        match &mut self.extent {
            Some(extent) => extent.expand(geometry),
            None => self.extent = Some(Extent::of_point(geometry)),
        }
        node
    }

    pub fn node_by_id(&self, id: i64) -> Option<NodeId> {
        self.node_ids.get(&id).copied()
    }

    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `node` is not a member.
    pub fn point(&self, node: NodeId) -> Result<&MapPoint, Error> {
        Ok(self.graph.node(node)?.info())
    }

    /// Running min/max lat/lon over all nodes; `None` for an empty graph.
    pub fn extent(&self) -> Option<&Extent> {
        self.extent.as_ref()
    }

    /// Link `a` and `b` in both directions, weighted by the great-circle
    /// distance between them.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownMapNode`] for an unseen external id,
    /// [`Error::SelfLoop`] when both ids resolve to the same node,
    /// [`Error::InvalidWeight`] when the nodes share coordinates (the
    /// computed distance would be zero).
    pub fn link_both_directions(&mut self, a: i64, b: i64) -> Result<(), Error> {
        let (na, nb) = (self.resolve(a)?, self.resolve(b)?);
        let weight = great_circle_distance(
            self.graph.node(na)?.info().geometry,
            self.graph.node(nb)?.info().geometry,
        );
        self.graph.two_way(na, nb, weight)
    }

    /// Link `a` and `b` in both directions with a caller-supplied weight.
    ///
    /// # Errors
    ///
    /// Same preconditions as [`MapGraph::link_both_directions`], with the
    /// weight validated instead of computed.
    pub fn link_with_weight(&mut self, a: i64, b: i64, weight: f64) -> Result<(), Error> {
        let (na, nb) = (self.resolve(a)?, self.resolve(b)?);
        self.graph.two_way(na, nb, weight)
    }

    /// Minimum-distance way between two external ids.
    ///
    /// The result carries the bounding box of every node on the way,
    /// expanded as the roads are walked.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownMapNode`] for unseen ids, [`Error::NoPath`] when the
    /// target is unreachable.
    pub fn find_way(&self, from: i64, to: i64) -> Result<MapWay, Error> {
        let (start, end) = (self.resolve(from)?, self.resolve(to)?);
        let way = self.graph.find_way(start, end)?;

        let mut extent = Extent::of_point(self.graph.node(start)?.info().geometry);
        for road in way.roads() {
            extent.expand(self.graph.node(road.end)?.info().geometry);
        }
        Ok(MapWay { way, extent })
    }

    /// Drop every node no road touches, then restore the derived state:
    /// the external-id index, the extent (full rescan; removal cannot
    /// cheaply shrink a running extent) and the spatial index.
    ///
    /// Previously obtained [`NodeId`]s are invalidated.
    pub fn remove_isolate_nodes(&mut self) -> usize {
        let removed = self.graph.remove_isolated_nodes();
        if removed == 0 {
            return 0;
        }

        self.node_ids = self
            .graph
            .nodes()
            .map(|node| (node.info().id, node.id()))
            .collect();
        self.extent = Extent::from_points(self.graph.nodes().map(|n| n.info().geometry));
        self.rebuild_spatial_index();
        removed
    }

    /// Bulk-rebuild the spatial index over the current node set.
    ///
    /// [`MapGraph::nearest_node`] answers against the index as of the last
    /// rebuild; the loader performs one after finalization.
    pub fn rebuild_spatial_index(&mut self) {
        let entries: Vec<IndexedPoint> = self
            .graph
            .nodes()
            .map(|node| {
                let p = node.info().geometry;
                IndexedPoint::new([p.x(), p.y()], node.id())
            })
            .collect();
        self.rtree = RTree::bulk_load(entries);
    }

    /// Nearest node to a lon/lat point, with its great-circle distance in
    /// meters. `None` when the index is empty.
    pub fn nearest_node(&self, point: Point<f64>) -> Option<(NodeId, f64)> {
        self.rtree
            .nearest_neighbor(&[point.x(), point.y()])
            .map(|entry| {
                let nearest = Point::new(entry.geom()[0], entry.geom()[1]);
                (entry.data, great_circle_distance(point, nearest))
            })
    }

    /// Nodes ordered by (latitude, longitude, id) ascending, for
    /// reproducible rendering.
    pub fn nodes_by_position(&self) -> Vec<&Node<MapPoint>> {
        let mut nodes: Vec<_> = self.graph.nodes().collect();
        nodes.sort_by(|a, b| {
            a.info()
                .lat()
                .total_cmp(&b.info().lat())
                .then_with(|| a.info().lon().total_cmp(&b.info().lon()))
                .then_with(|| a.id().cmp(&b.id()))
        });
        nodes
    }

    fn resolve(&self, id: i64) -> Result<NodeId, Error> {
        self.node_by_id(id).ok_or(Error::UnknownMapNode(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_map() -> MapGraph {
        let mut map = MapGraph::new();
        map.create_or_get_node(1, 50.0, 4.0);
        map.create_or_get_node(2, 50.0, 4.1);
        map.create_or_get_node(3, 50.1, 4.1);
        map.create_or_get_node(4, 50.1, 4.0);
        map.link_both_directions(1, 2).unwrap();
        map.link_both_directions(2, 3).unwrap();
        map.link_both_directions(3, 4).unwrap();
        map.link_both_directions(4, 1).unwrap();
        map
    }

    #[test]
    fn create_or_get_node_is_idempotent() {
        let mut map = MapGraph::new();
        let first = map.create_or_get_node(42, 50.0, 4.0);
        let second = map.create_or_get_node(42, 99.0, 99.0);
        assert_eq!(first, second);
        assert_eq!(map.graph().node_count(), 1);
        // first coordinates win
        assert_eq!(map.point(first).unwrap().lat(), 50.0);
    }

    #[test]
    fn links_default_to_great_circle_weight() {
        let mut map = MapGraph::new();
        map.create_or_get_node(1, 50.0, 4.0);
        map.create_or_get_node(2, 50.0, 4.1);
        map.link_both_directions(1, 2).unwrap();

        let a = map.node_by_id(1).unwrap();
        let roads = map.graph().roads_from(a).unwrap();
        let expected = great_circle_distance(Point::new(4.0, 50.0), Point::new(4.1, 50.0));
        assert_eq!(roads[0].weight, expected);
        assert!(roads[0].weight > 0.0);
    }

    #[test]
    fn linking_unknown_ids_fails() {
        let mut map = MapGraph::new();
        map.create_or_get_node(1, 50.0, 4.0);
        assert!(matches!(
            map.link_both_directions(1, 99),
            Err(Error::UnknownMapNode(99))
        ));
    }

    #[test]
    fn coincident_nodes_cannot_be_distance_linked() {
        let mut map = MapGraph::new();
        map.create_or_get_node(1, 50.0, 4.0);
        map.create_or_get_node(2, 50.0, 4.0);
        assert!(matches!(
            map.link_both_directions(1, 2),
            Err(Error::InvalidWeight(_))
        ));
        // but an explicit weight still works
        map.link_with_weight(1, 2, 5.0).unwrap();
    }

    #[test]
    fn extent_grows_with_insertions() {
        let mut map = MapGraph::new();
        assert!(map.extent().is_none());
        map.create_or_get_node(1, 50.0, 4.0);
        map.create_or_get_node(2, 51.0, 3.0);
        let extent = map.extent().unwrap();
        assert_eq!(extent.min_lat, 50.0);
        assert_eq!(extent.max_lat, 51.0);
        assert_eq!(extent.min_lon, 3.0);
        assert_eq!(extent.max_lon, 4.0);
    }

    #[test]
    fn find_way_returns_way_with_bounding_box() {
        let map = square_map();
        let result = map.find_way(1, 3).unwrap();
        assert_eq!(result.way().len(), 2);
        assert!(result.weight() > 0.0);
        let extent = result.extent();
        assert_eq!(extent.min_lat, 50.0);
        assert_eq!(extent.max_lat, 50.1);
    }

    #[test]
    fn find_way_to_self_covers_the_lone_node() {
        let map = square_map();
        let result = map.find_way(2, 2).unwrap();
        assert!(result.way().is_empty());
        assert_eq!(result.weight(), 0.0);
        assert_eq!(*result.extent(), Extent::of_point(Point::new(4.1, 50.0)));
    }

    #[test]
    fn remove_isolate_nodes_rescans_extent() {
        let mut map = square_map();
        // an outlier that stretches the extent but has no roads
        map.create_or_get_node(99, 60.0, 10.0);
        assert_eq!(map.extent().unwrap().max_lat, 60.0);

        assert_eq!(map.remove_isolate_nodes(), 1);
        assert!(map.node_by_id(99).is_none());
        let extent = map.extent().unwrap();
        assert_eq!(extent.max_lat, 50.1);
        assert_eq!(extent.max_lon, 4.1);
        for node in map.graph().nodes() {
            assert!(node.out_degree() > 0);
        }
        // surviving ids still resolve after compaction
        let way = map.find_way(1, 3).unwrap();
        assert_eq!(way.way().len(), 2);
    }

    #[test]
    fn nearest_node_answers_after_rebuild() {
        let mut map = square_map();
        map.rebuild_spatial_index();
        let (node, dist) = map.nearest_node(Point::new(4.01, 50.01)).unwrap();
        assert_eq!(map.point(node).unwrap().id, 1);
        assert!(dist > 0.0);
    }

    #[test]
    fn nodes_by_position_orders_by_lat_lon_id() {
        let map = square_map();
        let ordered: Vec<i64> = map
            .nodes_by_position()
            .iter()
            .map(|n| n.info().id)
            .collect();
        assert_eq!(ordered, vec![1, 2, 4, 3]);
    }
}
