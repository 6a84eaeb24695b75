use log::{debug, info, warn};

use crate::error::Error;
use crate::model::MapGraph;

use super::config::LoadConfig;
use super::source::{MapRecord, MapSource};

/// Stream a geographic source into a ready-to-search [`MapGraph`].
///
/// Node records are idempotent on their external id. Link records create
/// two-way, great-circle-weighted roads; links the graph rejects (unknown
/// endpoint, coincident coordinates, self-link) are skipped with a warning
/// unless [`LoadConfig::strict_links`] is set. Finalization prunes
/// isolated nodes (configurable), rescans the extent and rebuilds the
/// spatial index.
///
/// # Errors
///
/// Source read errors always fail the load; link errors fail it only in
/// strict mode.
pub fn load_map<S: MapSource>(mut source: S, config: &LoadConfig) -> Result<MapGraph, Error> {
    let mut map = MapGraph::new();
    let mut node_records = 0usize;
    let mut link_records = 0usize;
    let mut skipped_links = 0usize;

    while let Some(record) = source.next_record()? {
        match record {
            MapRecord::Node { id, lat, lon } => {
                map.create_or_get_node(id, lat, lon);
                node_records += 1;
            }
            MapRecord::Link { from, to } => match map.link_both_directions(from, to) {
                Ok(()) => link_records += 1,
                Err(err) if !config.strict_links => {
                    warn!("skipping link {from} -> {to}: {err}");
                    skipped_links += 1;
                }
                Err(err) => return Err(err),
            },
        }
    }

    info!(
        "Processed {node_records} node records and {link_records} links ({skipped_links} skipped)"
    );

    if config.remove_isolated {
        let removed = map.remove_isolate_nodes();
        if removed > 0 {
            debug!("Removed {removed} isolated nodes");
        }
    }
    map.rebuild_spatial_index();

    info!(
        "Map graph ready: {} nodes, {} roads",
        map.graph().node_count(),
        map.graph().road_count()
    );
    Ok(map)
}
