use crate::common::graph_data::{EdgeData, NodeData};
use crate::loading::towns::{RoadRow, TownRow};
use petgraph::graph::NodeIndex;
use petgraph::visit::IntoNodeReferences;
use petgraph::{Directed, Graph};
use rustc_hash::FxHashMap;

/// Based on the town and road tables, generate a petgraph graph which can be
/// used for route finding. Each road is appended as a pair of mirrored arcs
/// so that travel is possible in both directions. Duplicate roads are kept
/// as parallel arcs; the relaxation simply never prefers the longer one.
pub fn create_graph(
    towns: Vec<TownRow>,
    roads: Vec<RoadRow>,
) -> Graph<NodeData, EdgeData, Directed, u32> {
    // Set up empty graph
    let mut graph = Graph::<NodeData, EdgeData, Directed, u32>::new();

    // Add all towns to the graph, create mapping from town ids to node
    // indexes. Re-listing an id keeps the first entry.
    let mut town_id_inx_map = FxHashMap::<i64, NodeIndex>::default();
    for town in towns {
        if town_id_inx_map.contains_key(&town.id) {
            continue;
        }
        let id = town.id;
        let node_inx = graph.add_node(town.into());
        town_id_inx_map.insert(id, node_inx);
    }

    for road in roads {
        // Fetch indexes for src and dst as they appear in the graph. Roads
        // referencing a town which was never added are skipped, keeping the
        // graph free of dangling endpoints.
        let maybe_src_inx = town_id_inx_map.get(&road.src);
        let src_inx = match maybe_src_inx {
            Some(src_inx) => *src_inx,
            None => continue,
        };

        let maybe_dst_inx = town_id_inx_map.get(&road.dst);
        let dst_inx = match maybe_dst_inx {
            Some(dst_inx) => *dst_inx,
            None => continue,
        };

        let edge_data: EdgeData = road.into();
        let mirrored = EdgeData {
            src: edge_data.dst,
            dst: edge_data.src,
            distance: edge_data.distance,
        };

        graph.add_edge(src_inx, dst_inx, edge_data);
        graph.add_edge(dst_inx, src_inx, mirrored);
    }

    graph
}

/// Retrieve the node index for a town based on its id
pub fn find_town(
    graph: &Graph<NodeData, EdgeData, Directed, u32>,
    id: i64,
) -> Option<NodeIndex> {
    for (node_inx, node_data) in graph.node_references() {
        if node_data.id == id {
            return Some(node_inx);
        }
    }
    None
}

/// Retrieve the display name for a town based on its node index
pub fn get_town_name(
    graph: &Graph<NodeData, EdgeData, Directed, u32>,
    inx: NodeIndex,
) -> Option<String> {
    match graph.node_weight(inx) {
        Some(node_data) => Some(node_data.name.clone()),
        None => None,
    }
}
