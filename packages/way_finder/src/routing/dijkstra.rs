use crate::common::graph_data::{EdgeData, NodeData};
use crate::routing::structs::Route;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Graph};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use thiserror::Error;

/// Failure states for a single shortest-route query
#[derive(Error, Debug, PartialEq)]
pub enum RoutingError {
    #[error("Town not found in the graph: {0:?}")]
    TownNotFound(NodeIndex),
    #[error("No route exists from {from} to {to}")]
    NoRoute { from: String, to: String },
}

/// Compute the route with the smallest total distance from start to end.
///
/// This runs a priority-queue relaxation over the graph. The distance to the
/// start is zero, every other distance is implicitly infinite (absent from
/// the map). Rather than decreasing the key of a queued node when a shorter
/// distance to it is found, the node is pushed again and the stale entry is
/// discarded when it surfaces. Each node therefore settles at most once, and
/// the loop ends once the queue runs dry, whether or not the end was
/// reachable.
pub fn shortest_route(
    graph: &Graph<NodeData, EdgeData, Directed, u32>,
    start_inx: NodeIndex,
    end_inx: NodeIndex,
) -> Result<Route, RoutingError> {
    let start = match graph.node_weight(start_inx) {
        Some(weight) => weight,
        None => return Err(RoutingError::TownNotFound(start_inx)),
    };
    let end = match graph.node_weight(end_inx) {
        Some(weight) => weight,
        None => return Err(RoutingError::TownNotFound(end_inx)),
    };

    let mut distances = FxHashMap::<NodeIndex, u64>::default();
    let mut previous = FxHashMap::<NodeIndex, NodeIndex>::default();
    let mut visited = FxHashSet::<NodeIndex>::default();
    let mut queue = BinaryHeap::<Reverse<(u64, NodeIndex)>>::new();

    distances.insert(start_inx, 0);
    queue.push(Reverse((0, start_inx)));

    while let Some(Reverse((dist, current))) = queue.pop() {
        // A node which has already settled can only surface again as a
        // stale re-insertion
        if !visited.insert(current) {
            continue;
        }

        for eref in graph.edges(current) {
            let neighbour = eref.target();
            if visited.contains(&neighbour) {
                continue;
            }

            let new_dist = dist + eref.weight().distance;
            let improved = match distances.get(&neighbour) {
                Some(known) => new_dist < *known,
                None => true,
            };

            if improved {
                distances.insert(neighbour, new_dist);
                previous.insert(neighbour, current);
                queue.push(Reverse((new_dist, neighbour)));
            }
        }
    }

    // An end town which never gained a predecessor was never reached
    if end_inx != start_inx && !previous.contains_key(&end_inx) {
        return Err(RoutingError::NoRoute {
            from: start.name.clone(),
            to: end.name.clone(),
        });
    }

    // Walk the predecessor chain backwards from the end, then flip it
    let mut stops = vec![end.name.clone()];
    let mut current = end_inx;
    while let Some(prev_inx) = previous.get(&current) {
        let prev_weight = graph
            .node_weight(*prev_inx)
            .expect("Predecessor isn't in the graph!");
        stops.push(prev_weight.name.clone());
        current = *prev_inx;
    }
    stops.reverse();

    let total_distance = match distances.get(&end_inx) {
        Some(dist) => *dist,
        None => panic!("Reached the end town without recording a distance!"),
    };

    Ok(Route::new(stops, total_distance))
}
