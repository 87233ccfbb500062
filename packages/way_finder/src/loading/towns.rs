//! The functions defined here provide the raw map data: every town which can
//! be navigated between, and every road connecting a pair of towns. The map
//! is fixed, so the tables are plain in-code rows rather than query output.

use crate::common::graph_data::{EdgeData, NodeData};

/// Container for the raw data of a single town
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TownRow {
    pub id: i64,
    pub name: &'static str,
}

impl Into<NodeData> for TownRow {
    /// Unpack the raw town data into a format which can be loaded into the
    /// graph
    fn into(self) -> NodeData {
        NodeData {
            id: self.id,
            name: self.name.to_string(),
        }
    }
}

/// Container for the raw data of a single road. Roads are listed once per
/// pair of towns; both directions of travel are generated when the graph is
/// created
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadRow {
    pub src: i64,
    pub dst: i64,
    pub distance: u64,
}

impl Into<EdgeData> for RoadRow {
    /// Unpack the raw road data into a format which can be loaded into the
    /// graph
    fn into(self) -> EdgeData {
        EdgeData {
            src: self.src,
            dst: self.dst,
            distance: self.distance,
        }
    }
}

/// Fetch the full list of towns on the map. Table order sets the order in
/// which towns appear on the console menu
pub fn load_towns() -> Vec<TownRow> {
    vec![
        TownRow { id: 1, name: "Pune" },
        TownRow { id: 2, name: "Satara" },
        TownRow { id: 3, name: "Hubali" },
        TownRow { id: 4, name: "Kolapur" },
        TownRow { id: 5, name: "Belgaum" },
        TownRow { id: 6, name: "Solapur" },
    ]
}

/// Fetch the full list of roads on the map, with distances between each pair
/// of connected towns
pub fn load_roads() -> Vec<RoadRow> {
    vec![
        RoadRow { src: 1, dst: 2, distance: 2 },
        RoadRow { src: 1, dst: 3, distance: 4 },
        RoadRow { src: 2, dst: 3, distance: 1 },
        RoadRow { src: 2, dst: 4, distance: 7 },
        RoadRow { src: 3, dst: 4, distance: 3 },
        RoadRow { src: 3, dst: 5, distance: 7 },
        RoadRow { src: 4, dst: 5, distance: 2 },
        RoadRow { src: 1, dst: 6, distance: 8 },
        RoadRow { src: 2, dst: 5, distance: 7 },
        RoadRow { src: 2, dst: 6, distance: 3 },
        RoadRow { src: 5, dst: 6, distance: 15 },
    ]
}

#[cfg(test)]
mod tests {

    use super::*;

    /// The map should contain all six towns, in menu order
    #[test]
    fn test_load_towns() {
        let result: Vec<&str> =
            load_towns().iter().map(|town| town.name).collect();

        let target =
            vec!["Pune", "Satara", "Hubali", "Kolapur", "Belgaum", "Solapur"];

        assert_eq!(result, target);
    }

    /// Town ids must be unique, they are the key used for edge endpoints
    #[test]
    fn test_town_ids_unique() {
        let towns = load_towns();

        let mut ids: Vec<i64> = towns.iter().map(|town| town.id).collect();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), towns.len());
    }

    /// Every road endpoint must reference a town which is in the towns table
    #[test]
    fn test_road_endpoints_exist() {
        let town_ids: Vec<i64> =
            load_towns().iter().map(|town| town.id).collect();

        for road in load_roads() {
            assert!(town_ids.contains(&road.src));
            assert!(town_ids.contains(&road.dst));
        }
    }

    /// The fixed map lists eleven roads
    #[test]
    fn test_load_roads() {
        let result = load_roads().len();

        assert_eq!(result, 11);
    }

    /// Check the row conversion retains the town id and name
    #[test]
    fn test_town_row_into_node_data() {
        let test_row = TownRow { id: 1, name: "Pune" };

        let result: NodeData = test_row.into();

        let target = NodeData {
            id: 1,
            name: "Pune".to_string(),
        };

        assert_eq!(result, target);
    }

    /// Check the row conversion retains the road endpoints and distance
    #[test]
    fn test_road_row_into_edge_data() {
        let test_row = RoadRow { src: 1, dst: 2, distance: 2 };

        let result: EdgeData = test_row.into();

        let target = EdgeData {
            src: 1,
            dst: 2,
            distance: 2,
        };

        assert_eq!(result, target);
    }
}
